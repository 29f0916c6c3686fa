//! Opaque handles for host-owned and controller-owned objects.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

handle!(
    /// A widget (actor) living in the host scene graph.
    WidgetId, "widget"
);
handle!(
    /// One panel per display output.
    PanelId, "panel"
);
handle!(
    /// A pending one-shot host timer.
    TimerId, "timer"
);
handle!(
    /// A pointer barrier registered with the host.
    BarrierId, "barrier"
);
handle!(
    /// A signal or settings subscription.
    SubscriptionId, "sub"
);
handle!(WindowId, "window");
