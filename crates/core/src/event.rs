use crate::geometry::Rect;
use crate::ids::{PanelId, TimerId, WidgetId};
use crate::state::MonitorTopology;
use crate::widget::ZoneSide;

/// All messages that can flow from the host into the dock.
///
/// Sources:
/// - Host layout pass      → `Allocate`
/// - Host signal emission  → `Signal`
/// - Host timer source     → `TimerFired`
/// - Display manager       → `MonitorsChanged`
/// - Config watcher task   → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    /// The host is laying out a panel whose delegate is the dock.
    Allocate { panel: PanelId, allocation: Rect },
    /// A host object emitted a signal somebody may be subscribed to.
    Signal { source: SignalSource, signal: Signal },
    /// A timer armed through `Scheduler::schedule` is due.
    TimerFired(TimerId),
    /// Monitor topology changed; carries the full new list.
    MonitorsChanged(MonitorTopology),
    /// Config file changed on disk, triggers a live reload.
    ConfigReloaded,
    /// Graceful shutdown requested.
    Shutdown,
}

/// Host objects that emit signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalSource {
    Widget(WidgetId),
    /// A zone of a panel, as seen by the host (children added by third parties).
    Zone(PanelId, ZoneSide),
    /// The stage theme context (scale factor).
    Theme,
    Overview,
    /// The host's own dash inside the overview.
    Dash,
    WindowTracker,
}

/// Signal payloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    HeightChanged,
    AllocationChanged(Rect),
    ScaleFactorChanged,
    OverviewShowing,
    OverviewHiding,
    OverviewHidden,
    ActorAdded(WidgetId),
    ButtonPressed,
    PointerEntered,
    PointerLeft,
    /// Window geometry, stacking, or window set changed.
    WindowsChanged,
    FocusAppChanged,
    IconSizeChanged,
    /// A popup menu opened from the widget was closed.
    MenuClosed,
}

/// Payload-free discriminant of [`Signal`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    HeightChanged,
    AllocationChanged,
    ScaleFactorChanged,
    OverviewShowing,
    OverviewHiding,
    OverviewHidden,
    ActorAdded,
    ButtonPressed,
    PointerEntered,
    PointerLeft,
    WindowsChanged,
    FocusAppChanged,
    IconSizeChanged,
    MenuClosed,
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::HeightChanged => SignalKind::HeightChanged,
            Signal::AllocationChanged(_) => SignalKind::AllocationChanged,
            Signal::ScaleFactorChanged => SignalKind::ScaleFactorChanged,
            Signal::OverviewShowing => SignalKind::OverviewShowing,
            Signal::OverviewHiding => SignalKind::OverviewHiding,
            Signal::OverviewHidden => SignalKind::OverviewHidden,
            Signal::ActorAdded(_) => SignalKind::ActorAdded,
            Signal::ButtonPressed => SignalKind::ButtonPressed,
            Signal::PointerEntered => SignalKind::PointerEntered,
            Signal::PointerLeft => SignalKind::PointerLeft,
            Signal::WindowsChanged => SignalKind::WindowsChanged,
            Signal::FocusAppChanged => SignalKind::FocusAppChanged,
            Signal::IconSizeChanged => SignalKind::IconSizeChanged,
            Signal::MenuClosed => SignalKind::MenuClosed,
        }
    }
}

/// Where a drag hovering the panel comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A drag started inside the shell (e.g. a taskbar icon).
    Internal,
    /// An X drag-and-drop from a client application.
    External,
}

/// Result of the drag-over hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMotion {
    /// Let the host's default drop handling proceed.
    Continue,
}
