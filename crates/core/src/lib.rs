pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod ids;
pub mod state;
pub mod widget;

pub use error::{DockError, Result};
pub use event::{DragMotion, DragSource, Message, Signal, SignalKind, SignalSource};
pub use geometry::{Point, Rect, Size, TextDirection};
pub use host::{
    Barrier, BarrierDirection, ChromeFlags, Chrome, Displays, LayoutDelegate, Overview, Scheduler,
    Shell, Signals, Stage, WindowTracker,
};
pub use ids::{BarrierId, PanelId, SubscriptionId, TimerId, WidgetId, WindowId};
pub use state::{Monitor, MonitorTopology, WindowInfo, WindowType};
pub use widget::{PanelSpec, StatusArea, WidgetKind, ZoneSide};
