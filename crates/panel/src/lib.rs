pub mod controller;
pub mod headless;
pub mod manager;
pub mod monitors;
pub mod router;
pub mod style;
pub mod subscriptions;
pub mod timer;
pub mod zone;

pub use controller::{Disposal, PanelController, PanelState};
pub use headless::HeadlessShell;
pub use manager::PanelManager;
pub use monitors::{CoordinatorHandler, SecondaryPanel};
pub use router::{route, Action};
pub use style::{StyleState, StyleSync};
pub use subscriptions::{Handler, SubscriptionRegistry};
pub use timer::TimerSlot;
pub use zone::{Zone, Zones};
