use crate::ids::{PanelId, WidgetId};
use crate::state::Monitor;
use serde::{Deserialize, Serialize};

/// The three horizontal regions of a panel, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneSide {
    Leading,
    Center,
    Trailing,
}

impl ZoneSide {
    pub const ALL: [ZoneSide; 3] = [ZoneSide::Leading, ZoneSide::Center, ZoneSide::Trailing];
}

/// Kinds of widgets the dock asks the host to create.  Everything else in a
/// panel (clock, app menu, activities, aggregate menu) is host-owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    /// The taskbar of running / favourite applications.
    Taskbar,
    ShowDesktopButton,
    /// Invisible, non-reactive placeholder that reserves overview margin.
    Ghost,
    /// Zero-height chrome strip at the top of the monitor.
    TopLimit,
    /// Independent clock for a secondary panel.
    Clock,
}

/// Host status-area widgets.  Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusArea {
    pub activities:     Option<WidgetId>,
    pub app_menu:       Option<WidgetId>,
    pub date_menu:      Option<WidgetId>,
    pub aggregate_menu: Option<WidgetId>,
}

/// Everything the host hands over when a panel is adopted by the dock.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub id:           PanelId,
    pub monitor:      Monitor,
    /// The panel actor itself (the thing that gets a height and style classes).
    pub actor:        WidgetId,
    /// The box that positions the panel on screen.
    pub panel_box:    WidgetId,
    pub leading:      Vec<WidgetId>,
    pub center:       Vec<WidgetId>,
    pub trailing:     Vec<WidgetId>,
    pub left_corner:  Option<WidgetId>,
    pub right_corner: Option<WidgetId>,
    pub status:       StatusArea,
    /// `true` for panels created by the dock on non-primary monitors.
    pub secondary:    bool,
}
