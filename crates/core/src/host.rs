//! The host shell as seen by the dock.
//!
//! The dock never renders, dispatches input, or manages windows itself.  It
//! only talks to the host through these traits: the scene graph (`Stage`),
//! chrome and barriers (`Chrome`), windows (`WindowTracker`), displays
//! (`Displays`), the overview (`Overview`), one-shot timers (`Scheduler`) and
//! signal connections (`Signals`).  [`Shell`] is the union every host provides.

use crate::event::{SignalKind, SignalSource};
use crate::geometry::{Point, Rect, TextDirection};
use crate::ids::{BarrierId, PanelId, SubscriptionId, TimerId, WidgetId, WindowId};
use crate::state::{Monitor, WindowInfo};
use crate::widget::{PanelSpec, WidgetKind, ZoneSide};
use std::time::Duration;

/// Who lays out a panel's zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDelegate {
    /// The host's own box layout.
    #[default]
    Host,
    /// The dock controller owning that panel.
    Dock(PanelId),
}

/// Chrome registration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeFlags {
    pub affects_struts:   bool,
    pub track_fullscreen: bool,
}

/// Directions a pointer barrier blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierDirection {
    PositiveX,
    NegativeX,
}

/// A vertical or horizontal line that stops pointer motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barrier {
    pub x1:        f32,
    pub y1:        f32,
    pub x2:        f32,
    pub y2:        f32,
    pub direction: BarrierDirection,
}

/// Scene-graph primitives.
pub trait Stage {
    fn create_widget(&mut self, kind: WidgetKind) -> WidgetId;
    fn destroy_widget(&mut self, widget: WidgetId);

    fn is_visible(&self, widget: WidgetId) -> bool;
    fn set_visible(&mut self, widget: WidgetId, visible: bool);

    /// `(minimum, natural)` width.
    fn preferred_width(&self, widget: WidgetId) -> (f32, f32);
    /// `(minimum, natural)` height.
    fn preferred_height(&self, widget: WidgetId) -> (f32, f32);

    fn height(&self, widget: WidgetId) -> f32;
    fn set_height(&mut self, widget: WidgetId, height: f32);
    fn set_width(&mut self, widget: WidgetId, width: f32);
    fn set_position(&mut self, widget: WidgetId, position: Point);

    fn anchor(&self, widget: WidgetId) -> Point;
    fn set_anchor(&mut self, widget: WidgetId, anchor: Point);
    /// Position on the stage after anchors and parents are applied.
    fn transformed_position(&self, widget: WidgetId) -> Point;

    fn has_style_class(&self, widget: WidgetId, class: &str) -> bool;
    fn add_style_class(&mut self, widget: WidgetId, class: &str);
    fn remove_style_class(&mut self, widget: WidgetId, class: &str);

    fn text_direction(&self, widget: WidgetId) -> TextDirection;

    /// Icon size a taskbar currently draws its app icons at.
    fn icon_size(&self, taskbar: WidgetId) -> u32;
    /// Recompute the hover state of a zone from the current pointer position.
    fn sync_hover(&mut self, panel: PanelId, zone: ZoneSide);

    /// Apply an allocation computed by the dock to a single widget.
    fn allocate(&mut self, widget: WidgetId, allocation: Rect);
    /// Apply an allocation computed by the dock to one of a panel's zones.
    fn allocate_zone(&mut self, panel: PanelId, zone: ZoneSide, allocation: Rect);
    /// Push a zone's child order to the host.
    fn set_zone_children(&mut self, panel: PanelId, zone: ZoneSide, children: &[WidgetId]);

    fn layout_delegate(&self, panel: PanelId) -> LayoutDelegate;
    fn set_layout_delegate(&mut self, panel: PanelId, delegate: LayoutDelegate);

    /// The host's own panel on the primary monitor, with its current zones.
    fn primary_panel(&self) -> Option<PanelSpec>;
    /// Build a bare panel (box, actor, empty zones, corners) for `monitor`.
    fn create_panel(&mut self, monitor: &Monitor) -> PanelSpec;
    fn destroy_panel(&mut self, panel: PanelId);
    /// Keep a secondary panel box below the primary one in stacking order.
    fn stack_below_primary(&mut self, panel_box: WidgetId);

    /// Rebuild the taskbar's app icons after a size or spacing change.
    fn reset_app_icons(&mut self, taskbar: WidgetId);
}

pub trait Chrome {
    fn add_chrome(&mut self, widget: WidgetId, flags: ChromeFlags);
    fn remove_chrome(&mut self, widget: WidgetId);
    fn create_barrier(&mut self, barrier: Barrier) -> BarrierId;
    fn destroy_barrier(&mut self, barrier: BarrierId);
    fn update_hot_corners(&mut self);
    fn update_panel_barrier(&mut self);
    /// Make `widget` reachable from the keyboard focus switcher (Ctrl+Alt+Tab).
    fn add_focus_group(&mut self, widget: WidgetId, name: &str);
    fn remove_focus_group(&mut self, widget: WidgetId);
}

pub trait WindowTracker {
    /// Windows of the active workspace, bottom-most first.
    fn workspace_windows(&self) -> Vec<WindowInfo>;
    fn minimize(&mut self, window: WindowId);
    fn activate(&mut self, window: WindowId);
}

pub trait Displays {
    fn monitors(&self) -> Vec<Monitor>;
    fn primary_monitor(&self) -> Option<Monitor>;
    fn scale_factor(&self) -> f32;
}

pub trait Overview {
    /// Fully shown.
    fn is_active(&self) -> bool;
    /// Shown or in the middle of showing.
    fn visible_target(&self) -> bool;
    fn focused_monitor(&self) -> Option<usize>;
    fn show(&mut self);
    fn hide(&mut self);
    fn should_toggle_by_corner_or_button(&self) -> bool;
    fn add_actor(&mut self, widget: WidgetId);
    fn remove_actor(&mut self, widget: WidgetId);
    fn contains_actor(&self, widget: WidgetId) -> bool;
    /// Height of the host's own top ghost.
    fn panel_ghost_height(&self) -> f32;
    fn set_panel_ghost_height(&mut self, height: f32);
    fn session_has_windows(&self) -> bool;
    /// Icon size of the host's own dash.
    fn dash_icon_size(&self) -> u32;
    /// Size the overview gives app icons dragged out of a dash.
    fn set_drag_icon_size(&mut self, size: u32);
}

pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId;
    /// Cancelling an unknown or already fired timer is a no-op.
    fn cancel(&mut self, timer: TimerId);
}

pub trait Signals {
    fn connect(&mut self, source: SignalSource, kind: SignalKind) -> SubscriptionId;
    /// Disconnecting an unknown id is a no-op.
    fn disconnect(&mut self, id: SubscriptionId);
}

/// Everything the dock needs from its host.
pub trait Shell: Stage + Chrome + WindowTracker + Displays + Overview + Scheduler + Signals {}

impl<T> Shell for T where T: Stage + Chrome + WindowTracker + Displays + Overview + Scheduler + Signals {}
