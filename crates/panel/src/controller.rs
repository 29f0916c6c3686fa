//! Panel state controller.
//!
//! One controller per panel.  While enabled it is the panel's layout
//! delegate: every host layout pass for that panel ends up in
//! [`PanelController::allocate`].  Zone membership is owned here and pushed to
//! the host after each change.

use crate::router::{route, Action, PANEL_KEYS};
use crate::style::{StyleState, StyleSync, StyleTarget};
use crate::subscriptions::{Handler, SubscriptionRegistry};
use crate::timer::TimerSlot;
use crate::zone::{Zone, Zones};
use dock_config::{ClockAnchor, ClockLocation, DockConfig, PanelPosition, SettingKey, Settings};
use dock_core::{
    ChromeFlags, DockError, DragMotion, DragSource, LayoutDelegate, Monitor, PanelId, PanelSpec,
    Point, Rect, Result, Shell, Signal, SignalKind, SignalSource, Size, Stage, TimerId, WidgetId,
    WidgetKind, WindowId, ZoneSide,
};
use dock_layout::{AlignmentPolicy, LayoutInput, ZoneRects, ZoneWidths};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info};

pub const MAIN_PANEL_CLASS: &str = "dock-main-panel";
pub const TOP_CLASS: &str = "dock-top";
pub const BOTTOM_CLASS: &str = "dock-bottom";
pub const SHOW_DESKTOP_HOVER_CLASS: &str = "showdesktop-button-hovered";

/// Delay before the auto-hide / overlap detection starts after enabling.
pub const AUTOHIDE_START_DELAY: Duration = Duration::from_millis(2000);

/// Where the taskbar goes in its zone.
const TASKBAR_INDEX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Disabled,
    Enabling,
    Enabled,
    Disabling,
}

/// What the caller must do after [`PanelController::disable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposal {
    /// The host panel is back to how it was before enabling.
    Restored,
    /// Secondary panel: the caller destroys it.
    DestroyPanel,
}

/// Host state captured while enabling and put back while disabling.
#[derive(Debug, Clone)]
struct Saved {
    height:             f32,
    anchor:             Point,
    delegate:           LayoutDelegate,
    ghost_height:       f32,
    zones:              Zones,
    activities_visible: Option<bool>,
}

#[derive(Debug)]
pub struct PanelController {
    spec:             PanelSpec,
    zones:            Zones,
    state:            PanelState,
    policy:           AlignmentPolicy,
    taskbar_zone:     ZoneSide,
    position:         PanelPosition,
    location_clock:   ClockLocation,
    taskbar:          Option<WidgetId>,
    ghost:            Option<WidgetId>,
    top_limit:        Option<WidgetId>,
    show_desktop:     Option<WidgetId>,
    /// Windows minimized by the show-desktop button, to bring back on the next press.
    restore_list:     Option<Vec<WindowId>>,
    subscriptions:    SubscriptionRegistry,
    autohide_timer:   TimerSlot,
    autohide_started: bool,
    focus_watch:      TimerSlot,
    style:            StyleSync,
    saved:            Option<Saved>,
}

impl PanelController {
    pub fn new(spec: PanelSpec) -> Self {
        let zones = Zones {
            leading:  Zone::new(spec.leading.clone()),
            center:   Zone::new(spec.center.clone()),
            trailing: Zone::new(spec.trailing.clone()),
        };
        Self {
            spec,
            zones,
            state: PanelState::Disabled,
            policy: AlignmentPolicy::default(),
            taskbar_zone: ZoneSide::Leading,
            position: PanelPosition::default(),
            location_clock: ClockLocation::default(),
            taskbar: None,
            ghost: None,
            top_limit: None,
            show_desktop: None,
            restore_list: None,
            subscriptions: SubscriptionRegistry::default(),
            autohide_timer: TimerSlot::default(),
            autohide_started: false,
            focus_watch: TimerSlot::default(),
            style: StyleSync::default(),
            saved: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn id(&self) -> PanelId {
        self.spec.id
    }

    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    pub fn monitor(&self) -> &Monitor {
        &self.spec.monitor
    }

    pub fn is_secondary(&self) -> bool {
        self.spec.secondary
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    pub fn policy(&self) -> AlignmentPolicy {
        self.policy
    }

    pub fn position(&self) -> PanelPosition {
        self.position
    }

    pub fn taskbar(&self) -> Option<WidgetId> {
        self.taskbar
    }

    pub fn ghost(&self) -> Option<WidgetId> {
        self.ghost
    }

    pub fn top_limit(&self) -> Option<WidgetId> {
        self.top_limit
    }

    pub fn show_desktop_button(&self) -> Option<WidgetId> {
        self.show_desktop
    }

    pub fn style_state(&self) -> StyleState {
        self.style.state()
    }

    pub fn autohide_started(&self) -> bool {
        self.autohide_started
    }

    pub fn restore_list(&self) -> Option<&[WindowId]> {
        self.restore_list.as_deref()
    }

    pub fn subscriptions(&self) -> &SubscriptionRegistry {
        &self.subscriptions
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    pub fn enable(&mut self, host: &mut impl Shell, settings: &mut Settings) -> Result<()> {
        if self.state != PanelState::Disabled {
            return Err(DockError::Panel(format!(
                "{} cannot be enabled while {:?}",
                self.spec.id, self.state
            )));
        }
        self.state = PanelState::Enabling;

        let config = settings.get().clone();
        let id = self.spec.id;
        let actor = self.spec.actor;

        self.policy = config.taskbar_position.into();
        self.taskbar_zone = if self.policy.is_centered() {
            ZoneSide::Center
        } else {
            ZoneSide::Leading
        };

        self.saved = Some(Saved {
            height:             host.height(actor),
            anchor:             host.anchor(self.spec.panel_box),
            delegate:           host.layout_delegate(id),
            ghost_height:       host.panel_ghost_height(),
            zones:              self.zones.clone(),
            activities_visible: self.spec.status.activities.map(|a| host.is_visible(a)),
        });

        self.ghost = Some(host.create_widget(WidgetKind::Ghost));
        self.sync_panel_position(host, &config);

        self.subscriptions.connect(
            host,
            SignalSource::Widget(self.spec.panel_box),
            SignalKind::HeightChanged,
            Handler::SyncPanelPosition,
        );
        self.subscriptions.connect(
            host,
            SignalSource::Theme,
            SignalKind::ScaleFactorChanged,
            Handler::SyncPanelPosition,
        );

        host.set_layout_delegate(id, LayoutDelegate::Dock(id));

        if let Some(menu) = self.spec.status.app_menu {
            self.zones.detach(menu);
        }

        let taskbar = host.create_widget(WidgetKind::Taskbar);
        self.zones.get_mut(self.taskbar_zone).insert(TASKBAR_INDEX, taskbar);
        self.taskbar = Some(taskbar);
        self.sync_dash_icon_size(host);

        self.set_activities_button_visible(host, config.show_activities_button);
        self.set_app_menu_visible(host, config.show_appmenu);
        self.set_clock_location(host, config.location_clock);
        self.set_show_desktop_button_visible(
            host,
            config.show_showdesktop_button,
            config.showdesktop_button_width,
        );
        self.zones.sync_all(host, id);

        host.add_style_class(actor, MAIN_PANEL_CLASS);

        self.autohide_timer.arm(host, AUTOHIDE_START_DELAY);

        let host_subscriptions = [
            (SignalSource::Widget(taskbar), SignalKind::IconSizeChanged, Handler::SyncDashIconSize),
            // runs after the host's own handler, so the dash can't shrink dragged icons back
            (SignalSource::Dash, SignalKind::IconSizeChanged, Handler::SyncDashIconSize),
            (SignalSource::Widget(taskbar), SignalKind::MenuClosed, Handler::SyncHover),
            (SignalSource::Overview, SignalKind::OverviewHidden, Handler::UpdateStyle),
            (SignalSource::Overview, SignalKind::OverviewShowing, Handler::SyncOverview),
            (SignalSource::Overview, SignalKind::OverviewHiding, Handler::SyncOverview),
            (SignalSource::WindowTracker, SignalKind::WindowsChanged, Handler::UpdateStyle),
            (
                SignalSource::Zone(id, ZoneSide::Trailing),
                SignalKind::ActorAdded,
                Handler::AdoptWidget(ZoneSide::Trailing),
            ),
            (
                SignalSource::Zone(id, ZoneSide::Center),
                SignalKind::ActorAdded,
                Handler::AdoptWidget(ZoneSide::Center),
            ),
        ];
        for (source, kind, handler) in host_subscriptions {
            self.subscriptions.connect(host, source, kind, handler);
        }
        for key in PANEL_KEYS {
            self.subscriptions.connect_setting(settings, key);
        }

        self.state = PanelState::Enabled;
        self.update_style(host);

        info!(
            panel = %id,
            monitor = self.spec.monitor.index,
            policy = ?self.policy,
            position = ?self.position,
            "panel enabled"
        );
        Ok(())
    }

    /// Undo everything `enable` did.  Every step runs even when the resource
    /// it cleans up is already gone.
    pub fn disable(&mut self, host: &mut impl Shell, settings: &mut Settings) -> Result<Disposal> {
        if self.state != PanelState::Enabled {
            return Err(DockError::Panel(format!(
                "{} cannot be disabled while {:?}",
                self.spec.id, self.state
            )));
        }
        self.state = PanelState::Disabling;

        let id = self.spec.id;
        let actor = self.spec.actor;

        self.style.reset(host, actor);
        self.subscriptions.release(host, settings);

        if let Some(taskbar) = self.taskbar.take() {
            self.zones.detach(taskbar);
            host.destroy_widget(taskbar);
        }
        let dash = host.dash_icon_size();
        host.set_drag_icon_size(dash);
        if let Some(menu) = self.spec.status.app_menu {
            self.zones.detach(menu);
        }

        if self.autohide_timer.is_armed() {
            self.autohide_timer.cancel(host);
        } else if self.autohide_started {
            debug!(panel = %id, "stopping auto-hide");
        }
        self.autohide_started = false;
        self.focus_watch.cancel(host);
        self.restore_list = None;

        host.remove_style_class(actor, MAIN_PANEL_CLASS);
        self.remove_top_limit(host);

        if let Some(ghost) = self.ghost.take() {
            if host.contains_actor(ghost) {
                host.remove_actor(ghost);
            }
            host.destroy_widget(ghost);
        }
        self.set_show_desktop_button_visible(host, false, 0);

        let saved = self.saved.take();
        let disposal = if self.spec.secondary {
            Disposal::DestroyPanel
        } else {
            if let Some(saved) = saved {
                host.set_height(actor, saved.height);
                host.set_anchor(self.spec.panel_box, saved.anchor);
                host.set_panel_ghost_height(saved.ghost_height);
                host.set_layout_delegate(id, saved.delegate);
                if let (Some(activities), Some(visible)) =
                    (self.spec.status.activities, saved.activities_visible)
                {
                    host.set_visible(activities, visible);
                }
                self.restore_zones(saved.zones);
            } else {
                host.set_layout_delegate(id, LayoutDelegate::Host);
            }
            host.remove_style_class(actor, TOP_CLASS);
            host.remove_style_class(actor, BOTTOM_CLASS);
            self.zones.sync_all(host, id);
            host.update_hot_corners();
            host.update_panel_barrier();
            Disposal::Restored
        };

        self.state = PanelState::Disabled;
        info!(panel = %id, ?disposal, "panel disabled");
        Ok(disposal)
    }

    /// Put the pre-enable membership back.  Widgets third parties added while
    /// we were enabled stay in the zone they ended up in, after the originals.
    fn restore_zones(&mut self, original: Zones) {
        let mut restored = original.clone();
        for side in ZoneSide::ALL {
            for widget in &self.zones.get(side).children {
                if original.find(*widget).is_none() {
                    restored.get_mut(side).push(*widget);
                }
            }
        }
        self.zones = restored;
    }

    // ── Layout ────────────────────────────────────────────────────────────────

    /// The layout callback.  Runs synchronously inside the host's layout pass.
    pub fn allocate(&mut self, host: &mut impl Shell, allocation: Rect) -> ZoneRects {
        let width = allocation.width();
        let height = allocation.height();

        let natural = ZoneWidths {
            leading:  self.zones.leading.preferred_width(&*host).1,
            center:   self.zones.center.preferred_width(&*host).1,
            trailing: self.zones.trailing.preferred_width(&*host).1,
        };
        let input = LayoutInput {
            width,
            height,
            natural,
            policy: self.policy,
            direction: host.text_direction(self.spec.actor),
        };
        let rects = dock_layout::allocate(&input);
        if !rects.is_well_formed(width) {
            debug!(panel = %self.spec.id, ?natural, width, "zone widths exceed the panel");
        }

        for (side, rect) in [
            (ZoneSide::Leading, rects.leading),
            (ZoneSide::Center, rects.center),
            (ZoneSide::Trailing, rects.trailing),
        ] {
            self.zones.get_mut(side).allocation = rect;
            host.allocate_zone(self.spec.id, side, rect);
        }

        let left = natural_size(&*host, self.spec.left_corner);
        let right = natural_size(&*host, self.spec.right_corner);
        let (left_box, right_box) =
            dock_layout::corner_rects(Size::new(width, height), left, right);
        if let Some(corner) = self.spec.left_corner {
            host.allocate(corner, left_box);
        }
        if let Some(corner) = self.spec.right_corner {
            host.allocate(corner, right_box);
        }

        debug!(panel = %self.spec.id, ?rects, "allocated zones");
        rects
    }

    // ── Position ──────────────────────────────────────────────────────────────

    fn sync_panel_position(&mut self, host: &mut impl Shell, config: &DockConfig) {
        let scale = host.scale_factor();
        self.set_panel_position(host, config.panel_position, config.panel_size, scale);
    }

    pub fn set_panel_position(
        &mut self,
        host: &mut impl Shell,
        position: PanelPosition,
        size: u32,
        scale: f32,
    ) {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        let height = size as f32 * scale;
        let actor = self.spec.actor;
        let is_top = position == PanelPosition::Top;

        host.set_height(actor, height);
        self.position = position;

        // The host's own ghost only reserves the top margin of the primary.
        if !self.spec.secondary {
            host.set_panel_ghost_height(if is_top { height } else { 0.0 });
        }
        if let Some(ghost) = self.ghost {
            host.set_height(ghost, if is_top { 0.0 } else { height });
        }

        if is_top {
            host.set_anchor(self.spec.panel_box, Point::ORIGIN);
            self.remove_top_limit(host);
            host.remove_style_class(actor, BOTTOM_CLASS);
            if !host.has_style_class(actor, TOP_CLASS) {
                host.add_style_class(actor, TOP_CLASS);
            }
        } else {
            let monitor = &self.spec.monitor;
            host.set_anchor(
                self.spec.panel_box,
                Point::new(0.0, -(monitor.height - height)),
            );

            let limit = match self.top_limit {
                Some(limit) => limit,
                None => {
                    let limit = host.create_widget(WidgetKind::TopLimit);
                    host.add_chrome(
                        limit,
                        ChromeFlags { affects_struts: true, track_fullscreen: true },
                    );
                    self.top_limit = Some(limit);
                    limit
                }
            };
            host.set_position(limit, monitor.origin());
            host.set_width(limit, monitor.width);
            host.set_height(limit, 0.0);

            host.remove_style_class(actor, TOP_CLASS);
            if !host.has_style_class(actor, BOTTOM_CLASS) {
                host.add_style_class(actor, BOTTOM_CLASS);
            }
        }

        host.update_hot_corners();
        host.update_panel_barrier();
    }

    fn remove_top_limit(&mut self, host: &mut impl Shell) {
        if let Some(limit) = self.top_limit.take() {
            host.remove_chrome(limit);
            host.destroy_widget(limit);
        }
    }

    /// The panel moved to a different monitor descriptor.
    pub fn set_monitor(&mut self, host: &mut impl Shell, monitor: Monitor, config: &DockConfig) {
        if self.spec.monitor == monitor {
            return;
        }
        self.spec.monitor = monitor;
        if self.state == PanelState::Enabled {
            self.sync_panel_position(host, config);
        }
    }

    // ── Embedded widgets ──────────────────────────────────────────────────────

    pub fn set_clock_location(&mut self, host: &mut impl Shell, location: ClockLocation) {
        self.location_clock = location;

        let Some(clock) = self.spec.status.date_menu else {
            return;
        };
        let Some(parent) = self.zones.find(clock) else {
            return;
        };

        let (destination, sibling) = match location.anchor() {
            ClockAnchor::Buttons => (ZoneSide::Center, None),
            ClockAnchor::Status => (ZoneSide::Trailing, self.spec.status.aggregate_menu),
            ClockAnchor::Taskbar => match self.taskbar.and_then(|t| self.zones.find(t)) {
                Some(side) => (side, self.taskbar),
                None => return,
            },
        };

        if parent != destination {
            self.zones.get_mut(parent).remove(clock);
            self.zones.get_mut(destination).push(clock);
        }

        let zone = self.zones.get_mut(destination);
        if location.is_right() {
            zone.place_above(clock, sibling);
        } else {
            zone.place_below(clock, sibling);
        }

        self.zones.sync(host, self.spec.id, parent);
        self.zones.sync(host, self.spec.id, destination);
    }

    pub fn set_app_menu_visible(&mut self, host: &mut impl Shell, visible: bool) {
        let Some(menu) = self.spec.status.app_menu else {
            return;
        };

        if visible {
            let in_place = if self.policy.is_centered() {
                self.zones.leading.children.last() == Some(&menu)
            } else {
                self.zones.center.children.first() == Some(&menu)
            };
            if in_place {
                return;
            }
            self.zones.detach(menu);
            if self.policy.is_centered() {
                self.zones.leading.push(menu);
            } else {
                self.zones.center.insert(0, menu);
            }
        } else if self.zones.detach(menu).is_none() {
            return;
        }

        self.zones.sync_all(host, self.spec.id);
    }

    pub fn set_activities_button_visible(&mut self, host: &mut impl Shell, visible: bool) {
        if let Some(activities) = self.spec.status.activities {
            if host.is_visible(activities) != visible {
                host.set_visible(activities, visible);
            }
        }
    }

    pub fn set_show_desktop_button_visible(
        &mut self,
        host: &mut impl Shell,
        visible: bool,
        width: u32,
    ) {
        if visible {
            if self.show_desktop.is_some() {
                return;
            }
            let button = host.create_widget(WidgetKind::ShowDesktopButton);
            host.set_width(button, width as f32);

            let source = SignalSource::Widget(button);
            self.subscriptions
                .connect(host, source, SignalKind::ButtonPressed, Handler::ShowDesktopPressed);
            self.subscriptions
                .connect(host, source, SignalKind::PointerEntered, Handler::ShowDesktopHover(true));
            self.subscriptions
                .connect(host, source, SignalKind::PointerLeft, Handler::ShowDesktopHover(false));

            self.zones.trailing.push(button);
            self.show_desktop = Some(button);
        } else {
            let Some(button) = self.show_desktop.take() else {
                return;
            };
            self.subscriptions.release_source(host, SignalSource::Widget(button));
            self.zones.trailing.remove(button);
            host.destroy_widget(button);
        }
        self.zones.sync(host, self.spec.id, ZoneSide::Trailing);
    }

    pub fn set_show_desktop_button_width(&mut self, host: &mut impl Shell, width: u32) {
        if let Some(button) = self.show_desktop {
            host.set_width(button, width as f32);
        }
    }

    /// Give the panel a clock it didn't have (secondary panels).
    pub fn attach_clock(&mut self, host: &mut impl Shell, clock: WidgetId) {
        if self.spec.status.date_menu.is_some() {
            return;
        }
        self.spec.status.date_menu = Some(clock);
        self.zones.center.push(clock);
        self.zones.sync(host, self.spec.id, ZoneSide::Center);
        self.set_clock_location(host, self.location_clock);
    }

    /// Take the clock out of the panel; the caller decides what to do with it.
    pub fn detach_clock(&mut self, host: &mut impl Shell) -> Option<WidgetId> {
        let clock = self.spec.status.date_menu.take()?;
        if let Some(side) = self.zones.detach(clock) {
            self.zones.sync(host, self.spec.id, side);
        }
        Some(clock)
    }

    /// A third party put `widget` into one of our zones.
    fn adopt_widget(&mut self, host: &mut impl Shell, side: ZoneSide, widget: WidgetId) {
        if self.zones.find(widget).is_none() {
            self.zones.get_mut(side).push(widget);
            self.zones.sync(host, self.spec.id, side);
        }
        self.set_clock_location(host, self.location_clock);
    }

    // ── Overview, style, drag and drop ────────────────────────────────────────

    fn sync_overview(&mut self, host: &mut impl Shell) {
        let focused = host.focused_monitor() == Some(self.spec.monitor.index);
        let overview = host.visible_target();
        host.set_visible(self.spec.actor, !overview || focused);

        if let Some(ghost) = self.ghost {
            if overview && focused {
                if !host.contains_actor(ghost) {
                    host.add_actor(ghost);
                }
            } else if host.contains_actor(ghost) {
                host.remove_actor(ghost);
            }
        }
    }

    /// Dragged app icons keep the taskbar's icon size.
    fn sync_dash_icon_size(&self, host: &mut impl Shell) {
        if let Some(taskbar) = self.taskbar {
            let size = host.icon_size(taskbar);
            host.set_drag_icon_size(size);
        }
    }

    fn sync_taskbar_hover(&self, host: &mut impl Shell) {
        if let Some(side) = self.taskbar.and_then(|t| self.zones.find(t)) {
            host.sync_hover(self.spec.id, side);
        }
    }

    pub fn update_style(&mut self, host: &mut impl Shell) {
        let target = StyleTarget {
            actor:    self.spec.actor,
            monitor:  self.spec.monitor.index,
            position: self.position,
        };
        self.style.update(host, &target);
    }

    /// Drag-over hook: always lets the host's default drop handling continue.
    pub fn handle_drag_over(&self, host: &mut impl Shell, source: DragSource) -> DragMotion {
        if source == DragSource::External && host.should_toggle_by_corner_or_button() {
            // let the user pick a window to drop onto
            host.show();
        }
        DragMotion::Continue
    }

    // ── Show desktop ──────────────────────────────────────────────────────────

    fn toggle_desktop(&mut self, host: &mut impl Shell) {
        self.focus_watch.cancel(host);
        self.subscriptions.release_handler(host, Handler::ForgetRestoreList);

        match self.restore_list.take() {
            Some(list) if !list.is_empty() => {
                let present: HashSet<WindowId> =
                    host.workspace_windows().iter().map(|w| w.id).collect();
                for window in list.into_iter().filter(|w| present.contains(w)) {
                    host.activate(window);
                }
            }
            _ => {
                let windows: Vec<WindowId> = host
                    .workspace_windows()
                    .into_iter()
                    .filter(|w| w.showing && !w.skip_taskbar)
                    .map(|w| w.id)
                    .collect();
                for window in &windows {
                    host.minimize(*window);
                }
                debug!(panel = %self.spec.id, count = windows.len(), "showing desktop");
                self.restore_list = Some(windows);
                // Watch focus only after the minimize storm has settled.
                self.focus_watch.arm(host, Duration::ZERO);
            }
        }
        host.hide();
    }

    // ── Event entry points ────────────────────────────────────────────────────

    /// Run one subscription handler.  Returns the follow-up the caller has to
    /// perform when the controller can't do it alone.
    pub fn handle(
        &mut self,
        host: &mut impl Shell,
        settings: &Settings,
        handler: Handler,
        signal: Option<&Signal>,
    ) -> Option<Action> {
        if self.state != PanelState::Enabled {
            return None;
        }

        match handler {
            Handler::SyncPanelPosition => self.sync_panel_position(host, settings.get()),
            Handler::UpdateStyle => self.update_style(host),
            Handler::SyncOverview => self.sync_overview(host),
            Handler::AdoptWidget(side) => {
                if let Some(Signal::ActorAdded(widget)) = signal {
                    self.adopt_widget(host, side, *widget);
                }
            }
            Handler::ShowDesktopPressed => self.toggle_desktop(host),
            Handler::ShowDesktopHover(hovered) => {
                if let Some(button) = self.show_desktop {
                    if hovered {
                        host.add_style_class(button, SHOW_DESKTOP_HOVER_CLASS);
                    } else {
                        host.remove_style_class(button, SHOW_DESKTOP_HOVER_CLASS);
                    }
                }
            }
            Handler::ForgetRestoreList => {
                self.restore_list = None;
                self.subscriptions.release_handler(host, Handler::ForgetRestoreList);
            }
            Handler::SyncDashIconSize => self.sync_dash_icon_size(host),
            Handler::SyncHover => self.sync_taskbar_hover(host),
            Handler::Setting(key) => return self.apply_setting(host, settings.get(), key),
        }
        None
    }

    fn apply_setting(
        &mut self,
        host: &mut impl Shell,
        config: &DockConfig,
        key: SettingKey,
    ) -> Option<Action> {
        let action = route(key)?;
        debug!(panel = %self.spec.id, %key, ?action, "setting changed");

        match action {
            Action::Rebuild => return Some(action),
            Action::SyncPanelPosition => self.sync_panel_position(host, config),
            Action::SyncPanelPositionAndResetIcons => {
                self.sync_panel_position(host, config);
                self.reset_app_icons(host);
            }
            Action::ResetAppIcons => self.reset_app_icons(host),
            Action::SyncActivitiesButton => {
                self.set_activities_button_visible(host, config.show_activities_button)
            }
            Action::SyncAppMenu => self.set_app_menu_visible(host, config.show_appmenu),
            Action::SyncClockLocation => self.set_clock_location(host, config.location_clock),
            Action::SyncShowDesktopButton => self.set_show_desktop_button_visible(
                host,
                config.show_showdesktop_button,
                config.showdesktop_button_width,
            ),
            Action::SyncShowDesktopWidth => {
                self.set_show_desktop_button_width(host, config.showdesktop_button_width)
            }
        }
        None
    }

    fn reset_app_icons(&mut self, host: &mut impl Shell) {
        if let Some(taskbar) = self.taskbar {
            host.reset_app_icons(taskbar);
        }
    }

    /// Handle a fired timer.  Returns `true` if it belonged to this panel.
    pub fn on_timer(&mut self, host: &mut impl Shell, id: TimerId) -> bool {
        if self.autohide_timer.fire(id) {
            self.autohide_started = true;
            debug!(panel = %self.spec.id, "auto-hide started");
            return true;
        }
        if self.focus_watch.fire(id) {
            self.subscriptions.connect(
                host,
                SignalSource::WindowTracker,
                SignalKind::FocusAppChanged,
                Handler::ForgetRestoreList,
            );
            return true;
        }
        self.style.on_timer(host, self.spec.actor, id)
    }
}

/// Natural width and height of an optional widget.
fn natural_size(host: &impl Stage, widget: Option<WidgetId>) -> Size {
    widget
        .map(|w| Size::new(host.preferred_width(w).1, host.preferred_height(w).1))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessShell, HOST_DASH_ICON_SIZE, HOST_PANEL_HEIGHT, TASKBAR_ICON_SIZE};
    use crate::style::SOLID_CLASS;
    use dock_config::TaskbarPosition;
    use dock_core::{Message, Overview, TextDirection, WindowInfo, WindowType};

    fn enabled(config: DockConfig) -> (HeadlessShell, Settings, PanelController) {
        let mut host = HeadlessShell::new();
        let mut settings = Settings::new(config);
        let mut controller = PanelController::new(host.primary_panel().unwrap());
        controller.enable(&mut host, &mut settings).unwrap();
        (host, settings, controller)
    }

    /// Change the settings and run whatever the controller subscribed to.
    fn deliver(
        host: &mut HeadlessShell,
        settings: &mut Settings,
        controller: &mut PanelController,
        edit: impl FnOnce(&mut DockConfig),
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        for (id, _) in settings.update(edit) {
            if let Some(handler) = controller.subscriptions().setting_handler(id) {
                actions.extend(controller.handle(host, settings, handler, None));
            }
        }
        actions
    }

    fn fire_due(host: &mut HeadlessShell, controller: &mut PanelController, by: Duration) {
        for id in host.advance(by) {
            controller.on_timer(host, id);
        }
    }

    fn window(id: u64, showing: bool, skip_taskbar: bool) -> WindowInfo {
        WindowInfo {
            id: WindowId(id),
            frame: Rect::new(0.0, 100.0, 800.0, 600.0),
            monitor: 0,
            showing,
            kind: WindowType::Normal,
            skip_taskbar,
        }
    }

    #[test]
    fn enable_takes_over_the_primary_panel() {
        let (host, _settings, controller) = enabled(DockConfig::default());
        let spec = controller.spec().clone();
        let status = spec.status.clone();
        let taskbar = controller.taskbar().unwrap();

        assert_eq!(controller.state(), PanelState::Enabled);
        assert_eq!(host.layout_delegate(spec.id), LayoutDelegate::Dock(spec.id));
        assert_eq!(
            controller.zones().leading.children,
            vec![status.activities.unwrap(), taskbar]
        );
        assert!(controller.zones().center.children.is_empty());
        assert_eq!(
            controller.zones().trailing.children,
            vec![
                status.aggregate_menu.unwrap(),
                status.date_menu.unwrap(),
                controller.show_desktop_button().unwrap(),
            ]
        );
        assert!(controller.zones().find(status.app_menu.unwrap()).is_none());
        assert!(!host.is_visible(status.activities.unwrap()));
        assert!(host.has_style_class(spec.actor, MAIN_PANEL_CLASS));
        assert_eq!(
            host.zone_children(spec.id, ZoneSide::Trailing),
            controller.zones().trailing.children
        );
    }

    #[test]
    fn taskbar_index_is_clamped_to_the_zone() {
        let config = DockConfig {
            taskbar_position: TaskbarPosition::CenteredMonitor,
            ..DockConfig::default()
        };
        let (_host, _settings, controller) = enabled(config);
        // the clock left the center zone, the taskbar is all that remains
        assert_eq!(controller.zones().center.children, vec![controller.taskbar().unwrap()]);
        assert_eq!(controller.zones().leading.children.len(), 1);
    }

    #[test]
    fn disable_restores_the_host_panel() {
        let mut host = HeadlessShell::new();
        let original = host.primary_panel().unwrap();
        let mut settings = Settings::new(DockConfig::default());
        let mut controller = PanelController::new(original.clone());
        controller.enable(&mut host, &mut settings).unwrap();
        let taskbar = controller.taskbar().unwrap();
        let ghost = controller.ghost().unwrap();
        let top_limit = controller.top_limit().unwrap();

        assert_eq!(controller.disable(&mut host, &mut settings).unwrap(), Disposal::Restored);

        assert_eq!(controller.state(), PanelState::Disabled);
        assert_eq!(host.height(original.actor), HOST_PANEL_HEIGHT);
        assert_eq!(host.anchor(original.panel_box), Point::ORIGIN);
        assert_eq!(host.layout_delegate(original.id), LayoutDelegate::Host);
        assert_eq!(host.panel_ghost_height(), HOST_PANEL_HEIGHT);
        assert_eq!(host.primary_panel().unwrap(), original);
        assert!(host.is_visible(original.status.activities.unwrap()));

        assert!(!host.widget_exists(taskbar));
        assert!(!host.widget_exists(ghost));
        assert!(host.in_chrome(top_limit).is_none());
        for class in [MAIN_PANEL_CLASS, BOTTOM_CLASS, TOP_CLASS, SOLID_CLASS] {
            assert!(!host.has_style_class(original.actor, class), "{class}");
        }

        assert_eq!(host.connection_count(), 0);
        assert_eq!(settings.subscriber_count(), 0);
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn lifecycle_is_checked() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        assert!(controller.enable(&mut host, &mut settings).is_err());
        controller.disable(&mut host, &mut settings).unwrap();
        assert!(controller.disable(&mut host, &mut settings).is_err());
    }

    #[test]
    fn bottom_panel_grows_up_from_the_monitor_edge() {
        let (host, _settings, controller) = enabled(DockConfig::default());
        let spec = controller.spec();
        let top_limit = controller.top_limit().unwrap();

        assert_eq!(host.height(spec.actor), 48.0);
        assert_eq!(host.anchor(spec.panel_box), Point::new(0.0, -1032.0));
        assert_eq!(host.transformed_position(spec.actor).y, 1032.0);
        assert_eq!(
            host.in_chrome(top_limit),
            Some(ChromeFlags { affects_struts: true, track_fullscreen: true })
        );
        assert_eq!(host.widget_position(top_limit), Some(Point::ORIGIN));
        assert_eq!(host.widget_width(top_limit), Some(1920.0));
        assert_eq!(host.height(top_limit), 0.0);
        assert_eq!(host.panel_ghost_height(), 0.0);
        assert_eq!(host.height(controller.ghost().unwrap()), 48.0);
        assert!(host.has_style_class(spec.actor, BOTTOM_CLASS));
        assert!(host.hot_corner_updates() > 0);
        assert!(host.panel_barrier_updates() > 0);
    }

    #[test]
    fn moving_to_the_top_drops_the_top_limit() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        let top_limit = controller.top_limit().unwrap();

        let actions = deliver(&mut host, &mut settings, &mut controller, |c| {
            c.panel_position = PanelPosition::Top
        });
        assert!(actions.is_empty());

        let spec = controller.spec();
        assert_eq!(host.anchor(spec.panel_box), Point::ORIGIN);
        assert!(controller.top_limit().is_none());
        assert!(!host.widget_exists(top_limit));
        assert_eq!(host.panel_ghost_height(), 48.0);
        assert_eq!(host.height(controller.ghost().unwrap()), 0.0);
        assert!(host.has_style_class(spec.actor, TOP_CLASS));
        assert!(!host.has_style_class(spec.actor, BOTTOM_CLASS));
    }

    #[test]
    fn panel_size_is_scaled_and_resets_icons() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        host.set_scale_factor(2.0);
        deliver(&mut host, &mut settings, &mut controller, |c| c.panel_size = 40);

        let spec = controller.spec();
        assert_eq!(host.height(spec.actor), 80.0);
        assert_eq!(host.anchor(spec.panel_box), Point::new(0.0, -1000.0));
        assert_eq!(host.icon_resets(controller.taskbar().unwrap()), 1);

        deliver(&mut host, &mut settings, &mut controller, |c| c.appicon_margin = 2);
        assert_eq!(host.icon_resets(controller.taskbar().unwrap()), 2);
    }

    #[test]
    fn zero_scale_counts_as_one() {
        let (mut host, _settings, mut controller) = enabled(DockConfig::default());
        controller.set_panel_position(&mut host, PanelPosition::Bottom, 48, 0.0);
        assert_eq!(host.height(controller.spec().actor), 48.0);
    }

    #[test]
    fn taskbar_position_asks_for_a_rebuild() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        let actions = deliver(&mut host, &mut settings, &mut controller, |c| {
            c.taskbar_position = TaskbarPosition::CenteredContent
        });
        assert_eq!(actions, vec![Action::Rebuild]);
    }

    #[test]
    fn clock_next_to_the_taskbar() {
        let config = DockConfig { location_clock: ClockLocation::TaskbarRight, ..DockConfig::default() };
        let (mut host, mut settings, mut controller) = enabled(config);
        let status = controller.spec().status.clone();
        let clock = status.date_menu.unwrap();
        let taskbar = controller.taskbar().unwrap();
        assert_eq!(
            controller.zones().leading.children,
            vec![status.activities.unwrap(), taskbar, clock]
        );

        deliver(&mut host, &mut settings, &mut controller, |c| {
            c.location_clock = ClockLocation::TaskbarLeft
        });
        assert_eq!(
            controller.zones().leading.children,
            vec![status.activities.unwrap(), clock, taskbar]
        );
    }

    #[test]
    fn status_left_sits_before_the_aggregate_menu() {
        let config = DockConfig { location_clock: ClockLocation::StatusLeft, ..DockConfig::default() };
        let (_host, _settings, controller) = enabled(config);
        let status = &controller.spec().status;
        assert_eq!(
            controller.zones().trailing.children[..2],
            [status.date_menu.unwrap(), status.aggregate_menu.unwrap()]
        );
    }

    #[test]
    fn buttons_locations_use_the_center_zone() {
        let config = DockConfig {
            taskbar_position: TaskbarPosition::CenteredMonitor,
            location_clock: ClockLocation::ButtonsLeft,
            ..DockConfig::default()
        };
        let (mut host, mut settings, mut controller) = enabled(config);
        let clock = controller.spec().status.date_menu.unwrap();
        let taskbar = controller.taskbar().unwrap();
        assert_eq!(controller.zones().center.children, vec![clock, taskbar]);

        deliver(&mut host, &mut settings, &mut controller, |c| {
            c.location_clock = ClockLocation::ButtonsRight
        });
        assert_eq!(controller.zones().center.children, vec![taskbar, clock]);
    }

    #[test]
    fn app_menu_placement_depends_on_the_policy() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        let menu = controller.spec().status.app_menu.unwrap();

        deliver(&mut host, &mut settings, &mut controller, |c| c.show_appmenu = true);
        assert_eq!(controller.zones().center.children.first(), Some(&menu));

        deliver(&mut host, &mut settings, &mut controller, |c| c.show_appmenu = false);
        assert!(controller.zones().find(menu).is_none());

        let config = DockConfig {
            taskbar_position: TaskbarPosition::CenteredContent,
            show_appmenu: true,
            ..DockConfig::default()
        };
        let (_host, _settings, centered) = enabled(config);
        assert_eq!(centered.zones().leading.children.last(), Some(&menu));
    }

    #[test]
    fn activities_button_follows_the_setting() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        let activities = controller.spec().status.activities.unwrap();
        deliver(&mut host, &mut settings, &mut controller, |c| c.show_activities_button = true);
        assert!(host.is_visible(activities));
    }

    #[test]
    fn show_desktop_button_width_and_removal() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        let button = controller.show_desktop_button().unwrap();
        assert_eq!(host.widget_width(button), Some(8.0));
        assert!(host.is_connected(SignalSource::Widget(button), SignalKind::ButtonPressed));

        deliver(&mut host, &mut settings, &mut controller, |c| c.showdesktop_button_width = 20);
        assert_eq!(host.widget_width(button), Some(20.0));

        deliver(&mut host, &mut settings, &mut controller, |c| c.show_showdesktop_button = false);
        assert!(controller.show_desktop_button().is_none());
        assert!(!host.widget_exists(button));
        assert!(!host.is_connected(SignalSource::Widget(button), SignalKind::ButtonPressed));
        assert!(!controller.zones().trailing.contains(button));
    }

    #[test]
    fn show_desktop_button_hover_class() {
        let (mut host, settings, mut controller) = enabled(DockConfig::default());
        let button = controller.show_desktop_button().unwrap();
        controller.handle(&mut host, &settings, Handler::ShowDesktopHover(true), None);
        assert!(host.has_style_class(button, SHOW_DESKTOP_HOVER_CLASS));
        controller.handle(&mut host, &settings, Handler::ShowDesktopHover(false), None);
        assert!(!host.has_style_class(button, SHOW_DESKTOP_HOVER_CLASS));
    }

    #[test]
    fn show_desktop_minimizes_then_restores() {
        let (mut host, settings, mut controller) = enabled(DockConfig::default());
        host.set_windows(vec![window(1, true, false), window(2, true, true), window(3, false, false)]);

        controller.handle(&mut host, &settings, Handler::ShowDesktopPressed, None);
        assert_eq!(host.minimized(), &[WindowId(1)]);
        assert_eq!(controller.restore_list(), Some(&[WindowId(1)][..]));
        assert_eq!(host.overview_hides(), 1);

        // focus is watched only once the minimize has settled
        assert!(!host.is_connected(SignalSource::WindowTracker, SignalKind::FocusAppChanged));
        fire_due(&mut host, &mut controller, Duration::ZERO);
        assert!(host.is_connected(SignalSource::WindowTracker, SignalKind::FocusAppChanged));

        controller.handle(&mut host, &settings, Handler::ShowDesktopPressed, None);
        assert_eq!(host.activated(), &[WindowId(1)]);
        assert!(controller.restore_list().is_none());
        assert!(!host.is_connected(SignalSource::WindowTracker, SignalKind::FocusAppChanged));
        assert_eq!(host.overview_hides(), 2);
    }

    #[test]
    fn focus_change_forgets_minimized_windows() {
        let (mut host, settings, mut controller) = enabled(DockConfig::default());
        host.set_windows(vec![window(1, true, false)]);
        controller.handle(&mut host, &settings, Handler::ShowDesktopPressed, None);
        fire_due(&mut host, &mut controller, Duration::ZERO);

        controller.handle(&mut host, &settings, Handler::ForgetRestoreList, None);
        assert!(controller.restore_list().is_none());
        assert!(!host.is_connected(SignalSource::WindowTracker, SignalKind::FocusAppChanged));
    }

    #[test]
    fn autohide_starts_after_two_seconds() {
        let (mut host, _settings, mut controller) = enabled(DockConfig::default());
        fire_due(&mut host, &mut controller, Duration::from_millis(1999));
        assert!(!controller.autohide_started());
        fire_due(&mut host, &mut controller, Duration::from_millis(1));
        assert!(controller.autohide_started());
    }

    #[test]
    fn allocate_applies_zones_and_corners() {
        let (mut host, _settings, mut controller) = enabled(DockConfig::default());
        let spec = controller.spec().clone();

        // activities is hidden: leading = taskbar 400; trailing = 150 + 120 + 8
        let rects = controller.allocate(&mut host, Rect::new(0.0, 0.0, 1920.0, 48.0));
        assert_eq!(rects.leading, Rect::new(0.0, 0.0, 1642.0, 48.0));
        assert_eq!(rects.center, Rect::new(1642.0, 0.0, 1642.0, 48.0));
        assert_eq!(rects.trailing, Rect::new(1642.0, 0.0, 1920.0, 48.0));
        assert_eq!(host.zone_allocation(spec.id, ZoneSide::Trailing), Some(rects.trailing));
        assert_eq!(controller.zones().leading.allocation, rects.leading);

        assert_eq!(host.allocation(spec.left_corner.unwrap()), Some(Rect::new(0.0, 48.0, 6.0, 54.0)));
        assert_eq!(
            host.allocation(spec.right_corner.unwrap()),
            Some(Rect::new(1914.0, 48.0, 1920.0, 54.0))
        );
    }

    #[test]
    fn right_to_left_puts_the_trailing_zone_first() {
        let (mut host, _settings, mut controller) = enabled(DockConfig::default());
        host.set_text_direction(TextDirection::RightToLeft);

        let rects = controller.allocate(&mut host, Rect::new(0.0, 0.0, 1920.0, 48.0));
        assert_eq!(rects.trailing, Rect::new(0.0, 0.0, 278.0, 48.0));
        assert_eq!(rects.leading, Rect::new(278.0, 0.0, 1920.0, 48.0));
        assert_eq!(
            host.zone_allocation(controller.id(), ZoneSide::Trailing),
            Some(rects.trailing)
        );
    }

    #[test]
    fn dragged_icons_keep_the_taskbar_size() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        let taskbar = controller.taskbar().unwrap();
        assert_eq!(host.drag_icon_size(), TASKBAR_ICON_SIZE);
        assert!(host.is_connected(SignalSource::Widget(taskbar), SignalKind::IconSizeChanged));
        assert!(host.is_connected(SignalSource::Dash, SignalKind::IconSizeChanged));

        host.set_icon_size(taskbar, 56);
        let resized = Signal::IconSizeChanged;
        controller.handle(&mut host, &settings, Handler::SyncDashIconSize, Some(&resized));
        assert_eq!(host.drag_icon_size(), 56);

        // the host dash resets it on its own resize; ours runs afterwards
        host.set_drag_icon_size(HOST_DASH_ICON_SIZE);
        controller.handle(&mut host, &settings, Handler::SyncDashIconSize, Some(&resized));
        assert_eq!(host.drag_icon_size(), 56);

        controller.disable(&mut host, &mut settings).unwrap();
        assert_eq!(host.drag_icon_size(), HOST_DASH_ICON_SIZE);
        assert!(!host.is_connected(SignalSource::Dash, SignalKind::IconSizeChanged));
    }

    #[test]
    fn closing_a_taskbar_menu_resyncs_hover() {
        let config = DockConfig {
            taskbar_position: TaskbarPosition::CenteredMonitor,
            ..DockConfig::default()
        };
        let (mut host, settings, mut controller) = enabled(config);
        let id = controller.id();
        let taskbar = controller.taskbar().unwrap();
        assert!(host.is_connected(SignalSource::Widget(taskbar), SignalKind::MenuClosed));

        controller.handle(&mut host, &settings, Handler::SyncHover, Some(&Signal::MenuClosed));
        assert_eq!(host.hover_syncs(id, ZoneSide::Center), 1);
        assert_eq!(host.hover_syncs(id, ZoneSide::Leading), 0);
    }

    #[test]
    fn repeated_setting_handlers_change_nothing() {
        for show_appmenu in [false, true] {
            let config = DockConfig { show_appmenu, ..DockConfig::default() };
            let (mut host, settings, mut controller) = enabled(config);
            let id = controller.id();
            let button = controller.show_desktop_button();
            let zones = controller.zones().clone();
            let connections = host.connection_count();

            for key in [
                SettingKey::ShowShowDesktopButton,
                SettingKey::ShowAppMenu,
                SettingKey::LocationClock,
            ] {
                for _ in 0..2 {
                    let action = controller.handle(&mut host, &settings, Handler::Setting(key), None);
                    assert!(action.is_none(), "{key}");
                }
            }

            assert_eq!(controller.show_desktop_button(), button);
            assert_eq!(controller.zones(), &zones);
            assert_eq!(host.connection_count(), connections);
            for side in ZoneSide::ALL {
                assert_eq!(host.zone_children(id, side), zones.get(side).children);
            }
        }
    }

    #[test]
    fn overview_ghost_follows_the_focused_monitor() {
        let (mut host, settings, mut controller) = enabled(DockConfig::default());
        let ghost = controller.ghost().unwrap();
        let actor = controller.spec().actor;

        host.set_overview_visible(true);
        controller.handle(&mut host, &settings, Handler::SyncOverview, None);
        assert!(host.contains_actor(ghost));
        assert!(host.is_visible(actor));

        host.set_focused_monitor(Some(1));
        controller.handle(&mut host, &settings, Handler::SyncOverview, None);
        assert!(!host.contains_actor(ghost));
        assert!(!host.is_visible(actor));

        host.set_overview_visible(false);
        controller.handle(&mut host, &settings, Handler::SyncOverview, None);
        assert!(host.is_visible(actor));
    }

    #[test]
    fn adopted_widgets_survive_disable() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        let id = controller.id();
        let status = controller.spec().status.clone();
        let (indicator, message) = host.add_indicator(id, ZoneSide::Trailing);
        let Message::Signal { signal, .. } = message else {
            panic!("expected a signal");
        };

        controller.handle(&mut host, &settings, Handler::AdoptWidget(ZoneSide::Trailing), Some(&signal));
        let trailing = &controller.zones().trailing.children;
        assert_eq!(trailing[..2], [status.aggregate_menu.unwrap(), status.date_menu.unwrap()]);
        assert_eq!(trailing.last(), Some(&indicator));

        controller.disable(&mut host, &mut settings).unwrap();
        assert_eq!(
            host.zone_children(id, ZoneSide::Trailing),
            vec![status.aggregate_menu.unwrap(), indicator]
        );
        assert_eq!(host.zone_children(id, ZoneSide::Center), vec![status.date_menu.unwrap()]);
    }

    #[test]
    fn external_drags_open_the_overview() {
        let (mut host, _settings, controller) = enabled(DockConfig::default());
        assert_eq!(controller.handle_drag_over(&mut host, DragSource::Internal), DragMotion::Continue);
        assert_eq!(host.overview_shows(), 0);
        assert_eq!(controller.handle_drag_over(&mut host, DragSource::External), DragMotion::Continue);
        assert_eq!(host.overview_shows(), 1);
    }

    #[test]
    fn window_near_the_bottom_panel_makes_it_solid() {
        let (mut host, settings, mut controller) = enabled(DockConfig::default());
        let mut near = window(1, true, false);
        near.frame = Rect::new(0.0, 100.0, 800.0, 1030.0);
        host.set_windows(vec![near]);

        controller.handle(&mut host, &settings, Handler::UpdateStyle, None);
        assert_eq!(controller.style_state(), StyleState::Solid);
        assert!(host.has_style_class(controller.spec().actor, SOLID_CLASS));
    }

    #[test]
    fn disabled_controllers_ignore_handlers() {
        let (mut host, mut settings, mut controller) = enabled(DockConfig::default());
        controller.disable(&mut host, &mut settings).unwrap();
        host.set_windows(vec![window(1, true, false)]);
        assert!(controller
            .handle(&mut host, &settings, Handler::ShowDesktopPressed, None)
            .is_none());
        assert!(host.minimized().is_empty());
    }
}
