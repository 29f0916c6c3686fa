//! In-memory host.
//!
//! Implements every host trait on plain collections and records each
//! mutation, so the preview binary can run the dock without a compositor and
//! tests can assert on what the dock did to the host.  Signals are never
//! emitted on their own: callers build the `Message`s they want delivered.

use dock_core::{
    Barrier, BarrierId, Chrome, ChromeFlags, Displays, LayoutDelegate, Message, Monitor, Overview,
    PanelId, PanelSpec, Point, Rect, Scheduler, Signal, SignalKind, SignalSource, Signals, Size,
    Stage, StatusArea, SubscriptionId, TextDirection, TimerId, WidgetId, WidgetKind, WindowId,
    WindowInfo, WindowTracker, ZoneSide,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

/// Default height of host panels before the dock touches them.
pub const HOST_PANEL_HEIGHT: f32 = 32.0;

/// Icon size of the host's own dash.
pub const HOST_DASH_ICON_SIZE: u32 = 64;

/// Icon size of a freshly created taskbar.
pub const TASKBAR_ICON_SIZE: u32 = 40;

#[derive(Debug, Clone)]
struct WidgetState {
    kind:           Option<WidgetKind>,
    visible:        bool,
    min_width:      f32,
    natural_width:  f32,
    /// Set through `Stage::set_width`; overrides the natural width.
    width:          Option<f32>,
    height:         f32,
    position:       Point,
    anchor:         Point,
    parent:         Option<WidgetId>,
    classes:        BTreeSet<String>,
    allocation:     Rect,
    icon_size:      u32,
    icon_resets:    u32,
}

impl WidgetState {
    fn sized(natural_width: f32, height: f32) -> Self {
        Self {
            kind: None,
            visible: true,
            min_width: 0.0,
            natural_width,
            width: None,
            height,
            position: Point::ORIGIN,
            anchor: Point::ORIGIN,
            parent: None,
            classes: BTreeSet::new(),
            allocation: Rect::ZERO,
            icon_size: 0,
            icon_resets: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct HostPanel {
    spec:        PanelSpec,
    zones:       BTreeMap<ZoneSide, Vec<WidgetId>>,
    allocations: BTreeMap<ZoneSide, Rect>,
    delegate:    LayoutDelegate,
    /// Last box rectangle reported through `AllocationChanged`.
    reported:    Option<Rect>,
}

#[derive(Debug)]
pub struct HeadlessShell {
    next_id:     u64,
    widgets:     HashMap<WidgetId, WidgetState>,
    panels:      BTreeMap<PanelId, HostPanel>,
    primary:     Option<PanelId>,
    direction:   TextDirection,

    chrome:               HashMap<WidgetId, ChromeFlags>,
    barriers:             BTreeMap<BarrierId, Barrier>,
    stacked_below:        Vec<WidgetId>,
    hot_corner_updates:   u32,
    panel_barrier_updates: u32,
    focus_groups:         BTreeMap<WidgetId, String>,
    hover_syncs:          BTreeMap<(PanelId, ZoneSide), u32>,

    windows:   Vec<WindowInfo>,
    minimized: Vec<WindowId>,
    activated: Vec<WindowId>,

    monitors: Vec<Monitor>,
    scale:    f32,

    overview_active:     bool,
    overview_visible:    bool,
    overview_shows:      u32,
    overview_hides:      u32,
    focused_monitor:     Option<usize>,
    toggle_on_drag:      bool,
    overview_actors:     BTreeSet<WidgetId>,
    panel_ghost_height:  f32,
    session_has_windows: bool,
    dash_icon_size:      u32,
    drag_icon_size:      u32,

    now:    Duration,
    timers: BTreeMap<TimerId, Duration>,

    connections: BTreeMap<SubscriptionId, (SignalSource, SignalKind)>,
}

impl Default for HeadlessShell {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessShell {
    /// A single 1920x1080 primary monitor.
    pub fn new() -> Self {
        Self::with_monitors(vec![Monitor {
            index:   0,
            x:       0.0,
            y:       0.0,
            width:   1920.0,
            height:  1080.0,
            primary: true,
        }])
    }

    /// A host with the given monitors.  The primary one gets the host's own
    /// panel with activities and app menu on the leading side, the clock in
    /// the center and the aggregate menu on the trailing side.
    pub fn with_monitors(monitors: Vec<Monitor>) -> Self {
        let mut host = Self {
            next_id: 1,
            widgets: HashMap::new(),
            panels: BTreeMap::new(),
            primary: None,
            direction: TextDirection::default(),
            chrome: HashMap::new(),
            barriers: BTreeMap::new(),
            stacked_below: Vec::new(),
            hot_corner_updates: 0,
            panel_barrier_updates: 0,
            focus_groups: BTreeMap::new(),
            hover_syncs: BTreeMap::new(),
            windows: Vec::new(),
            minimized: Vec::new(),
            activated: Vec::new(),
            monitors,
            scale: 1.0,
            overview_active: false,
            overview_visible: false,
            overview_shows: 0,
            overview_hides: 0,
            focused_monitor: None,
            toggle_on_drag: true,
            overview_actors: BTreeSet::new(),
            panel_ghost_height: HOST_PANEL_HEIGHT,
            session_has_windows: true,
            dash_icon_size: HOST_DASH_ICON_SIZE,
            drag_icon_size: HOST_DASH_ICON_SIZE,
            now: Duration::ZERO,
            timers: BTreeMap::new(),
            connections: BTreeMap::new(),
        };

        if let Some(monitor) = host.monitors.iter().find(|m| m.primary).cloned() {
            host.focused_monitor = Some(monitor.index);
            let mut spec = host.build_panel(&monitor);
            spec.secondary = false;

            let activities = host.add_widget(WidgetState::sized(90.0, 24.0));
            let app_menu = host.add_widget(WidgetState::sized(110.0, 24.0));
            let date_menu = host.add_widget(WidgetState::sized(120.0, 24.0));
            let aggregate = host.add_widget(WidgetState::sized(150.0, 24.0));
            spec.leading = vec![activities, app_menu];
            spec.center = vec![date_menu];
            spec.trailing = vec![aggregate];
            spec.status = StatusArea {
                activities:     Some(activities),
                app_menu:       Some(app_menu),
                date_menu:      Some(date_menu),
                aggregate_menu: Some(aggregate),
            };

            let id = spec.id;
            host.insert_panel(spec);
            host.primary = Some(id);
        }
        host
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn add_widget(&mut self, state: WidgetState) -> WidgetId {
        let id = WidgetId(self.alloc_id());
        self.widgets.insert(id, state);
        id
    }

    fn build_panel(&mut self, monitor: &Monitor) -> PanelSpec {
        let panel_box = self.add_widget(WidgetState::sized(monitor.width, HOST_PANEL_HEIGHT));
        let mut actor_state = WidgetState::sized(monitor.width, HOST_PANEL_HEIGHT);
        actor_state.parent = Some(panel_box);
        let actor = self.add_widget(actor_state);
        let left_corner = self.add_widget(WidgetState::sized(6.0, 6.0));
        let right_corner = self.add_widget(WidgetState::sized(6.0, 6.0));

        if let Some(state) = self.widgets.get_mut(&panel_box) {
            state.position = monitor.origin();
        }

        PanelSpec {
            id: PanelId(self.alloc_id()),
            monitor: monitor.clone(),
            actor,
            panel_box,
            leading: Vec::new(),
            center: Vec::new(),
            trailing: Vec::new(),
            left_corner: Some(left_corner),
            right_corner: Some(right_corner),
            status: StatusArea::default(),
            secondary: true,
        }
    }

    fn insert_panel(&mut self, spec: PanelSpec) {
        let zones = BTreeMap::from([
            (ZoneSide::Leading, spec.leading.clone()),
            (ZoneSide::Center, spec.center.clone()),
            (ZoneSide::Trailing, spec.trailing.clone()),
        ]);
        self.panels.insert(
            spec.id,
            HostPanel {
                spec,
                zones,
                allocations: BTreeMap::new(),
                delegate: LayoutDelegate::Host,
                reported: None,
            },
        );
    }

    // ── Scenario setup ────────────────────────────────────────────────────────

    pub fn set_windows(&mut self, windows: Vec<WindowInfo>) {
        self.windows = windows;
    }

    pub fn set_monitors(&mut self, monitors: Vec<Monitor>) {
        self.monitors = monitors;
    }

    pub fn set_scale_factor(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn set_text_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    /// Fully shown (or fully hidden) overview.
    pub fn set_overview_active(&mut self, active: bool) {
        self.overview_active = active;
        self.overview_visible = active;
    }

    /// Overview on its way in (or out) without being fully shown yet.
    pub fn set_overview_visible(&mut self, visible: bool) {
        self.overview_visible = visible;
    }

    pub fn set_focused_monitor(&mut self, monitor: Option<usize>) {
        self.focused_monitor = monitor;
    }

    pub fn set_session_has_windows(&mut self, has_windows: bool) {
        self.session_has_windows = has_windows;
    }

    pub fn set_toggle_on_drag(&mut self, toggle: bool) {
        self.toggle_on_drag = toggle;
    }

    /// A third party (an extension indicator) appends a widget to a zone.
    /// Returns the signal the host would emit for it.
    pub fn add_indicator(&mut self, panel: PanelId, side: ZoneSide) -> (WidgetId, Message) {
        let widget = self.add_widget(WidgetState::sized(30.0, 24.0));
        if let Some(host_panel) = self.panels.get_mut(&panel) {
            host_panel.zones.entry(side).or_default().push(widget);
        }
        let message = Message::Signal {
            source: SignalSource::Zone(panel, side),
            signal: Signal::ActorAdded(widget),
        };
        (widget, message)
    }

    pub fn set_natural_width(&mut self, widget: WidgetId, width: f32) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.natural_width = width;
        }
    }

    /// A taskbar resized its icons.  The caller delivers the signal.
    pub fn set_icon_size(&mut self, widget: WidgetId, size: u32) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.icon_size = size;
        }
    }

    pub fn set_dash_icon_size(&mut self, size: u32) {
        self.dash_icon_size = size;
    }

    // ── Time ──────────────────────────────────────────────────────────────────

    /// Move the virtual clock forward and return the timers that came due,
    /// earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let mut due: Vec<(Duration, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= self.now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort();
        for (_, id) in &due {
            self.timers.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Time until the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers
            .values()
            .min()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // ── Layout ────────────────────────────────────────────────────────────────

    /// One host layout pass: an `Allocate` for every panel delegated to the
    /// dock and an `AllocationChanged` for every box that moved or resized.
    pub fn layout_pass(&mut self) -> Vec<Message> {
        let mut messages = Vec::new();
        let ids: Vec<PanelId> = self.panels.keys().copied().collect();

        for id in ids {
            let Some(panel) = self.panels.get(&id) else {
                continue;
            };
            let panel_box = panel.spec.panel_box;
            let delegate = panel.delegate;
            let width = self.box_width(panel_box, panel.spec.monitor.width);
            let height = self.height(panel_box);

            if delegate == LayoutDelegate::Dock(id) {
                messages.push(Message::Allocate {
                    panel:      id,
                    allocation: Rect::from_origin(Point::ORIGIN, Size::new(width, height)),
                });
            }

            let stage_rect = Rect::from_origin(
                self.transformed_position(panel_box),
                Size::new(width, height),
            );
            if let Some(panel) = self.panels.get_mut(&id) {
                if panel.reported != Some(stage_rect) {
                    panel.reported = Some(stage_rect);
                    messages.push(Message::Signal {
                        source: SignalSource::Widget(panel_box),
                        signal: Signal::AllocationChanged(stage_rect),
                    });
                }
            }
        }
        messages
    }

    fn box_width(&self, panel_box: WidgetId, fallback: f32) -> f32 {
        self.widgets
            .get(&panel_box)
            .and_then(|w| w.width)
            .unwrap_or(fallback)
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.keys().copied().collect()
    }

    pub fn panel(&self, panel: PanelId) -> Option<PanelSpec> {
        self.panels.get(&panel).map(|p| {
            let mut spec = p.spec.clone();
            spec.leading = p.zones.get(&ZoneSide::Leading).cloned().unwrap_or_default();
            spec.center = p.zones.get(&ZoneSide::Center).cloned().unwrap_or_default();
            spec.trailing = p.zones.get(&ZoneSide::Trailing).cloned().unwrap_or_default();
            spec
        })
    }

    pub fn zone_children(&self, panel: PanelId, side: ZoneSide) -> Vec<WidgetId> {
        self.panels
            .get(&panel)
            .and_then(|p| p.zones.get(&side).cloned())
            .unwrap_or_default()
    }

    pub fn zone_allocation(&self, panel: PanelId, side: ZoneSide) -> Option<Rect> {
        self.panels
            .get(&panel)
            .and_then(|p| p.allocations.get(&side).copied())
    }

    pub fn allocation(&self, widget: WidgetId) -> Option<Rect> {
        self.widgets.get(&widget).map(|w| w.allocation)
    }

    pub fn widget_exists(&self, widget: WidgetId) -> bool {
        self.widgets.contains_key(&widget)
    }

    pub fn widget_kind(&self, widget: WidgetId) -> Option<WidgetKind> {
        self.widgets.get(&widget).and_then(|w| w.kind)
    }

    pub fn widget_position(&self, widget: WidgetId) -> Option<Point> {
        self.widgets.get(&widget).map(|w| w.position)
    }

    pub fn widget_width(&self, widget: WidgetId) -> Option<f32> {
        self.widgets.get(&widget).and_then(|w| w.width)
    }

    pub fn icon_resets(&self, taskbar: WidgetId) -> u32 {
        self.widgets.get(&taskbar).map_or(0, |w| w.icon_resets)
    }

    pub fn barriers(&self) -> Vec<Barrier> {
        self.barriers.values().copied().collect()
    }

    pub fn in_chrome(&self, widget: WidgetId) -> Option<ChromeFlags> {
        self.chrome.get(&widget).copied()
    }

    pub fn stacked_below_primary(&self) -> &[WidgetId] {
        &self.stacked_below
    }

    pub fn hot_corner_updates(&self) -> u32 {
        self.hot_corner_updates
    }

    pub fn panel_barrier_updates(&self) -> u32 {
        self.panel_barrier_updates
    }

    pub fn focus_group(&self, widget: WidgetId) -> Option<&str> {
        self.focus_groups.get(&widget).map(String::as_str)
    }

    pub fn hover_syncs(&self, panel: PanelId, zone: ZoneSide) -> u32 {
        self.hover_syncs.get(&(panel, zone)).copied().unwrap_or(0)
    }

    pub fn drag_icon_size(&self) -> u32 {
        self.drag_icon_size
    }

    pub fn minimized(&self) -> &[WindowId] {
        &self.minimized
    }

    pub fn activated(&self) -> &[WindowId] {
        &self.activated
    }

    pub fn overview_shows(&self) -> u32 {
        self.overview_shows
    }

    pub fn overview_hides(&self) -> u32 {
        self.overview_hides
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_connected(&self, source: SignalSource, kind: SignalKind) -> bool {
        self.connections.values().any(|c| *c == (source, kind))
    }
}

impl Stage for HeadlessShell {
    fn create_widget(&mut self, kind: WidgetKind) -> WidgetId {
        let (width, height, visible) = match kind {
            WidgetKind::Taskbar => (400.0, 32.0, true),
            WidgetKind::Clock => (120.0, 24.0, true),
            WidgetKind::ShowDesktopButton => (0.0, 32.0, true),
            WidgetKind::Ghost => (0.0, 0.0, false),
            WidgetKind::TopLimit => (0.0, 0.0, true),
        };
        let mut state = WidgetState::sized(width, height);
        if kind == WidgetKind::Taskbar {
            state.icon_size = TASKBAR_ICON_SIZE;
        }
        state.kind = Some(kind);
        state.visible = visible;
        self.add_widget(state)
    }

    fn destroy_widget(&mut self, widget: WidgetId) {
        self.widgets.remove(&widget);
        self.chrome.remove(&widget);
        self.overview_actors.remove(&widget);
        for panel in self.panels.values_mut() {
            for children in panel.zones.values_mut() {
                children.retain(|w| *w != widget);
            }
        }
    }

    fn is_visible(&self, widget: WidgetId) -> bool {
        self.widgets.get(&widget).is_some_and(|w| w.visible)
    }

    fn set_visible(&mut self, widget: WidgetId, visible: bool) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.visible = visible;
        }
    }

    fn preferred_width(&self, widget: WidgetId) -> (f32, f32) {
        match self.widgets.get(&widget) {
            Some(WidgetState { width: Some(w), .. }) => (*w, *w),
            Some(state) => (state.min_width, state.natural_width),
            None => (0.0, 0.0),
        }
    }

    fn preferred_height(&self, widget: WidgetId) -> (f32, f32) {
        let height = self.height(widget);
        (height, height)
    }

    fn height(&self, widget: WidgetId) -> f32 {
        self.widgets.get(&widget).map_or(0.0, |w| w.height)
    }

    fn set_height(&mut self, widget: WidgetId, height: f32) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.height = height;
        }
        // The box follows its panel actor.
        let boxes: Vec<WidgetId> = self
            .panels
            .values()
            .filter(|p| p.spec.actor == widget)
            .map(|p| p.spec.panel_box)
            .collect();
        for panel_box in boxes {
            if let Some(state) = self.widgets.get_mut(&panel_box) {
                state.height = height;
            }
        }
    }

    fn set_width(&mut self, widget: WidgetId, width: f32) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.width = Some(width);
        }
    }

    fn set_position(&mut self, widget: WidgetId, position: Point) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.position = position;
        }
    }

    fn anchor(&self, widget: WidgetId) -> Point {
        self.widgets.get(&widget).map_or(Point::ORIGIN, |w| w.anchor)
    }

    fn set_anchor(&mut self, widget: WidgetId, anchor: Point) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.anchor = anchor;
        }
    }

    fn transformed_position(&self, widget: WidgetId) -> Point {
        let Some(state) = self.widgets.get(&widget) else {
            return Point::ORIGIN;
        };
        let base = state
            .parent
            .map_or(Point::ORIGIN, |parent| self.transformed_position(parent));
        Point::new(
            base.x + state.position.x - state.anchor.x,
            base.y + state.position.y - state.anchor.y,
        )
    }

    fn has_style_class(&self, widget: WidgetId, class: &str) -> bool {
        self.widgets
            .get(&widget)
            .is_some_and(|w| w.classes.contains(class))
    }

    fn add_style_class(&mut self, widget: WidgetId, class: &str) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.classes.insert(class.to_string());
        }
    }

    fn remove_style_class(&mut self, widget: WidgetId, class: &str) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.classes.remove(class);
        }
    }

    fn text_direction(&self, _widget: WidgetId) -> TextDirection {
        self.direction
    }

    fn icon_size(&self, taskbar: WidgetId) -> u32 {
        self.widgets.get(&taskbar).map_or(0, |w| w.icon_size)
    }

    fn sync_hover(&mut self, panel: PanelId, zone: ZoneSide) {
        *self.hover_syncs.entry((panel, zone)).or_default() += 1;
    }

    fn allocate(&mut self, widget: WidgetId, allocation: Rect) {
        if let Some(state) = self.widgets.get_mut(&widget) {
            state.allocation = allocation;
        }
    }

    fn allocate_zone(&mut self, panel: PanelId, zone: ZoneSide, allocation: Rect) {
        if let Some(host_panel) = self.panels.get_mut(&panel) {
            host_panel.allocations.insert(zone, allocation);
        }
    }

    fn set_zone_children(&mut self, panel: PanelId, zone: ZoneSide, children: &[WidgetId]) {
        if let Some(host_panel) = self.panels.get_mut(&panel) {
            host_panel.zones.insert(zone, children.to_vec());
        }
    }

    fn layout_delegate(&self, panel: PanelId) -> LayoutDelegate {
        self.panels
            .get(&panel)
            .map_or(LayoutDelegate::Host, |p| p.delegate)
    }

    fn set_layout_delegate(&mut self, panel: PanelId, delegate: LayoutDelegate) {
        if let Some(host_panel) = self.panels.get_mut(&panel) {
            host_panel.delegate = delegate;
        }
    }

    fn primary_panel(&self) -> Option<PanelSpec> {
        self.primary.and_then(|id| self.panel(id))
    }

    fn create_panel(&mut self, monitor: &Monitor) -> PanelSpec {
        let spec = self.build_panel(monitor);
        self.insert_panel(spec.clone());
        spec
    }

    fn destroy_panel(&mut self, panel: PanelId) {
        let Some(host_panel) = self.panels.remove(&panel) else {
            return;
        };
        let spec = host_panel.spec;
        let owned = [Some(spec.panel_box), Some(spec.actor), spec.left_corner, spec.right_corner];
        for widget in owned.into_iter().flatten() {
            self.destroy_widget(widget);
        }
        self.stacked_below.retain(|w| *w != spec.panel_box);
        if self.primary == Some(panel) {
            self.primary = None;
        }
    }

    fn stack_below_primary(&mut self, panel_box: WidgetId) {
        if !self.stacked_below.contains(&panel_box) {
            self.stacked_below.push(panel_box);
        }
    }

    fn reset_app_icons(&mut self, taskbar: WidgetId) {
        if let Some(state) = self.widgets.get_mut(&taskbar) {
            state.icon_resets += 1;
        }
    }
}

impl Chrome for HeadlessShell {
    fn add_chrome(&mut self, widget: WidgetId, flags: ChromeFlags) {
        self.chrome.insert(widget, flags);
    }

    fn remove_chrome(&mut self, widget: WidgetId) {
        self.chrome.remove(&widget);
    }

    fn create_barrier(&mut self, barrier: Barrier) -> BarrierId {
        let id = BarrierId(self.alloc_id());
        self.barriers.insert(id, barrier);
        id
    }

    fn destroy_barrier(&mut self, barrier: BarrierId) {
        self.barriers.remove(&barrier);
    }

    fn update_hot_corners(&mut self) {
        self.hot_corner_updates += 1;
    }

    fn update_panel_barrier(&mut self) {
        self.panel_barrier_updates += 1;
    }

    fn add_focus_group(&mut self, widget: WidgetId, name: &str) {
        self.focus_groups.insert(widget, name.to_string());
    }

    fn remove_focus_group(&mut self, widget: WidgetId) {
        self.focus_groups.remove(&widget);
    }
}

impl WindowTracker for HeadlessShell {
    fn workspace_windows(&self) -> Vec<WindowInfo> {
        self.windows.clone()
    }

    fn minimize(&mut self, window: WindowId) {
        if let Some(info) = self.windows.iter_mut().find(|w| w.id == window) {
            info.showing = false;
        }
        self.minimized.push(window);
    }

    fn activate(&mut self, window: WindowId) {
        if let Some(info) = self.windows.iter_mut().find(|w| w.id == window) {
            info.showing = true;
        }
        self.activated.push(window);
    }
}

impl Displays for HeadlessShell {
    fn monitors(&self) -> Vec<Monitor> {
        self.monitors.clone()
    }

    fn primary_monitor(&self) -> Option<Monitor> {
        self.monitors.iter().find(|m| m.primary).cloned()
    }

    fn scale_factor(&self) -> f32 {
        self.scale
    }
}

impl Overview for HeadlessShell {
    fn is_active(&self) -> bool {
        self.overview_active
    }

    fn visible_target(&self) -> bool {
        self.overview_visible
    }

    fn focused_monitor(&self) -> Option<usize> {
        self.focused_monitor
    }

    fn show(&mut self) {
        self.overview_shows += 1;
        self.overview_active = true;
        self.overview_visible = true;
    }

    fn hide(&mut self) {
        self.overview_hides += 1;
        self.overview_active = false;
        self.overview_visible = false;
    }

    fn should_toggle_by_corner_or_button(&self) -> bool {
        self.toggle_on_drag
    }

    fn add_actor(&mut self, widget: WidgetId) {
        self.overview_actors.insert(widget);
    }

    fn remove_actor(&mut self, widget: WidgetId) {
        self.overview_actors.remove(&widget);
    }

    fn contains_actor(&self, widget: WidgetId) -> bool {
        self.overview_actors.contains(&widget)
    }

    fn panel_ghost_height(&self) -> f32 {
        self.panel_ghost_height
    }

    fn set_panel_ghost_height(&mut self, height: f32) {
        self.panel_ghost_height = height;
    }

    fn session_has_windows(&self) -> bool {
        self.session_has_windows
    }

    fn dash_icon_size(&self) -> u32 {
        self.dash_icon_size
    }

    fn set_drag_icon_size(&mut self, size: u32) {
        self.drag_icon_size = size;
    }
}

impl Scheduler for HeadlessShell {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.alloc_id());
        self.timers.insert(id, self.now + delay);
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.remove(&timer);
    }
}

impl Signals for HeadlessShell {
    fn connect(&mut self, source: SignalSource, kind: SignalKind) -> SubscriptionId {
        let id = SubscriptionId(self.alloc_id());
        self.connections.insert(id, (source, kind));
        id
    }

    fn disconnect(&mut self, id: SubscriptionId) {
        self.connections.remove(&id);
    }
}
