//! Secondary panels on non-primary monitors.
//!
//! The host builds a bare panel for the monitor; the coordinator places it,
//! registers it as chrome, keeps a pointer barrier along its trailing edge and
//! hands it to a regular [`PanelController`].

use crate::controller::{Disposal, PanelController};
use crate::subscriptions::SubscriptionRegistry;
use dock_config::{SettingKey, Settings};
use dock_core::{
    Barrier, BarrierDirection, BarrierId, ChromeFlags, Monitor, PanelId, Rect, Result, Shell,
    Signal, SignalKind, SignalSource, SubscriptionId, WidgetId, WidgetKind,
};
use tracing::{debug, info, warn};

/// Keyboard focus switcher entry, suffixed with the monitor index.
pub const FOCUS_GROUP_NAME: &str = "Top Bar";

/// What the coordinator does when one of its subscriptions fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorHandler {
    /// Panel box moved or resized.
    RefreshBarrier,
    Setting(SettingKey),
}

impl From<SettingKey> for CoordinatorHandler {
    fn from(key: SettingKey) -> Self {
        CoordinatorHandler::Setting(key)
    }
}

#[derive(Debug)]
pub struct SecondaryPanel {
    panel:         PanelId,
    monitor:       usize,
    panel_box:     WidgetId,
    barrier:       Option<BarrierId>,
    clock:         Option<WidgetId>,
    subscriptions: SubscriptionRegistry<CoordinatorHandler>,
}

impl SecondaryPanel {
    /// Build and enable a panel for `monitor`.
    pub fn create(
        host: &mut impl Shell,
        settings: &mut Settings,
        monitor: &Monitor,
    ) -> Result<(Self, PanelController)> {
        let mut spec = host.create_panel(monitor);
        spec.secondary = true;
        let panel_box = spec.panel_box;

        host.set_position(panel_box, monitor.origin());
        host.set_width(panel_box, monitor.width);
        host.add_chrome(panel_box, ChromeFlags { affects_struts: true, track_fullscreen: true });
        host.stack_below_primary(panel_box);

        let mut secondary = Self {
            panel: spec.id,
            monitor: monitor.index,
            panel_box,
            barrier: None,
            clock: None,
            subscriptions: SubscriptionRegistry::default(),
        };
        secondary.subscriptions.connect(
            host,
            SignalSource::Widget(panel_box),
            SignalKind::AllocationChanged,
            CoordinatorHandler::RefreshBarrier,
        );
        secondary
            .subscriptions
            .connect_setting(settings, SettingKey::ShowClockAllMonitors);

        let actor = spec.actor;
        let mut controller = PanelController::new(spec);
        if let Err(err) = controller.enable(host, settings) {
            secondary.subscriptions.release(host, settings);
            host.remove_chrome(panel_box);
            host.destroy_panel(secondary.panel);
            return Err(err);
        }

        let show_clock = settings.get().show_clock_all_monitors;
        secondary.sync_clock(host, &mut controller, show_clock);
        host.add_focus_group(actor, &format!("{FOCUS_GROUP_NAME} {}", monitor.index));

        info!(panel = %secondary.panel, monitor = monitor.index, "secondary panel attached");
        Ok((secondary, controller))
    }

    pub fn id(&self) -> PanelId {
        self.panel
    }

    pub fn monitor(&self) -> usize {
        self.monitor
    }

    pub fn barrier(&self) -> Option<BarrierId> {
        self.barrier
    }

    pub fn clock(&self) -> Option<WidgetId> {
        self.clock
    }

    pub fn handlers_for(&self, source: SignalSource, kind: SignalKind) -> Vec<CoordinatorHandler> {
        self.subscriptions.handlers_for(source, kind)
    }

    pub fn setting_handler(&self, id: SubscriptionId) -> Option<CoordinatorHandler> {
        self.subscriptions.setting_handler(id)
    }

    pub fn handle(
        &mut self,
        host: &mut impl Shell,
        settings: &Settings,
        controller: &mut PanelController,
        handler: CoordinatorHandler,
        signal: Option<&Signal>,
    ) {
        match (handler, signal) {
            (CoordinatorHandler::RefreshBarrier, Some(Signal::AllocationChanged(rect))) => {
                self.refresh_barrier(host, *rect)
            }
            (CoordinatorHandler::Setting(SettingKey::ShowClockAllMonitors), _) => {
                self.sync_clock(host, controller, settings.get().show_clock_all_monitors)
            }
            _ => debug!(panel = %self.panel, ?handler, "ignored coordinator handler"),
        }
    }

    /// Add or remove this panel's own clock.
    pub fn sync_clock(&mut self, host: &mut impl Shell, controller: &mut PanelController, show: bool) {
        match (show, self.clock) {
            (true, None) => {
                let clock = host.create_widget(WidgetKind::Clock);
                controller.attach_clock(host, clock);
                self.clock = Some(clock);
            }
            (false, Some(clock)) => {
                controller.detach_clock(host);
                host.destroy_widget(clock);
                self.clock = None;
            }
            _ => {}
        }
    }

    /// Replace the barrier for a new box allocation (stage coordinates).
    pub fn refresh_barrier(&mut self, host: &mut impl Shell, allocation: Rect) {
        if let Some(barrier) = self.barrier.take() {
            host.destroy_barrier(barrier);
        }

        let height = host.height(self.panel_box);
        if height <= 0.0 {
            return;
        }
        self.barrier = Some(host.create_barrier(Barrier {
            x1:        allocation.x2,
            y1:        allocation.y1,
            x2:        allocation.x2,
            y2:        allocation.y1 + height,
            direction: BarrierDirection::NegativeX,
        }));
    }

    /// The monitor moved or resized.
    pub fn update_geometry(
        &mut self,
        host: &mut impl Shell,
        controller: &mut PanelController,
        settings: &Settings,
        monitor: &Monitor,
    ) {
        host.set_position(self.panel_box, monitor.origin());
        host.set_width(self.panel_box, monitor.width);
        controller.set_monitor(host, monitor.clone(), settings.get());
    }

    /// Tear the panel down.  Every step runs regardless of earlier failures.
    pub fn destroy(
        mut self,
        host: &mut impl Shell,
        settings: &mut Settings,
        controller: &mut PanelController,
    ) {
        if let Some(barrier) = self.barrier.take() {
            host.destroy_barrier(barrier);
        }
        self.subscriptions.release(host, settings);

        match controller.disable(host, settings) {
            Ok(Disposal::DestroyPanel) => {}
            Ok(Disposal::Restored) => warn!(panel = %self.panel, "secondary panel was restored"),
            Err(err) => warn!(panel = %self.panel, "{err}"),
        }

        if let Some(clock) = self.clock.take() {
            controller.detach_clock(host);
            host.destroy_widget(clock);
        }
        host.remove_focus_group(controller.spec().actor);
        host.remove_chrome(self.panel_box);
        host.destroy_panel(self.panel);

        info!(panel = %self.panel, monitor = self.monitor, "secondary panel detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessShell;
    use dock_config::DockConfig;
    use dock_core::{Displays, Stage, ZoneSide};

    fn two_monitors() -> HeadlessShell {
        HeadlessShell::with_monitors(vec![
            Monitor { index: 0, x: 0.0, y: 0.0, width: 1920.0, height: 1080.0, primary: true },
            Monitor { index: 1, x: 1920.0, y: 0.0, width: 1280.0, height: 1024.0, primary: false },
        ])
    }

    fn second(host: &HeadlessShell) -> Monitor {
        host.monitors()[1].clone()
    }

    #[test]
    fn create_places_box_and_registers_chrome() {
        let mut host = two_monitors();
        let mut settings = Settings::new(DockConfig::default());
        let monitor = second(&host);
        let (secondary, controller) =
            SecondaryPanel::create(&mut host, &mut settings, &monitor).unwrap();

        let panel_box = controller.spec().panel_box;
        assert_eq!(host.widget_position(panel_box), Some(monitor.origin()));
        assert_eq!(host.widget_width(panel_box), Some(1280.0));
        assert!(host.in_chrome(panel_box).is_some_and(|f| f.affects_struts && f.track_fullscreen));
        assert_eq!(host.stacked_below_primary(), &[panel_box]);
        assert!(controller.is_secondary());
        assert!(secondary.clock().is_some());
        assert_eq!(host.focus_group(controller.spec().actor), Some("Top Bar 1"));
    }

    #[test]
    fn clock_follows_the_setting() {
        let mut host = two_monitors();
        let mut settings = Settings::new(DockConfig::default());
        let monitor = second(&host);
        let (mut secondary, mut controller) =
            SecondaryPanel::create(&mut host, &mut settings, &monitor).unwrap();
        let clock = secondary.clock().unwrap();
        assert!(controller.zones().find(clock).is_some());

        secondary.sync_clock(&mut host, &mut controller, false);
        assert!(secondary.clock().is_none());
        assert!(!host.widget_exists(clock));
        assert!(controller.zones().find(clock).is_none());

        secondary.sync_clock(&mut host, &mut controller, true);
        assert!(secondary.clock().is_some());
    }

    #[test]
    fn barrier_tracks_the_trailing_edge() {
        let mut host = two_monitors();
        let mut settings = Settings::new(DockConfig::default());
        let monitor = second(&host);
        let (mut secondary, _controller) =
            SecondaryPanel::create(&mut host, &mut settings, &monitor).unwrap();

        secondary.refresh_barrier(&mut host, Rect::new(1920.0, 1032.0, 3200.0, 1080.0));
        let barriers = host.barriers();
        assert_eq!(barriers.len(), 1);
        let barrier = barriers[0];
        assert_eq!((barrier.x1, barrier.x2), (3200.0, 3200.0));
        assert_eq!((barrier.y1, barrier.y2), (1032.0, 1032.0 + 48.0));
        assert_eq!(barrier.direction, BarrierDirection::NegativeX);

        // recreated, never duplicated
        secondary.refresh_barrier(&mut host, Rect::new(1920.0, 0.0, 3200.0, 48.0));
        assert_eq!(host.barriers().len(), 1);
    }

    #[test]
    fn no_barrier_for_a_flat_box() {
        let mut host = two_monitors();
        let mut settings = Settings::new(DockConfig::default());
        let monitor = second(&host);
        let (mut secondary, controller) =
            SecondaryPanel::create(&mut host, &mut settings, &monitor).unwrap();

        host.set_height(controller.spec().actor, 0.0);
        secondary.refresh_barrier(&mut host, Rect::new(1920.0, 0.0, 3200.0, 0.0));
        assert!(host.barriers().is_empty());
        assert!(secondary.barrier().is_none());
    }

    #[test]
    fn destroy_removes_everything() {
        let mut host = two_monitors();
        let mut settings = Settings::new(DockConfig::default());
        let monitor = second(&host);
        let (mut secondary, mut controller) =
            SecondaryPanel::create(&mut host, &mut settings, &monitor).unwrap();
        secondary.refresh_barrier(&mut host, Rect::new(1920.0, 0.0, 3200.0, 48.0));
        let id = secondary.id();
        let panel_box = controller.spec().panel_box;
        let actor = controller.spec().actor;

        secondary.destroy(&mut host, &mut settings, &mut controller);
        assert!(host.focus_group(actor).is_none());
        assert!(host.barriers().is_empty());
        assert_eq!(host.connection_count(), 0);
        assert_eq!(settings.subscriber_count(), 0);
        assert_eq!(host.pending_timers(), 0);
        assert!(host.in_chrome(panel_box).is_none());
        assert!(!host.panel_ids().contains(&id));
        assert!(host.zone_children(id, ZoneSide::Center).is_empty());
    }
}
