//! Owns every panel controller and routes host messages to them.

use crate::controller::{Disposal, PanelController};
use crate::monitors::{CoordinatorHandler, SecondaryPanel};
use crate::router::Action;
use crate::subscriptions::Handler;
use dock_config::{DockConfig, Settings};
use dock_core::{
    DockError, DragMotion, DragSource, Message, Monitor, MonitorTopology, PanelId, Result, Shell,
    Signal, SignalSource, SubscriptionId,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// A fired subscription and the side of the manager it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Work {
    Controller(PanelId, Handler),
    Coordinator(PanelId, CoordinatorHandler),
}

#[derive(Debug)]
pub struct PanelManager {
    settings:    Settings,
    panels:      BTreeMap<PanelId, PanelController>,
    secondaries: BTreeMap<PanelId, SecondaryPanel>,
    primary:     Option<PanelId>,
    config_path: Option<PathBuf>,
}

impl PanelManager {
    pub fn new(config: DockConfig) -> Self {
        Self {
            settings:    Settings::new(config),
            panels:      BTreeMap::new(),
            secondaries: BTreeMap::new(),
            primary:     None,
            config_path: None,
        }
    }

    /// Where `Message::ConfigReloaded` reads the new config from.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn primary(&self) -> Option<&PanelController> {
        self.primary.and_then(|id| self.panels.get(&id))
    }

    pub fn panel(&self, id: PanelId) -> Option<&PanelController> {
        self.panels.get(&id)
    }

    pub fn panels(&self) -> impl Iterator<Item = &PanelController> {
        self.panels.values()
    }

    pub fn secondary(&self, id: PanelId) -> Option<&SecondaryPanel> {
        self.secondaries.get(&id)
    }

    pub fn secondaries(&self) -> impl Iterator<Item = &SecondaryPanel> {
        self.secondaries.values()
    }

    pub fn is_enabled(&self) -> bool {
        self.primary.is_some()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Adopt the host's primary panel and create secondaries for every other monitor.
    pub fn enable(&mut self, host: &mut impl Shell) -> Result<()> {
        if self.primary.is_some() {
            return Err(DockError::Panel("dock is already enabled".into()));
        }
        let spec = host
            .primary_panel()
            .ok_or_else(|| DockError::Host("host has no primary panel".into()))?;

        let mut controller = PanelController::new(spec);
        controller.enable(host, &mut self.settings)?;
        let id = controller.id();
        self.panels.insert(id, controller);
        self.primary = Some(id);

        let topology = MonitorTopology::new(host.monitors());
        self.sync_monitors(host, &topology);

        info!(panels = self.panels.len(), "dock enabled");
        Ok(())
    }

    pub fn disable(&mut self, host: &mut impl Shell) -> Result<()> {
        let secondaries: Vec<PanelId> = self.secondaries.keys().copied().collect();
        for id in secondaries {
            self.destroy_secondary(host, id);
        }

        let result = match self.primary.take().and_then(|id| self.panels.remove(&id)) {
            Some(mut controller) => controller.disable(host, &mut self.settings).map(|_| ()),
            None => Ok(()),
        };
        self.panels.clear();
        info!("dock disabled");
        result
    }

    // ── Message loop ──────────────────────────────────────────────────────────

    pub fn update(&mut self, host: &mut impl Shell, message: Message) -> Result<()> {
        match message {
            Message::Allocate { panel, allocation } => {
                let controller = self
                    .panels
                    .get_mut(&panel)
                    .ok_or_else(|| DockError::Panel(format!("allocate for unknown {panel}")))?;
                controller.allocate(host, allocation);
            }
            Message::Signal { source, signal } => self.dispatch(host, source, signal)?,
            Message::TimerFired(id) => {
                let claimed = self.panels.values_mut().any(|c| c.on_timer(host, id));
                if !claimed {
                    debug!(timer = %id, "stale timer");
                }
            }
            Message::MonitorsChanged(topology) => self.sync_monitors(host, &topology),
            Message::ConfigReloaded => match self.config_path.clone() {
                Some(path) => match dock_config::load(path) {
                    Ok(config) => self.apply_config(host, config)?,
                    Err(err) => warn!("config reload failed: {err}"),
                },
                None => debug!("config reload without a config path"),
            },
            Message::Shutdown => self.disable(host)?,
        }
        Ok(())
    }

    /// Swap in a new config and deliver change notifications for the keys
    /// that actually changed.
    pub fn apply_config(&mut self, host: &mut impl Shell, config: DockConfig) -> Result<()> {
        for (subscription, key) in self.settings.replace(config) {
            match self.setting_owner(subscription) {
                Some(work) => self.run(host, work, None)?,
                None => debug!(%key, %subscription, "notification for a released subscription"),
            }
        }
        Ok(())
    }

    fn setting_owner(&self, subscription: SubscriptionId) -> Option<Work> {
        self.panels
            .iter()
            .find_map(|(id, c)| {
                c.subscriptions()
                    .setting_handler(subscription)
                    .map(|h| Work::Controller(*id, h))
            })
            .or_else(|| {
                self.secondaries.iter().find_map(|(id, s)| {
                    s.setting_handler(subscription)
                        .map(|h| Work::Coordinator(*id, h))
                })
            })
    }

    fn dispatch(&mut self, host: &mut impl Shell, source: SignalSource, signal: Signal) -> Result<()> {
        let kind = signal.kind();
        let mut work: Vec<Work> = Vec::new();
        for (id, controller) in &self.panels {
            for handler in controller.subscriptions().handlers_for(source, kind) {
                work.push(Work::Controller(*id, handler));
            }
        }
        for (id, secondary) in &self.secondaries {
            for handler in secondary.handlers_for(source, kind) {
                work.push(Work::Coordinator(*id, handler));
            }
        }

        for item in work {
            self.run(host, item, Some(&signal))?;
        }
        Ok(())
    }

    fn run(&mut self, host: &mut impl Shell, work: Work, signal: Option<&Signal>) -> Result<()> {
        match work {
            Work::Controller(id, handler) => {
                // An earlier handler in the same batch may have rebuilt the panel.
                let Some(controller) = self.panels.get_mut(&id) else {
                    return Ok(());
                };
                let action = controller.handle(host, &self.settings, handler, signal);
                if action == Some(Action::Rebuild) {
                    self.rebuild(host, id)?;
                }
            }
            Work::Coordinator(id, handler) => {
                let (Some(secondary), Some(controller)) =
                    (self.secondaries.get_mut(&id), self.panels.get_mut(&id))
                else {
                    return Ok(());
                };
                secondary.handle(host, &self.settings, controller, handler, signal);
            }
        }
        Ok(())
    }

    /// `disable(); enable();` for one panel.  Secondary panels are destroyed
    /// and recreated on the same monitor.
    pub fn rebuild(&mut self, host: &mut impl Shell, id: PanelId) -> Result<()> {
        if let Some(secondary) = self.secondaries.get(&id) {
            let monitor = secondary.monitor();
            self.destroy_secondary(host, id);
            let topology = MonitorTopology::new(host.monitors());
            if let Some(monitor) = topology.by_index(monitor) {
                self.create_secondary(host, monitor);
            }
            return Ok(());
        }

        let controller = self
            .panels
            .get_mut(&id)
            .ok_or_else(|| DockError::Panel(format!("rebuild of unknown {id}")))?;
        info!(panel = %id, "rebuilding panel");
        if controller.disable(host, &mut self.settings)? == Disposal::Restored {
            // the host may have changed the primary panel's zones while we were away
            if let Some(spec) = host.primary_panel() {
                *controller = PanelController::new(spec);
            }
        }
        controller.enable(host, &mut self.settings)
    }

    // ── Monitors ──────────────────────────────────────────────────────────────

    /// Bring the set of secondary panels in line with `topology`.
    pub fn sync_monitors(&mut self, host: &mut impl Shell, topology: &MonitorTopology) {
        if let Some(primary) = topology.primary() {
            if let Some(controller) = self.primary.and_then(|id| self.panels.get_mut(&id)) {
                controller.set_monitor(host, primary.clone(), self.settings.get());
            }
        }

        let wanted: Vec<&Monitor> = topology.secondaries().collect();

        let gone: Vec<PanelId> = self
            .secondaries
            .values()
            .filter(|s| !wanted.iter().any(|m| m.index == s.monitor()))
            .map(SecondaryPanel::id)
            .collect();
        for id in gone {
            self.destroy_secondary(host, id);
        }

        for monitor in wanted {
            let existing = self
                .secondaries
                .iter_mut()
                .find(|(_, s)| s.monitor() == monitor.index);
            match existing {
                Some((id, secondary)) => {
                    if let Some(controller) = self.panels.get_mut(id) {
                        secondary.update_geometry(host, controller, &self.settings, monitor);
                    }
                }
                None => self.create_secondary(host, monitor),
            }
        }
    }

    fn create_secondary(&mut self, host: &mut impl Shell, monitor: &Monitor) {
        match SecondaryPanel::create(host, &mut self.settings, monitor) {
            Ok((secondary, controller)) => {
                let id = secondary.id();
                self.panels.insert(id, controller);
                self.secondaries.insert(id, secondary);
            }
            Err(err) => warn!(monitor = monitor.index, "secondary panel failed: {err}"),
        }
    }

    fn destroy_secondary(&mut self, host: &mut impl Shell, id: PanelId) {
        let secondary = self.secondaries.remove(&id);
        let controller = self.panels.remove(&id);
        match (secondary, controller) {
            (Some(secondary), Some(mut controller)) => {
                secondary.destroy(host, &mut self.settings, &mut controller)
            }
            _ => warn!(panel = %id, "secondary panel state out of sync"),
        }
    }

    // ── Drag and drop ─────────────────────────────────────────────────────────

    pub fn handle_drag_over(
        &self,
        host: &mut impl Shell,
        panel: PanelId,
        source: DragSource,
    ) -> Result<DragMotion> {
        let controller = self
            .panels
            .get(&panel)
            .ok_or_else(|| DockError::Panel(format!("drag over unknown {panel}")))?;
        Ok(controller.handle_drag_over(host, source))
    }
}
