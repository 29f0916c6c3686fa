//! Solid / transparent panel styling driven by window proximity.

use crate::timer::TimerSlot;
use dock_config::PanelPosition;
use dock_core::{Shell, TimerId, WidgetId, WindowType};
use std::time::Duration;
use tracing::debug;

pub const SOLID_CLASS: &str = "solid";

/// How close (before scaling) a window edge must come to count as touching.
pub const PROXIMITY_PX: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleState {
    Solid,
    #[default]
    Transparent,
}

/// The panel a style pass is computed for.
#[derive(Debug, Clone, Copy)]
pub struct StyleTarget {
    pub actor:    WidgetId,
    pub monitor:  usize,
    pub position: PanelPosition,
}

#[derive(Debug, Default)]
pub struct StyleSync {
    state:   StyleState,
    removal: TimerSlot,
}

impl StyleSync {
    pub fn state(&self) -> StyleState {
        self.state
    }

    /// `true` while a deferred switch to transparent is queued.
    pub fn removal_pending(&self) -> bool {
        self.removal.is_armed()
    }

    pub fn update(&mut self, host: &mut impl Shell, target: &StyleTarget) {
        if host.is_active() || !host.session_has_windows() {
            self.request_removal(host);
            return;
        }

        if host.primary_monitor().is_none() {
            return;
        }

        let scale = match host.scale_factor() {
            s if s > 0.0 => s,
            _ => 1.0,
        };
        let threshold = PROXIMITY_PX * scale;
        let panel_top = host.transformed_position(target.actor).y;
        let panel_bottom = panel_top + host.height(target.actor);

        let near = host
            .workspace_windows()
            .iter()
            .filter(|w| w.monitor == target.monitor && w.showing && w.kind != WindowType::Desktop)
            .any(|w| match target.position {
                PanelPosition::Top => w.frame.y1 < panel_bottom + threshold,
                PanelPosition::Bottom => w.frame.y2 > panel_top - threshold,
            });

        if near {
            self.removal.cancel(host);
            if !host.has_style_class(target.actor, SOLID_CLASS) {
                host.add_style_class(target.actor, SOLID_CLASS);
            }
            if self.state != StyleState::Solid {
                debug!(actor = %target.actor, "panel style -> solid");
            }
            self.state = StyleState::Solid;
        } else {
            self.request_removal(host);
        }
    }

    /// Handle a fired timer.  Returns `true` if it was ours.
    pub fn on_timer(&mut self, host: &mut impl Shell, actor: WidgetId, id: TimerId) -> bool {
        if !self.removal.fire(id) {
            return false;
        }
        host.remove_style_class(actor, SOLID_CLASS);
        if self.state != StyleState::Transparent {
            debug!(%actor, "panel style -> transparent");
        }
        self.state = StyleState::Transparent;
        true
    }

    /// Cancel anything pending and drop the solid class.
    pub fn reset(&mut self, host: &mut impl Shell, actor: WidgetId) {
        self.removal.cancel(host);
        host.remove_style_class(actor, SOLID_CLASS);
        self.state = StyleState::Transparent;
    }

    fn request_removal(&mut self, host: &mut impl Shell) {
        self.removal.arm(host, Duration::ZERO);
    }
}
