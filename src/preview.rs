//! Headless preview loop.
//!
//! Drives the dock against [`HeadlessShell`] and logs every zone layout it
//! computes:
//! - host timers, delivered on the virtual clock as real time passes
//! - config file watcher (live reload on change)
//! - Ctrl-C for a clean `disable`

use anyhow::Context;
use dock_config::{default_path, load as load_config, ConfigWatcher, DockConfig, PreviewConfig};
use dock_core::{
    Message, Monitor, MonitorTopology, PanelId, Signal, SignalSource, TextDirection, ZoneSide,
};
use dock_panel::{HeadlessShell, PanelManager};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, warn};

/// How long to sleep when no host timer is pending.
const IDLE_WAKEUP: Duration = Duration::from_secs(3600);

pub async fn run() -> anyhow::Result<()> {
    let path = default_path();
    let config = load_config(&path).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        DockConfig::default()
    });

    let mut preview = config.preview.clone();
    let mut host = HeadlessShell::with_monitors(monitors(&preview));
    apply_display(&mut host, &preview);

    let mut manager = PanelManager::new(config).with_config_path(path.clone());
    manager.enable(&mut host).context("cannot enable the dock")?;
    relayout(&mut manager, &mut host)?;

    let (_watcher, mut reloads) = ConfigWatcher::spawn(&path);
    let mut last = Instant::now();

    loop {
        let wait = host.next_deadline().unwrap_or(IDLE_WAKEUP);

        tokio::select! {
            _ = tokio::time::sleep(wait) => {}
            Some(()) = reloads.recv() => {
                manager.update(&mut host, Message::ConfigReloaded)?;
                let next = manager.settings().get().preview.clone();
                if next != preview {
                    display_changed(&mut manager, &mut host, &preview, &next)?;
                    preview = next;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                manager.update(&mut host, Message::Shutdown)?;
                return Ok(());
            }
        }

        let now = Instant::now();
        for timer in host.advance(now - last) {
            manager.update(&mut host, Message::TimerFired(timer))?;
        }
        last = now;

        relayout(&mut manager, &mut host)?;
    }
}

/// Simulated monitors, left to right; the first one is primary.
fn monitors(preview: &PreviewConfig) -> Vec<Monitor> {
    let mut x = 0.0;
    preview
        .monitor_sizes()
        .into_iter()
        .enumerate()
        .map(|(index, (width, height))| {
            let monitor = Monitor { index, x, y: 0.0, width, height, primary: index == 0 };
            x += width;
            monitor
        })
        .collect()
}

fn apply_display(host: &mut HeadlessShell, preview: &PreviewConfig) {
    host.set_scale_factor(preview.scale_factor);
    host.set_text_direction(if preview.rtl {
        TextDirection::RightToLeft
    } else {
        TextDirection::LeftToRight
    });
}

/// Push a `[preview]` change to the host the way a real display server would.
fn display_changed(
    manager: &mut PanelManager,
    host: &mut HeadlessShell,
    old: &PreviewConfig,
    new: &PreviewConfig,
) -> anyhow::Result<()> {
    apply_display(host, new);

    if old.monitors != new.monitors {
        let monitors = monitors(new);
        host.set_monitors(monitors.clone());
        manager.update(host, Message::MonitorsChanged(MonitorTopology::new(monitors)))?;
    }
    if old.scale_factor != new.scale_factor {
        let message = Message::Signal {
            source: SignalSource::Theme,
            signal: Signal::ScaleFactorChanged,
        };
        manager.update(host, message)?;
    }
    Ok(())
}

/// One host layout pass, logging each panel's zones.
fn relayout(manager: &mut PanelManager, host: &mut HeadlessShell) -> anyhow::Result<()> {
    let mut allocated: Vec<PanelId> = Vec::new();
    for message in host.layout_pass() {
        if let Message::Allocate { panel, .. } = &message {
            allocated.push(*panel);
        }
        manager.update(host, message)?;
    }
    for panel in allocated {
        log_layout(host, panel)?;
    }
    Ok(())
}

fn log_layout(host: &HeadlessShell, panel: PanelId) -> anyhow::Result<()> {
    let zone = |side| host.zone_allocation(panel, side);
    let layout = serde_json::json!({
        "panel":    panel,
        "leading":  zone(ZoneSide::Leading),
        "center":   zone(ZoneSide::Center),
        "trailing": zone(ZoneSide::Trailing),
    });
    let layout = serde_json::to_string(&layout)?;
    info!(%panel, %layout, "zones allocated");
    Ok(())
}
