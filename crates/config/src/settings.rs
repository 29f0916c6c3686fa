//! In-memory settings store with per-key change subscriptions.

use crate::schema::DockConfig;
use dock_core::SubscriptionId;
use std::fmt;

/// Every key a panel can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    TaskbarPosition,
    PanelPosition,
    PanelSize,
    AppIconMargin,
    AppIconPadding,
    ShowActivitiesButton,
    ShowAppMenu,
    LocationClock,
    ShowShowDesktopButton,
    ShowDesktopButtonWidth,
    ShowClockAllMonitors,
}

impl SettingKey {
    pub const ALL: [SettingKey; 11] = [
        SettingKey::TaskbarPosition,
        SettingKey::PanelPosition,
        SettingKey::PanelSize,
        SettingKey::AppIconMargin,
        SettingKey::AppIconPadding,
        SettingKey::ShowActivitiesButton,
        SettingKey::ShowAppMenu,
        SettingKey::LocationClock,
        SettingKey::ShowShowDesktopButton,
        SettingKey::ShowDesktopButtonWidth,
        SettingKey::ShowClockAllMonitors,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaskbarPosition => "taskbar-position",
            Self::PanelPosition => "panel-position",
            Self::PanelSize => "panel-size",
            Self::AppIconMargin => "appicon-margin",
            Self::AppIconPadding => "appicon-padding",
            Self::ShowActivitiesButton => "show-activities-button",
            Self::ShowAppMenu => "show-appmenu",
            Self::LocationClock => "location-clock",
            Self::ShowShowDesktopButton => "show-showdesktop-button",
            Self::ShowDesktopButtonWidth => "showdesktop-button-width",
            Self::ShowClockAllMonitors => "show-clock-all-monitors",
        }
    }

    /// Whether this key differs between two configs.
    fn differs(self, a: &DockConfig, b: &DockConfig) -> bool {
        match self {
            Self::TaskbarPosition => a.taskbar_position != b.taskbar_position,
            Self::PanelPosition => a.panel_position != b.panel_position,
            Self::PanelSize => a.panel_size != b.panel_size,
            Self::AppIconMargin => a.appicon_margin != b.appicon_margin,
            Self::AppIconPadding => a.appicon_padding != b.appicon_padding,
            Self::ShowActivitiesButton => a.show_activities_button != b.show_activities_button,
            Self::ShowAppMenu => a.show_appmenu != b.show_appmenu,
            Self::LocationClock => a.location_clock != b.location_clock,
            Self::ShowShowDesktopButton => a.show_showdesktop_button != b.show_showdesktop_button,
            Self::ShowDesktopButtonWidth => a.showdesktop_button_width != b.showdesktop_button_width,
            Self::ShowClockAllMonitors => a.show_clock_all_monitors != b.show_clock_all_monitors,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys whose values differ between `old` and `new`, in [`SettingKey::ALL`] order.
pub fn changed_keys(old: &DockConfig, new: &DockConfig) -> Vec<SettingKey> {
    SettingKey::ALL
        .into_iter()
        .filter(|k| k.differs(old, new))
        .collect()
}

/// The live settings.  Subscribers are notified only for keys whose value
/// actually changed, so writing the same value twice is silent.
#[derive(Debug)]
pub struct Settings {
    current:     DockConfig,
    subscribers: Vec<(SubscriptionId, SettingKey)>,
    next_id:     u64,
}

impl Settings {
    pub fn new(config: DockConfig) -> Self {
        Self {
            current: config,
            subscribers: Vec::new(),
            next_id: 1,
        }
    }

    pub fn get(&self) -> &DockConfig {
        &self.current
    }

    pub fn connect(&mut self, key: SettingKey) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, key));
        id
    }

    /// Returns `false` if `id` was not connected.
    pub fn disconnect(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Swap in a new config; returns the notifications to deliver, in
    /// subscription order.
    pub fn replace(&mut self, config: DockConfig) -> Vec<(SubscriptionId, SettingKey)> {
        let changed = changed_keys(&self.current, &config);
        self.current = config;
        if !changed.is_empty() {
            tracing::debug!(?changed, "settings changed");
        }
        self.subscribers
            .iter()
            .filter(|(_, key)| changed.contains(key))
            .copied()
            .collect()
    }

    /// Edit the config in place; see [`Settings::replace`].
    pub fn update(
        &mut self,
        edit: impl FnOnce(&mut DockConfig),
    ) -> Vec<(SubscriptionId, SettingKey)> {
        let mut next = self.current.clone();
        edit(&mut next);
        self.replace(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ClockLocation, PanelPosition};

    #[test]
    fn keys_display_as_config_names() {
        assert_eq!(SettingKey::LocationClock.to_string(), "location-clock");
        assert_eq!(SettingKey::ShowDesktopButtonWidth.to_string(), "showdesktop-button-width");
    }

    #[test]
    fn only_changed_keys_notify() {
        let mut settings = Settings::new(DockConfig::default());
        let pos = settings.connect(SettingKey::PanelPosition);
        let _clock = settings.connect(SettingKey::LocationClock);

        let fired = settings.update(|c| c.panel_position = PanelPosition::Top);
        assert_eq!(fired, vec![(pos, SettingKey::PanelPosition)]);

        // Same value again: nothing to deliver.
        let fired = settings.update(|c| c.panel_position = PanelPosition::Top);
        assert!(fired.is_empty());
    }

    #[test]
    fn disconnected_subscribers_are_silent() {
        let mut settings = Settings::new(DockConfig::default());
        let id = settings.connect(SettingKey::LocationClock);
        assert!(settings.disconnect(id));
        assert!(!settings.disconnect(id));
        assert_eq!(settings.subscriber_count(), 0);

        let fired = settings.update(|c| c.location_clock = ClockLocation::ButtonsLeft);
        assert!(fired.is_empty());
        assert_eq!(settings.get().location_clock, ClockLocation::ButtonsLeft);
    }
}
