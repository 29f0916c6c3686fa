//! Maps settings keys to what a panel has to do about them.

use dock_config::SettingKey;

/// Controller work triggered by a settings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `disable(); enable();`, zone assumptions change.
    Rebuild,
    SyncPanelPosition,
    SyncPanelPositionAndResetIcons,
    ResetAppIcons,
    SyncActivitiesButton,
    SyncAppMenu,
    SyncClockLocation,
    SyncShowDesktopButton,
    SyncShowDesktopWidth,
}

/// `None` for keys that are not a panel's business: `show-clock-all-monitors`
/// belongs to the secondary-panel coordinator.
pub fn route(key: SettingKey) -> Option<Action> {
    let action = match key {
        SettingKey::TaskbarPosition => Action::Rebuild,
        SettingKey::PanelPosition => Action::SyncPanelPosition,
        SettingKey::PanelSize => Action::SyncPanelPositionAndResetIcons,
        SettingKey::AppIconMargin | SettingKey::AppIconPadding => Action::ResetAppIcons,
        SettingKey::ShowActivitiesButton => Action::SyncActivitiesButton,
        SettingKey::ShowAppMenu => Action::SyncAppMenu,
        SettingKey::LocationClock => Action::SyncClockLocation,
        SettingKey::ShowShowDesktopButton => Action::SyncShowDesktopButton,
        SettingKey::ShowDesktopButtonWidth => Action::SyncShowDesktopWidth,
        SettingKey::ShowClockAllMonitors => return None,
    };
    Some(action)
}

/// Keys every panel controller subscribes to while enabled.
pub const PANEL_KEYS: [SettingKey; 10] = [
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
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_taskbar_position_rebuilds() {
        for key in SettingKey::ALL {
            assert_eq!(
                route(key) == Some(Action::Rebuild),
                key == SettingKey::TaskbarPosition,
                "{key}"
            );
        }
    }

    #[test]
    fn panel_keys_are_exactly_the_routed_ones() {
        for key in SettingKey::ALL {
            assert_eq!(PANEL_KEYS.contains(&key), route(key).is_some(), "{key}");
        }
        assert_eq!(route(SettingKey::ShowClockAllMonitors), None);
    }
}
