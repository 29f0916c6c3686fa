use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `dock.toml`.
///
/// Keys are kebab-case and match the settings keys one to one, so a file can
/// be written by hand or generated from a settings dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DockConfig {
    /// Which zone hosts the taskbar and how the center zone is aligned.
    pub taskbar_position: TaskbarPosition,
    /// Screen edge the panel sits on.
    pub panel_position: PanelPosition,
    /// Panel height in logical pixels, before scaling.
    pub panel_size: u32,
    /// Spacing between taskbar icons (pixels).
    pub appicon_margin: u32,
    /// Padding inside each taskbar icon (pixels).
    pub appicon_padding: u32,
    pub show_activities_button: bool,
    pub show_appmenu: bool,
    pub location_clock: ClockLocation,
    pub show_showdesktop_button: bool,
    pub showdesktop_button_width: u32,
    /// Give every secondary panel its own clock.
    pub show_clock_all_monitors: bool,
    /// Simulated displays for the headless `dock` binary.
    pub preview: PreviewConfig,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            taskbar_position:         TaskbarPosition::LeftPanel,
            panel_position:           PanelPosition::Bottom,
            panel_size:               48,
            appicon_margin:           8,
            appicon_padding:          4,
            show_activities_button:   false,
            show_appmenu:             false,
            location_clock:           ClockLocation::StatusRight,
            show_showdesktop_button:  true,
            showdesktop_button_width: 8,
            show_clock_all_monitors:  true,
            preview:                  PreviewConfig::default(),
        }
    }
}

/// `taskbar-position` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskbarPosition {
    /// Taskbar in the leading zone, which takes all remaining space.
    #[default]
    #[serde(alias = "LEFTPANEL")]
    LeftPanel,
    #[serde(alias = "LEFTPANEL_FIXEDCENTER")]
    LeftPanelFixedCenter,
    #[serde(alias = "LEFTPANEL_FLOATCENTER")]
    LeftPanelFloatCenter,
    /// Taskbar in the center zone, centered between leading and trailing content.
    #[serde(alias = "CENTEREDCONTENT")]
    CenteredContent,
    /// Taskbar in the center zone, centered on the monitor.
    #[serde(alias = "CENTEREDMONITOR")]
    CenteredMonitor,
}

/// Panel position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PanelPosition {
    #[serde(alias = "TOP", alias = "top")]
    Top,
    #[default]
    #[serde(alias = "BOTTOM", alias = "bottom")]
    Bottom,
}

/// `location-clock` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClockLocation {
    #[serde(alias = "BUTTONSLEFT")]
    ButtonsLeft,
    #[serde(alias = "BUTTONSRIGHT")]
    ButtonsRight,
    #[serde(alias = "STATUSLEFT")]
    StatusLeft,
    #[default]
    #[serde(alias = "STATUSRIGHT")]
    StatusRight,
    #[serde(alias = "TASKBARLEFT")]
    TaskbarLeft,
    #[serde(alias = "TASKBARRIGHT")]
    TaskbarRight,
}

/// What a clock location is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAnchor {
    /// The center zone, next to the panel buttons.
    Buttons,
    /// The trailing zone, next to the aggregate (status) menu.
    Status,
    /// Whatever zone holds the taskbar, next to the taskbar.
    Taskbar,
}

impl ClockLocation {
    pub fn anchor(self) -> ClockAnchor {
        match self {
            Self::ButtonsLeft | Self::ButtonsRight => ClockAnchor::Buttons,
            Self::StatusLeft | Self::StatusRight => ClockAnchor::Status,
            Self::TaskbarLeft | Self::TaskbarRight => ClockAnchor::Taskbar,
        }
    }

    /// `*Right` locations go after their reference sibling, `*Left` before it.
    pub fn is_right(self) -> bool {
        matches!(self, Self::ButtonsRight | Self::StatusRight | Self::TaskbarRight)
    }
}

/// Settings for the headless preview binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PreviewConfig {
    /// Monitor sizes as `"WIDTHxHEIGHT"`, laid out left to right.
    /// The first one is primary.
    pub monitors: Vec<String>,
    pub scale_factor: f32,
    /// Lay panels out right-to-left.
    pub rtl: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            monitors:     vec!["1920x1080".to_string()],
            scale_factor: 1.0,
            rtl:          false,
        }
    }
}

impl PreviewConfig {
    /// Parsed monitor sizes; malformed entries are skipped with a warning.
    pub fn monitor_sizes(&self) -> Vec<(f32, f32)> {
        self.monitors
            .iter()
            .filter_map(|raw| match parse_size(raw) {
                Some(size) => Some(size),
                None => {
                    tracing::warn!("Ignoring malformed preview monitor '{raw}'");
                    None
                }
            })
            .collect()
    }
}

fn parse_size(raw: &str) -> Option<(f32, f32)> {
    let (w, h) = raw.trim().split_once(['x', 'X'])?;
    let w = w.trim().parse::<u32>().ok()?;
    let h = h.trim().parse::<u32>().ok()?;
    Some((w as f32, h as f32))
}
