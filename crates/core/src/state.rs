use crate::geometry::{Point, Rect};
use crate::ids::WindowId;
use serde::{Deserialize, Serialize};

/// A single display output as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    /// Stable position in the host's monitor list.
    pub index:   usize,
    pub x:       f32,
    pub y:       f32,
    pub width:   f32,
    pub height:  f32,
    pub primary: bool,
}

impl Monitor {
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered monitor list.  Everything except the primary gets a secondary panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorTopology {
    pub monitors: Vec<Monitor>,
}

impl MonitorTopology {
    pub fn new(monitors: Vec<Monitor>) -> Self {
        Self { monitors }
    }

    pub fn primary(&self) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.primary)
    }

    pub fn secondaries(&self) -> impl Iterator<Item = &Monitor> {
        self.monitors.iter().filter(|m| !m.primary)
    }

    pub fn by_index(&self, index: usize) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.index == index)
    }
}

/// Host window categories the style rule cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowType {
    #[default]
    Normal,
    Dialog,
    /// Desktop background windows never make the panel solid.
    Desktop,
    Dock,
    Other,
}

/// Snapshot of one window on the active workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id:           WindowId,
    /// Frame rectangle in stage coordinates.
    pub frame:        Rect,
    /// Index of the monitor the window is on.
    pub monitor:      usize,
    /// Visible on its workspace (not minimized, not hidden).
    pub showing:      bool,
    pub kind:         WindowType,
    pub skip_taskbar: bool,
}
