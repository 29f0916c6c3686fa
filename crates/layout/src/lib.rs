//! Zone allocation engine for the dock panel.
//!
//! A panel is split into three zones laid out side by side: leading, center
//! and trailing.  The trailing zone always gets its natural width at the far
//! edge; the [`AlignmentPolicy`] decides how the leading zone and the center
//! zone share the rest.  Right-to-left panels get the mirror image.
//!
//! # Caller contract
//!
//! The rectangles are well-formed (non-negative widths, no overlap) when
//!
//! * `total >= leading + center + trailing`, and
//! * for the centering policies, `max(leading, trailing) <= (total - center) / 2`, and
//! * for [`AlignmentPolicy::CenteredContent`], `3 * trailing <= total + center + leading`.
//!
//! Inputs outside the contract are not clamped: the numbers come out exactly
//! as the formulas give them.  [`ZoneRects::is_well_formed`] tells callers
//! when that happened.

use dock_config::TaskbarPosition;
use dock_core::{Rect, Size, TextDirection};
use serde::Serialize;

/// How the center zone is positioned relative to the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AlignmentPolicy {
    /// Leading zone takes everything trailing and center don't need.
    #[default]
    LeadingFixed,
    /// Center floats in the middle of the space left after the leading zone.
    LeadingFloatCenter,
    /// Center is pinned to the middle of the panel; leading fills up to it.
    LeadingFixedCenter,
    /// Center is centered between the leading and trailing content.
    CenteredContent,
    /// Center is centered on the monitor.
    CenteredMonitor,
}

impl AlignmentPolicy {
    /// Centered policies keep the taskbar in the center zone.
    pub fn is_centered(self) -> bool {
        matches!(self, Self::CenteredContent | Self::CenteredMonitor)
    }
}

impl From<TaskbarPosition> for AlignmentPolicy {
    fn from(position: TaskbarPosition) -> Self {
        match position {
            TaskbarPosition::LeftPanel => Self::LeadingFixed,
            TaskbarPosition::LeftPanelFixedCenter => Self::LeadingFixedCenter,
            TaskbarPosition::LeftPanelFloatCenter => Self::LeadingFloatCenter,
            TaskbarPosition::CenteredContent => Self::CenteredContent,
            TaskbarPosition::CenteredMonitor => Self::CenteredMonitor,
        }
    }
}

/// Natural widths of the three zones.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ZoneWidths {
    pub leading:  f32,
    pub center:   f32,
    pub trailing: f32,
}

/// Everything one allocation pass depends on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutInput {
    pub width:     f32,
    pub height:    f32,
    pub natural:   ZoneWidths,
    pub policy:    AlignmentPolicy,
    pub direction: TextDirection,
}

/// Output of one allocation pass, in panel-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ZoneRects {
    pub leading:  Rect,
    pub center:   Rect,
    pub trailing: Rect,
}

impl ZoneRects {
    /// Non-negative widths, no horizontal overlap, everything inside `[0, total]`.
    pub fn is_well_formed(&self, total: f32) -> bool {
        let zones = [self.leading, self.center, self.trailing];
        zones
            .iter()
            .all(|r| r.width() >= 0.0 && r.x1 >= 0.0 && r.x2 <= total)
            && !self.leading.overlaps_x(&self.center)
            && !self.center.overlaps_x(&self.trailing)
            && !self.leading.overlaps_x(&self.trailing)
    }
}

/// Compute the three zone rectangles for one layout pass.
pub fn allocate(input: &LayoutInput) -> ZoneRects {
    let total = input.width;
    let ZoneWidths { leading, center, trailing } = input.natural;

    let (leading_width, center_start, center_end) = match input.policy {
        AlignmentPolicy::CenteredMonitor => {
            let start = leading.max(((total - center) / 2.0).floor());
            let end = (total - trailing).min(((total + center) / 2.0).ceil());
            (leading, start, end)
        }
        AlignmentPolicy::CenteredContent => {
            let start = leading.max(((total - center + leading - trailing) / 2.0).floor());
            let end = (total - trailing).max(((total - center - leading + trailing) / 2.0).ceil());
            (leading, start, end)
        }
        AlignmentPolicy::LeadingFixedCenter => {
            let width = ((total - center) / 2.0).floor();
            (width, width, width + center)
        }
        AlignmentPolicy::LeadingFloatCenter => {
            let width = (total - trailing - center).min(leading);
            let free = total - width - trailing - center;
            let start = width + (free / 2.0).floor();
            (width, start, start + center)
        }
        AlignmentPolicy::LeadingFixed => {
            let width = total - trailing - center;
            (width, width, width + center)
        }
    };

    let ltr = ZoneRects {
        leading:  Rect::new(0.0, 0.0, leading_width, input.height),
        center:   Rect::new(center_start, 0.0, center_end, input.height),
        trailing: Rect::new(total - trailing, 0.0, total, input.height),
    };

    match input.direction {
        TextDirection::LeftToRight => ltr,
        TextDirection::RightToLeft => ZoneRects {
            leading:  ltr.leading.mirrored(total),
            center:   ltr.center.mirrored(total),
            trailing: ltr.trailing.mirrored(total),
        },
    }
}

/// Boxes for the left and right corner decorations, hanging just below the
/// panel body and flush with its left and right edges.
pub fn corner_rects(panel: Size, left: Size, right: Size) -> (Rect, Rect) {
    let below = panel.height;
    (
        Rect::new(0.0, below, left.width, below + left.height),
        Rect::new(panel.width - right.width, below, panel.width, below + right.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICIES: [AlignmentPolicy; 5] = [
        AlignmentPolicy::LeadingFixed,
        AlignmentPolicy::LeadingFloatCenter,
        AlignmentPolicy::LeadingFixedCenter,
        AlignmentPolicy::CenteredContent,
        AlignmentPolicy::CenteredMonitor,
    ];

    fn input(total: f32, l: f32, c: f32, t: f32, policy: AlignmentPolicy) -> LayoutInput {
        LayoutInput {
            width: total,
            height: 40.0,
            natural: ZoneWidths { leading: l, center: c, trailing: t },
            policy,
            direction: TextDirection::LeftToRight,
        }
    }

    fn spans(r: &ZoneRects) -> [(f32, f32); 3] {
        [
            (r.leading.x1, r.leading.x2),
            (r.center.x1, r.center.x2),
            (r.trailing.x1, r.trailing.x2),
        ]
    }

    /// Inputs that satisfy the caller contract documented at the crate root.
    fn within_contract(total: f32, l: f32, c: f32, t: f32, policy: AlignmentPolicy) -> bool {
        if l + c + t > total {
            return false;
        }
        let centering = matches!(
            policy,
            AlignmentPolicy::LeadingFixedCenter
                | AlignmentPolicy::CenteredContent
                | AlignmentPolicy::CenteredMonitor
        );
        if centering && l.max(t) > (total - c) / 2.0 {
            return false;
        }
        if policy == AlignmentPolicy::CenteredContent && 3.0 * t > total + c + l {
            return false;
        }
        true
    }

    #[test]
    fn centered_monitor_example() {
        let r = allocate(&input(1000.0, 100.0, 300.0, 150.0, AlignmentPolicy::CenteredMonitor));
        assert_eq!(spans(&r), [(0.0, 100.0), (350.0, 650.0), (850.0, 1000.0)]);
        assert_eq!(r.center.y1, 0.0);
        assert_eq!(r.center.y2, 40.0);
    }

    #[test]
    fn leading_fixed_gives_leading_the_slack() {
        let r = allocate(&input(1000.0, 100.0, 300.0, 150.0, AlignmentPolicy::LeadingFixed));
        assert_eq!(spans(&r), [(0.0, 550.0), (550.0, 850.0), (850.0, 1000.0)]);
    }

    #[test]
    fn fixed_center_pins_center_to_the_middle() {
        let r = allocate(&input(1001.0, 100.0, 300.0, 150.0, AlignmentPolicy::LeadingFixedCenter));
        assert_eq!(spans(&r), [(0.0, 350.0), (350.0, 650.0), (851.0, 1001.0)]);
    }

    #[test]
    fn float_center_splits_the_free_space() {
        let r = allocate(&input(1000.0, 100.0, 300.0, 150.0, AlignmentPolicy::LeadingFloatCenter));
        // free = 1000 - 100 - 150 - 300 = 450, half = 225
        assert_eq!(spans(&r), [(0.0, 100.0), (325.0, 625.0), (850.0, 1000.0)]);
    }

    #[test]
    fn centered_content_balances_side_content() {
        let r = allocate(&input(1000.0, 200.0, 300.0, 100.0, AlignmentPolicy::CenteredContent));
        // start = max(200, floor((1000 - 300 + 200 - 100) / 2)) = 400
        // end   = max(900, ceil((1000 - 300 - 200 + 100) / 2)) = 900
        assert_eq!(spans(&r), [(0.0, 200.0), (400.0, 900.0), (900.0, 1000.0)]);
    }

    #[test]
    fn zero_width_panel_yields_empty_zones() {
        for policy in POLICIES {
            let r = allocate(&input(0.0, 0.0, 0.0, 0.0, policy));
            for (x1, x2) in spans(&r) {
                assert_eq!(x2 - x1, 0.0, "{policy:?}");
            }
        }
    }

    #[test]
    fn oversized_content_is_not_clamped() {
        let r = allocate(&input(100.0, 80.0, 80.0, 80.0, AlignmentPolicy::LeadingFixed));
        assert_eq!(r.leading.width(), -60.0);
        assert!(!r.is_well_formed(100.0));
    }

    #[test]
    fn contract_inputs_are_well_formed() {
        let steps = [0.0, 1.0, 7.0, 50.0, 99.0, 150.0, 333.0];
        for policy in POLICIES {
            for total in [0.0, 101.0, 640.0, 1000.0, 1921.0] {
                for l in steps {
                    for c in steps {
                        for t in steps {
                            if !within_contract(total, l, c, t, policy) {
                                continue;
                            }
                            let r = allocate(&input(total, l, c, t, policy));
                            assert!(
                                r.is_well_formed(total),
                                "{policy:?} total={total} l={l} c={c} t={t}: {r:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn rtl_is_the_mirror_image() {
        for policy in POLICIES {
            for (total, l, c, t) in [(1000.0, 100.0, 300.0, 150.0), (777.0, 13.0, 201.0, 64.0)] {
                let ltr = allocate(&input(total, l, c, t, policy));
                let rtl = allocate(&LayoutInput {
                    direction: TextDirection::RightToLeft,
                    ..input(total, l, c, t, policy)
                });
                assert_eq!(rtl.leading, ltr.leading.mirrored(total));
                assert_eq!(rtl.center, ltr.center.mirrored(total));
                assert_eq!(rtl.trailing, ltr.trailing.mirrored(total));
                // trailing is visually leftmost
                assert_eq!(rtl.trailing.x1, 0.0);
                assert!(rtl.trailing.x2 <= rtl.center.x1);
            }
        }
    }

    #[test]
    fn corners_hang_below_the_body() {
        let (left, right) = corner_rects(
            Size::new(1000.0, 40.0),
            Size::new(6.0, 6.0),
            Size::new(8.0, 5.0),
        );
        assert_eq!(left, Rect::new(0.0, 40.0, 6.0, 46.0));
        assert_eq!(right, Rect::new(992.0, 40.0, 1000.0, 45.0));
    }

    #[test]
    fn taskbar_positions_map_to_policies() {
        assert_eq!(AlignmentPolicy::from(TaskbarPosition::LeftPanel), AlignmentPolicy::LeadingFixed);
        assert!(AlignmentPolicy::from(TaskbarPosition::CenteredMonitor).is_centered());
        assert!(!AlignmentPolicy::from(TaskbarPosition::LeftPanelFixedCenter).is_centered());
    }
}
