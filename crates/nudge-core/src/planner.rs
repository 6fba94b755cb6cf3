use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Point, Rect};

/// Maximum per-axis displacement for a single nudge, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementLimits {
    /// Largest horizontal move.
    pub max_x: i32,
    /// Largest vertical move.
    pub max_y: i32,
}

impl Default for MovementLimits {
    fn default() -> Self {
        Self {
            max_x: 50,
            max_y: 50,
        }
    }
}

/// Taskbar state as read for a single window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskbarState {
    /// Whether the taskbar retracts off-screen until hovered.
    pub auto_hidden: bool,
    /// Height of the strip the taskbar occupies, in pixels.
    pub height: i32,
}

/// Returns how far a window may move along one axis.
///
/// The radius shrinks for windows that nearly fill the monitor and is
/// never negative, so a window larger than its monitor gets zero.
pub fn movement_radius(limit: i32, available: i32, size: i32) -> i32 {
    limit.min(available.saturating_sub(size)).max(0)
}

/// Computes a new top-left position for a window.
///
/// The window is shifted by a uniformly random offset within its
/// movement radius, clamped so it stays on `monitor`, and finally kept
/// clear of the taskbar. The taskbar correction runs last and wins over
/// the monitor clamp when the two disagree.
///
/// For example, a 200x100 window at (100, 100) on a 1920x1080 monitor
/// with 50px limits lands somewhere in `[50, 150] x [50, 150]`.
pub fn plan<R: Rng>(
    window: &Rect,
    monitor: &Rect,
    limits: MovementLimits,
    taskbar: TaskbarState,
    rng: &mut R,
) -> Point {
    let width = window.width();
    let height = window.height();

    let radius_x = movement_radius(limits.max_x, monitor.width(), width);
    let radius_y = movement_radius(limits.max_y, monitor.height(), height);

    // Coordinates near the ends of the i32 range saturate instead of
    // wrapping.
    let x = window.left.saturating_add(rng.random_range(-radius_x..=radius_x));
    let y = window.top.saturating_add(rng.random_range(-radius_y..=radius_y));

    let x = clamp_axis(x, monitor.left, monitor.right.saturating_sub(width));
    let y = clamp_axis(y, monitor.top, monitor.bottom.saturating_sub(height));

    let y = if taskbar.auto_hidden {
        y.max(monitor.top.saturating_add(taskbar.height))
    } else {
        y.min(monitor.bottom.saturating_sub(height).saturating_sub(taskbar.height))
    };

    Point::new(x, y)
}

/// Clamps `value` into `[low, high]`, preferring `low` when the range
/// is empty (window larger than the monitor).
///
/// `i32::clamp` panics when `low > high`, so it cannot be used here.
fn clamp_axis(value: i32, low: i32, high: i32) -> i32 {
    value.min(high).max(low)
}
