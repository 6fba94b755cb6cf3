use crate::planner::TaskbarState;
use crate::{Point, Rect};

/// A boxed error type for desktop operations.
///
/// Platform crates surface their OS errors through this type so the
/// pass logic stays independent of any particular API binding.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A window's restored rectangle and show state, read once per nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Outer window rectangle in screen coordinates.
    pub rect: Rect,
    /// Whether the window is currently maximized.
    pub maximized: bool,
}

/// A physical display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// GDI device name, e.g. `\\.\DISPLAY1`.
    ///
    /// Windows may renumber these when displays are reconnected.
    pub name: String,
    /// Hardware device ID, e.g. `MONITOR\DEL40B5\{...}\0001`.
    ///
    /// Stable across reconnects. Empty when the driver reports none.
    pub device_id: String,
    /// Human-readable model name, e.g. `Dell U2720Q`.
    pub friendly_name: String,
    /// Full monitor rectangle.
    pub bounds: Rect,
    /// Monitor rectangle minus taskbar and docked toolbars.
    pub work_area: Rect,
    /// Whether this is the primary display.
    pub primary: bool,
}

/// Platform capabilities needed to run a nudge pass.
///
/// Each platform crate (e.g. `nudge-windows`) provides its own
/// implementation. Windows are identified by raw pointer-sized handles
/// so this trait does not depend on any OS binding.
pub trait Desktop {
    /// Returns the handles of all visible top-level application windows.
    ///
    /// Every call enumerates afresh.
    fn visible_windows(&self) -> WindowResult<Vec<usize>>;

    /// Reads the window's current rectangle and maximized state.
    fn placement(&self, handle: usize) -> WindowResult<Placement>;

    /// Returns the monitor nearest to the window.
    fn monitor_for(&self, handle: usize) -> WindowResult<Monitor>;

    /// Returns whether the taskbar is set to auto-hide.
    fn taskbar_auto_hidden(&self) -> WindowResult<bool>;

    /// Returns the height of the taskbar strip in pixels.
    fn taskbar_height(&self) -> WindowResult<i32>;

    /// Moves the window's top-left corner without resizing it.
    fn move_window(&self, handle: usize, to: Point) -> WindowResult<()>;

    /// Plays the move animation on the window. Best-effort.
    fn animate(&self, handle: usize, duration_ms: u32) -> WindowResult<()>;

    /// Reads the full taskbar state in one go.
    fn taskbar(&self) -> WindowResult<TaskbarState> {
        Ok(TaskbarState {
            auto_hidden: self.taskbar_auto_hidden()?,
            height: self.taskbar_height()?,
        })
    }
}
