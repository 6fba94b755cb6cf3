use nudge_core::{Desktop, Monitor, Placement, Point, WindowResult};
use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

use crate::enumerate::enumerate_windows;
use crate::window::Window;
use crate::{monitor, taskbar};

/// The live Windows desktop.
#[derive(Debug, Clone, Copy)]
pub struct Win32Desktop {
    _private: (),
}

impl Win32Desktop {
    /// Opens the desktop, declaring this process per-monitor DPI aware.
    ///
    /// Without DPI awareness Windows scales coordinates by the primary
    /// monitor's DPI, which puts windows in the wrong place on mixed-DPI
    /// setups. Failure (e.g. already set via manifest) is ignored.
    pub fn new() -> Self {
        // SAFETY: SetProcessDpiAwarenessContext is safe to call at startup.
        unsafe {
            let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
        }
        Self { _private: () }
    }
}

impl Default for Win32Desktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Desktop for Win32Desktop {
    fn visible_windows(&self) -> WindowResult<Vec<usize>> {
        Ok(enumerate_windows()?.iter().map(Window::handle).collect())
    }

    fn placement(&self, handle: usize) -> WindowResult<Placement> {
        Window::from_raw(handle).placement()
    }

    fn monitor_for(&self, handle: usize) -> WindowResult<Monitor> {
        monitor::monitor_for_window(Window::from_raw(handle).hwnd())
    }

    fn taskbar_auto_hidden(&self) -> WindowResult<bool> {
        Ok(taskbar::is_auto_hidden())
    }

    fn taskbar_height(&self) -> WindowResult<i32> {
        taskbar::height()
    }

    fn move_window(&self, handle: usize, to: Point) -> WindowResult<()> {
        Window::from_raw(handle).move_to(to)
    }

    fn animate(&self, handle: usize, duration_ms: u32) -> WindowResult<()> {
        Window::from_raw(handle).animate(duration_ms)
    }
}
