use std::mem;

use nudge_core::{Placement, Point, Rect, WindowResult};

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    AW_CENTER, AnimateWindow, GetWindowPlacement, GetWindowRect, GetWindowTextLengthW,
    GetWindowTextW, RealGetWindowClassW, SW_SHOWMAXIMIZED, SWP_NOACTIVATE, SWP_NOSIZE,
    SWP_NOZORDER, SetWindowPos, WINDOWPLACEMENT,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// Metadata is queried from the OS on demand; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized integer).
    ///
    /// This is how `Desktop` handles map back to real windows.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the handle as a plain integer.
    pub fn handle(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// Returns the window title, or an empty string if it has none.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW only read
        // window text.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied as usize])
        }
    }

    /// Returns the window class name.
    pub fn class(&self) -> String {
        // 256 is the maximum class name length in Win32.
        let mut buffer = [0u16; 256];
        // SAFETY: RealGetWindowClassW writes at most buffer.len() chars.
        let length = unsafe { RealGetWindowClassW(self.hwnd, &mut buffer) };
        String::from_utf16_lossy(&buffer[..length as usize])
    }

    /// Reads the window rectangle and maximized state.
    ///
    /// The rectangle comes from `GetWindowRect` (screen coordinates)
    /// rather than `rcNormalPosition` (workspace coordinates) so it
    /// lines up with what `SetWindowPos` expects.
    pub fn placement(&self) -> WindowResult<Placement> {
        let mut wp = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        let mut rect = RECT::default();

        // SAFETY: Both calls fill caller-owned structs for a valid HWND.
        unsafe {
            GetWindowPlacement(self.hwnd, &mut wp)?;
            GetWindowRect(self.hwnd, &mut rect)?;
        }

        Ok(Placement {
            rect: rect_from_win32(rect),
            maximized: wp.showCmd == SW_SHOWMAXIMIZED.0 as u32,
        })
    }

    /// Moves the window's top-left corner, keeping size and z-order.
    pub fn move_to(&self, to: Point) -> WindowResult<()> {
        let flags = SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE;

        // SAFETY: SetWindowPos with a valid HWND is safe.
        unsafe { SetWindowPos(self.hwnd, None, to.x, to.y, 0, 0, flags)? };
        Ok(())
    }

    /// Plays a centered reveal animation on the window.
    ///
    /// Windows often refuses this for windows that are already shown;
    /// callers treat failure as cosmetic.
    pub fn animate(&self, duration_ms: u32) -> WindowResult<()> {
        // SAFETY: AnimateWindow only affects the given HWND.
        unsafe { AnimateWindow(self.hwnd, duration_ms, AW_CENTER)? };
        Ok(())
    }

    /// Returns whether this looks like a real application window.
    ///
    /// Checks for a caption bar (`WS_CAPTION`) and rejects tool windows
    /// (`WS_EX_TOOLWINDOW`), which filters out tooltips, floating
    /// toolbars and other helper surfaces.
    pub fn is_app_window(&self) -> bool {
        use windows::Win32::UI::WindowsAndMessaging::{
            GWL_EXSTYLE, GWL_STYLE, GetWindowLongPtrW, WS_CAPTION, WS_EX_TOOLWINDOW,
        };

        // SAFETY: GetWindowLongPtrW only reads style bits and returns 0
        // for an invalid HWND.
        unsafe {
            let style = GetWindowLongPtrW(self.hwnd, GWL_STYLE) as u32;
            let ex_style = GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) as u32;

            let has_caption = (style & WS_CAPTION.0) == WS_CAPTION.0;
            let is_tool = (ex_style & WS_EX_TOOLWINDOW.0) == WS_EX_TOOLWINDOW.0;

            has_caption && !is_tool
        }
    }
}

pub(crate) fn rect_from_win32(rc: RECT) -> Rect {
    Rect::new(rc.left, rc.top, rc.right, rc.bottom)
}
