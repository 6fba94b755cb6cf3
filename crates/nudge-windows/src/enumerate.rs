use nudge_core::WindowResult;

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, IsIconic, IsWindowVisible};
use windows::core::BOOL;

use crate::window::Window;

/// Enumerates all visible, non-minimized, top-level application windows.
///
/// Each call walks the live window list again, so the result reflects
/// the desktop at call time.
pub fn enumerate_windows() -> WindowResult<Vec<Window>> {
    let mut windows: Vec<Window> = Vec::new();

    // SAFETY: EnumWindows runs synchronously and calls our callback for
    // each top-level window. The Vec pointer passed as LPARAM outlives
    // the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )?;
    }

    Ok(windows)
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<Window>, cast from enumerate_windows().
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };

    if should_include_window(hwnd) {
        windows.push(Window::new(hwnd));
    }

    BOOL(1)
}

/// Keeps visible, non-minimized windows that look like real applications.
///
/// Minimized windows are skipped because moving them would only shift
/// their restore position, not anything on screen.
fn should_include_window(hwnd: HWND) -> bool {
    // SAFETY: Simple query functions that read window state.
    unsafe {
        if !IsWindowVisible(hwnd).as_bool() {
            return false;
        }
        if IsIconic(hwnd).as_bool() {
            return false;
        }
    }

    Window::new(hwnd).is_app_window()
}
