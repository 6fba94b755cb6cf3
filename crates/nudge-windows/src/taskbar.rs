use std::ffi::c_void;
use std::mem;

use nudge_core::WindowResult;
use windows::Win32::Foundation::RECT;
use windows::Win32::UI::Shell::{ABM_GETSTATE, ABS_AUTOHIDE, APPBARDATA, SHAppBarMessage};
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SM_CYSCREEN, SPI_GETWORKAREA, SystemParametersInfoW,
};

/// Returns whether the taskbar is configured to auto-hide.
pub fn is_auto_hidden() -> bool {
    let mut data = APPBARDATA {
        cbSize: mem::size_of::<APPBARDATA>() as u32,
        ..Default::default()
    };

    // SAFETY: ABM_GETSTATE only reads cbSize from the struct.
    let state = unsafe { SHAppBarMessage(ABM_GETSTATE, &mut data) };
    state & ABS_AUTOHIDE as usize != 0
}

/// Returns the vertical space the taskbar takes on the primary monitor.
///
/// Computed as the primary screen height minus the work area height,
/// so it also covers docked toolbars. An auto-hidden taskbar reserves
/// little or nothing.
pub fn height() -> WindowResult<i32> {
    let mut work_area = RECT::default();

    // SAFETY: SPI_GETWORKAREA writes a RECT into the buffer we pass.
    unsafe {
        SystemParametersInfoW(
            SPI_GETWORKAREA,
            0,
            Some(&mut work_area as *mut RECT as *mut c_void),
            Default::default(),
        )?;
    }

    // SAFETY: GetSystemMetrics is a pure query.
    let screen_height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
    Ok(screen_height - (work_area.bottom - work_area.top))
}
