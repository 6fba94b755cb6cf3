use std::mem;

use nudge_core::{Monitor, WindowResult};
use windows::Win32::Foundation::{HWND, LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    DISPLAY_DEVICEW, EnumDisplayDevicesW, EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR,
    MONITOR_DEFAULTTONEAREST, MONITORINFO, MONITORINFOEXW, MONITORINFOF_PRIMARY,
    MonitorFromWindow,
};
use windows::core::{BOOL, PCWSTR};

use crate::window::rect_from_win32;

/// Returns the monitor nearest to the given window.
///
/// Windows that straddle two displays belong to the one holding the
/// larger share of their area.
pub fn monitor_for_window(hwnd: HWND) -> WindowResult<Monitor> {
    // SAFETY: MonitorFromWindow never fails with MONITOR_DEFAULTTONEAREST.
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
    monitor_info(monitor)
}

/// Lists every connected monitor in system order.
pub fn enumerate_monitors() -> WindowResult<Vec<Monitor>> {
    let mut monitors: Vec<Monitor> = Vec::new();

    // SAFETY: EnumDisplayMonitors runs synchronously; the Vec pointer
    // passed as LPARAM outlives the call.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_callback),
            LPARAM(&mut monitors as *mut _ as isize),
        )
    };

    if !ok.as_bool() {
        return Err("Failed to enumerate monitors".into());
    }
    Ok(monitors)
}

unsafe extern "system" fn enum_monitor_callback(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<Monitor>, cast from enumerate_monitors().
    let monitors = unsafe { &mut *(lparam.0 as *mut Vec<Monitor>) };

    if let Ok(info) = monitor_info(monitor) {
        monitors.push(info);
    }

    BOOL(1)
}

/// Queries bounds, work area and device identity for a monitor handle.
fn monitor_info(monitor: HMONITOR) -> WindowResult<Monitor> {
    let mut info = MONITORINFOEXW::default();
    info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;

    // SAFETY: MONITORINFOEXW starts with a MONITORINFO and cbSize tells
    // GetMonitorInfoW it may fill the extended device name too.
    let success =
        unsafe { GetMonitorInfoW(monitor, &mut info as *mut MONITORINFOEXW as *mut MONITORINFO) };

    if !success.as_bool() {
        return Err("Failed to get monitor info".into());
    }

    let (device_id, friendly_name) = display_device(&info.szDevice).unwrap_or_default();

    Ok(Monitor {
        name: wide_to_string(&info.szDevice),
        device_id,
        friendly_name,
        bounds: rect_from_win32(info.monitorInfo.rcMonitor),
        work_area: rect_from_win32(info.monitorInfo.rcWork),
        primary: info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY != 0,
    })
}

/// Looks up the monitor attached to a GDI device name.
///
/// Returns its hardware device ID and model name, or `None` if the
/// adapter reports no monitor.
fn display_device(device_name: &[u16]) -> Option<(String, String)> {
    let mut device = DISPLAY_DEVICEW {
        cb: mem::size_of::<DISPLAY_DEVICEW>() as u32,
        ..Default::default()
    };

    // SAFETY: device_name is the NUL-terminated szDevice buffer from
    // MONITORINFOEXW, and device is a caller-owned struct with cb set.
    let found = unsafe { EnumDisplayDevicesW(PCWSTR(device_name.as_ptr()), 0, &mut device, 0) };

    if !found.as_bool() {
        return None;
    }
    Some((
        wide_to_string(&device.DeviceID),
        wide_to_string(&device.DeviceString),
    ))
}

fn wide_to_string(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}
