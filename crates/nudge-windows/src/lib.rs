//! Windows platform implementation for Nudge.
//!
//! Everything here wraps Win32 calls; on other targets the crate is empty.
#![cfg(windows)]

/// Ctrl+C handling via `SetConsoleCtrlHandler`.
pub mod ctrl_c;

/// Foreground run loop.
pub mod daemon;

/// `Desktop` implementation backed by Win32.
pub mod desktop;

/// Win32 window enumeration.
pub mod enumerate;

/// Monitor queries.
pub mod monitor;

/// Taskbar auto-hide state and height.
pub mod taskbar;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use desktop::Win32Desktop;
pub use enumerate::enumerate_windows;
pub use window::Window;
