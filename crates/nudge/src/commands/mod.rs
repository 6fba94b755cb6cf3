pub mod config;
pub mod debug;
pub mod init;
pub mod monitors;
pub mod once;
pub mod run;

/// Exits with an error for commands that need a live Windows desktop.
#[cfg(not(windows))]
pub(crate) fn unsupported(command: &str) -> ! {
    eprintln!("Error: 'nudge {command}' requires Windows.");
    std::process::exit(1);
}
