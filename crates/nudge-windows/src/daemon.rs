use std::sync::mpsc;

use nudge_core::pass::{PassOptions, PassReport, run_pass};
use nudge_core::{Config, Scheduler, WindowResult, log_debug, log_info};

use crate::ctrl_c;
use crate::desktop::Win32Desktop;

/// Runs passes at the configured interval until Ctrl+C.
///
/// The first pass runs immediately. Before each pass the `[schedule]
/// enabled` switch is re-read from disk, and ticks are skipped while it
/// is off. Individual window failures are logged by the pass and never
/// end the loop; only failing to install the Ctrl+C handler is returned
/// as an error.
pub fn run(config: &Config) -> WindowResult<()> {
    let (stop_tx, stop_rx) = mpsc::channel();
    ctrl_c::set_handler(stop_tx)?;

    let desktop = Win32Desktop::new();
    let options = PassOptions::from_config(config);
    let scheduler = Scheduler::new(config.schedule.interval());
    let mut rng = rand::rng();

    log_info!("Nudge started (PID: {})", std::process::id());
    log_info!(
        "Config: movement(max_x={}, max_y={}), interval={}ms, animation={}, disabled_monitors={:?}",
        options.limits.max_x,
        options.limits.max_y,
        config.schedule.interval_ms,
        options.animation.enabled,
        options.monitors.disabled
    );

    let mut pass = 0u64;
    let mut paused = false;
    let ticks = scheduler.run(&stop_rx, || {
        if !nudge_core::config::read_enabled() {
            if !paused {
                log_info!("Paused by [schedule] enabled = false");
                paused = true;
            }
            log_debug!("Skipping pass while paused");
            return;
        }
        if paused {
            log_info!("Resumed");
            paused = false;
        }

        pass += 1;
        let report = run_pass(&desktop, &options, &mut rng);
        log_info!("Pass {pass}: {report}");
    });

    log_info!("Nudge stopped after {pass} passes ({ticks} ticks)");
    Ok(())
}

/// Runs a single pass over the live desktop.
pub fn run_once(config: &Config) -> PassReport {
    let desktop = Win32Desktop::new();
    let options = PassOptions::from_config(config);
    run_pass(&desktop, &options, &mut rand::rng())
}
