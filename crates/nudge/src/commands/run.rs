use nudge_core::{Config, config};

pub fn execute() {
    let config = config::load();
    nudge_core::log::init(&config.logging, true);
    run(&config);
}

#[cfg(windows)]
fn run(config: &Config) {
    println!(
        "Nudging windows every {} ms. Press Ctrl+C to stop.",
        config.schedule.interval_ms
    );

    if let Err(e) = nudge_windows::daemon::run(config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
fn run(_config: &Config) {
    super::unsupported("run");
}
