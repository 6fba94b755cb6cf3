use nudge_core::{Config, PassReport, config};

pub fn execute(json: bool) {
    let config = config::load();
    nudge_core::log::init(&config.logging, true);

    let report = run(&config);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: could not serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("Pass complete: {report}");
    }

    if report.enumeration_failed {
        std::process::exit(1);
    }
}

#[cfg(windows)]
fn run(config: &Config) -> PassReport {
    nudge_windows::daemon::run_once(config)
}

#[cfg(not(windows))]
fn run(_config: &Config) -> PassReport {
    super::unsupported("once");
}
