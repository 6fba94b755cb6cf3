#[cfg(windows)]
pub fn execute() {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Cell, ContentArrangement, Table};

    let config = nudge_core::config::load();
    let monitors = match nudge_windows::monitor::enumerate_monitors() {
        Ok(monitors) => monitors,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Device"),
            Cell::new("Name"),
            Cell::new("Device ID"),
            Cell::new("Bounds"),
            Cell::new("Work area"),
            Cell::new("Primary"),
            Cell::new("Enabled"),
        ]);

    for monitor in &monitors {
        table.add_row(vec![
            Cell::new(&monitor.name),
            Cell::new(&monitor.friendly_name),
            Cell::new(&monitor.device_id),
            Cell::new(monitor.bounds),
            Cell::new(monitor.work_area),
            Cell::new(if monitor.primary { "yes" } else { "" }),
            Cell::new(if config.monitors.is_enabled(monitor) {
                "yes"
            } else {
                "no"
            }),
        ]);
    }

    let offline = config.monitors.offline(&monitors);
    for entry in &offline {
        table.add_row(vec![
            Cell::new(""),
            Cell::new("(offline)"),
            Cell::new(entry),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            Cell::new("no"),
        ]);
    }

    println!("{table}");
    println!(
        "\n{} monitors found, {} disabled entries offline",
        monitors.len(),
        offline.len()
    );
}

#[cfg(not(windows))]
pub fn execute() {
    super::unsupported("monitors");
}
