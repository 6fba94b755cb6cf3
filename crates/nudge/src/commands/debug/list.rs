#[cfg(windows)]
pub fn execute() {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
    use nudge_core::Desktop;

    let desktop = nudge_windows::Win32Desktop::new();
    let windows = match nudge_windows::enumerate_windows() {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("Error: failed to enumerate windows: {e}");
            std::process::exit(1);
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("Title"),
            Cell::new("Class"),
            Cell::new("Left").set_alignment(CellAlignment::Right),
            Cell::new("Top").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
            Cell::new("State"),
            Cell::new("Monitor"),
        ]);

    for window in &windows {
        let handle = window.handle();
        let (rect, state) = match desktop.placement(handle) {
            Ok(p) if p.maximized => (p.rect, "maximized"),
            Ok(p) => (p.rect, "normal"),
            Err(_) => (nudge_core::Rect::default(), "unreadable"),
        };
        let monitor = desktop
            .monitor_for(handle)
            .map(|m| m.name)
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new(format!("0x{handle:X}")),
            Cell::new(window.title()),
            Cell::new(window.class()),
            Cell::new(rect.left).set_alignment(CellAlignment::Right),
            Cell::new(rect.top).set_alignment(CellAlignment::Right),
            Cell::new(rect.width()).set_alignment(CellAlignment::Right),
            Cell::new(rect.height()).set_alignment(CellAlignment::Right),
            Cell::new(state),
            Cell::new(monitor),
        ]);
    }

    println!("{table}");
    println!("\n{} windows found", windows.len());
}

#[cfg(not(windows))]
pub fn execute() {
    crate::commands::unsupported("debug list");
}
