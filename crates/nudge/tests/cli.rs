use std::process::Command;

fn nudge(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_nudge"))
        .args(args)
        .output()
        .expect("failed to execute nudge")
}

#[test]
fn help_exits_successfully() {
    // Act
    let output = nudge(&["--help"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("burn-in"));
}

#[test]
fn version_exits_successfully() {
    // Act
    let output = nudge(&["--version"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nudge"));
}

#[test]
fn debug_plan_pins_full_width_window_to_monitor_edge() {
    // Arrange: a window as wide as the monitor has no horizontal room.
    let args = [
        "debug", "plan", "--left", "0", "--top", "100", "--right", "1920", "--bottom", "200",
        "--seed", "3",
    ];

    // Act
    let output = nudge(&args);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Radius   ±0 x, ±50 y"));
    assert!(stdout.contains("Planned  (0, "));
}

#[test]
fn debug_plan_keeps_window_above_visible_taskbar() {
    // Arrange
    let args = [
        "debug",
        "plan",
        "--left",
        "100",
        "--top",
        "980",
        "--right",
        "300",
        "--bottom",
        "1080",
        "--max-x",
        "0",
        "--max-y",
        "0",
        "--taskbar-height",
        "40",
    ];

    // Act
    let output = nudge(&args);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Planned  (100, 940)"), "{stdout}");
}

#[test]
fn debug_plan_accepts_monitor_left_of_primary() {
    // Act
    let output = nudge(&[
        "debug",
        "plan",
        "--left",
        "-1800",
        "--top",
        "100",
        "--right",
        "-1600",
        "--bottom",
        "200",
        "--monitor",
        "-1920,0,0,1080",
        "--samples",
        "5",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Planned").count(), 5);
}

#[test]
fn debug_plan_handles_edges_at_end_of_coordinate_range() {
    // Act
    let output = nudge(&[
        "debug",
        "plan",
        "--left",
        "2147483637",
        "--top",
        "0",
        "--right",
        "2147483647",
        "--bottom",
        "100",
        "--monitor",
        "0,0,2147483647,1080",
        "--seed",
        "1",
    ]);

    // Assert
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "{stderr}");
}

#[test]
fn debug_plan_rejects_inverted_window() {
    // Act
    let output = nudge(&[
        "debug", "plan", "--left", "300", "--top", "0", "--right", "100", "--bottom", "100",
    ]);

    // Assert
    assert!(!output.status.success());
}

#[test]
fn config_prints_every_section() {
    // Act
    let output = nudge(&["config"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[movement]"));
    assert!(stdout.contains("interval_ms"));
}

#[cfg(not(windows))]
#[test]
fn desktop_commands_require_windows() {
    let cases: [&[&str]; 4] = [&["once"], &["run"], &["monitors"], &["debug", "list"]];

    for args in cases {
        // Act
        let output = nudge(args);

        // Assert
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("requires Windows"), "{stderr}");
    }
}
