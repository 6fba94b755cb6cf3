use super::{Config, MAX_INTERVAL_MS, MIN_INTERVAL_MS};

/// Generates the default `config.toml` with comments explaining every
/// option.
pub fn generate_config() -> String {
    let d = Config::default();

    format!(
        r#"# Nudge configuration
#
# Every section is optional. Missing values use the defaults shown here.

[movement]
# Largest horizontal and vertical move per pass, in pixels (minimum 1).
# Windows close to the size of their monitor move less.
max_x = {max_x}
max_y = {max_y}

[schedule]
# Set to false to pause. 'nudge run' checks this before every pass.
enabled = {sched_enabled}
# Milliseconds between passes ({min_interval} to {max_interval}).
interval_ms = {interval}

[animation]
# Play the window animation after each move.
enabled = {anim_enabled}
duration_ms = {anim_duration}

[monitors]
# Monitors whose windows are never moved, by device ID or device name.
# Device IDs survive reconnects; names like "\\\\.\\DISPLAY2" may change.
# Run 'nudge monitors' to list both.
disabled = []

[logging]
# Write a log file to ~/.config/nudge/logs/nudge.log.
enabled = {log_enabled}
# "debug", "info", "warn", or "error".
level = "{log_level}"
# Rotate the log file after this many megabytes.
max_file_mb = {log_max}
"#,
        max_x = d.movement.max_x,
        max_y = d.movement.max_y,
        min_interval = MIN_INTERVAL_MS,
        max_interval = MAX_INTERVAL_MS,
        sched_enabled = d.schedule.enabled,
        interval = d.schedule.interval_ms,
        anim_enabled = d.animation.enabled,
        anim_duration = d.animation.duration_ms,
        log_enabled = d.logging.enabled,
        log_level = d.logging.level,
        log_max = d.logging.max_file_mb,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        // Arrange
        let content = generate_config();

        // Act
        let config: Config = toml::from_str(&content).unwrap();

        // Assert
        assert_eq!(config, Config::default());
    }

    #[test]
    fn template_documents_every_section() {
        let content = generate_config();

        for section in [
            "[movement]",
            "[schedule]",
            "[animation]",
            "[monitors]",
            "[logging]",
        ] {
            assert!(content.contains(section), "missing {section}");
        }
    }
}
