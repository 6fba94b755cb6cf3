mod loader;
pub mod template;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Monitor;
use crate::log::LogConfig;
use crate::planner::MovementLimits;

pub use loader::{config_dir, config_path, enabled_in, load, parse, read_enabled, try_load};

/// Shortest allowed interval between passes (1 second).
pub const MIN_INTERVAL_MS: u64 = 1_000;

/// Longest allowed interval between passes (30 minutes).
pub const MAX_INTERVAL_MS: u64 = 30 * 60 * 1_000;

/// Smallest allowed movement limit, in pixels.
pub const MIN_DISTANCE: i32 = 1;

/// Top-level configuration for Nudge.
///
/// Loaded from `~/.config/nudge/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How far windows may move per pass.
    pub movement: MovementLimits,
    /// How often passes run.
    pub schedule: ScheduleConfig,
    /// Post-move window animation.
    pub animation: AnimationConfig,
    /// Per-monitor opt-out.
    pub monitors: MonitorConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Pass timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Pause switch. A running loop re-reads it before every pass.
    pub enabled: bool,
    /// Milliseconds between passes.
    pub interval_ms: u64,
}

/// Animation played after each move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    /// Animation length in milliseconds.
    pub duration_ms: u32,
}

/// Monitors excluded from nudging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Device IDs (e.g. `MONITOR\DEL40B5\{...}\0001`) or device names
    /// (e.g. `\\.\DISPLAY2`) whose windows stay put.
    pub disabled: Vec<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 2_000,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 4_000,
        }
    }
}

impl ScheduleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl MonitorConfig {
    /// Returns whether windows on `monitor` may be moved.
    ///
    /// An entry matches the monitor's device ID or its device name,
    /// compared case-insensitively.
    pub fn is_enabled(&self, monitor: &Monitor) -> bool {
        !self.disabled.iter().any(|entry| matches_monitor(entry, monitor))
    }

    /// Returns disabled entries that match none of the `connected`
    /// monitors, in configuration order.
    pub fn offline<'a>(&'a self, connected: &[Monitor]) -> Vec<&'a str> {
        self.disabled
            .iter()
            .filter(|entry| !connected.iter().any(|m| matches_monitor(entry, m)))
            .map(String::as_str)
            .collect()
    }
}

fn matches_monitor(entry: &str, monitor: &Monitor) -> bool {
    (!monitor.device_id.is_empty() && entry.eq_ignore_ascii_case(&monitor.device_id))
        || entry.eq_ignore_ascii_case(&monitor.name)
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// Returns a description of every value that was changed, so callers
    /// can tell the user their file was adjusted.
    pub fn validate(&mut self) -> Vec<String> {
        let mut fixes = Vec::new();

        let interval = self
            .schedule
            .interval_ms
            .clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        if interval != self.schedule.interval_ms {
            fixes.push(format!(
                "schedule.interval_ms {} is out of range, using {interval}",
                self.schedule.interval_ms
            ));
            self.schedule.interval_ms = interval;
        }

        for (name, value) in [
            ("movement.max_x", &mut self.movement.max_x),
            ("movement.max_y", &mut self.movement.max_y),
        ] {
            if *value < MIN_DISTANCE {
                fixes.push(format!("{name} {value} is too low, using {MIN_DISTANCE}"));
                *value = MIN_DISTANCE;
            }
        }

        fixes
    }
}
