use std::path::PathBuf;

use super::Config;

/// Returns the config directory: `~/.config/nudge/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("nudge"))
}

/// Returns the config file path: `~/.config/nudge/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Parses and validates config file contents.
///
/// Adjustments made by [`Config::validate`] are printed as warnings.
pub fn parse(content: &str) -> Result<Config, String> {
    let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
    for fix in config.validate() {
        eprintln!("Warning: {fix}");
    }
    Ok(config)
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; any other failure is
/// printed as a warning before falling back.
pub fn load() -> Config {
    let exists = config_path().is_some_and(|p| p.exists());
    if !exists {
        return Config::default();
    }

    match try_load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Re-reads the `[schedule] enabled` switch from disk.
///
/// A missing or unreadable file counts as enabled.
pub fn read_enabled() -> bool {
    config_path()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .is_none_or(|content| enabled_in(&content))
}

/// Returns the `[schedule] enabled` switch from config file contents.
///
/// Unparseable contents count as enabled. No validation warnings are
/// printed, so this is safe to call on every pass.
pub fn enabled_in(content: &str) -> bool {
    toml::from_str::<Config>(content).map_or(true, |c| c.schedule.enabled)
}
