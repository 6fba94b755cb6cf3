use nudge_core::config;

/// Creates the default configuration file at `~/.config/nudge/config.toml`.
///
/// An existing file is never overwritten.
pub fn execute() {
    let Some(dir) = config::config_dir() else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error: could not create {}: {e}", dir.display());
        std::process::exit(1);
    }

    let path = dir.join("config.toml");
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(&path, config::template::generate_config()) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => {
            eprintln!("Error: could not write {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}
