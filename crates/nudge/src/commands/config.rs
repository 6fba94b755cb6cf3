use nudge_core::config;

/// Prints the configuration a run would use, after defaults and clamping.
pub fn execute() {
    let source = match config::config_path() {
        Some(path) if path.exists() => path.display().to_string(),
        _ => "built-in defaults".to_string(),
    };
    let config = config::load();

    match toml::to_string_pretty(&config) {
        Ok(s) => {
            println!("# Source: {source}\n");
            print!("{s}");
        }
        Err(e) => {
            eprintln!("Error: could not serialize config: {e}");
            std::process::exit(1);
        }
    }
}
