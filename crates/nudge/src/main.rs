mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nudge",
    version,
    about = "Keeps desktop windows drifting to prevent screen burn-in"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nudge windows now and every interval until Ctrl+C
    Run,
    /// Nudge every window once and exit
    Once {
        /// Print the pass report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create the default configuration file
    Init,
    /// Print the effective configuration
    Config,
    /// List connected monitors
    Monitors,
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
}

#[derive(Subcommand)]
enum DebugCommands {
    /// List all windows a pass would visit
    List,
    /// Run the placement planner on a made-up window
    Plan(commands::debug::plan::PlanArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => commands::run::execute(),
        Commands::Once { json } => commands::once::execute(json),
        Commands::Init => commands::init::execute(),
        Commands::Config => commands::config::execute(),
        Commands::Monitors => commands::monitors::execute(),
        Commands::Debug { command } => match command {
            DebugCommands::List => commands::debug::list::execute(),
            DebugCommands::Plan(args) => commands::debug::plan::execute(&args),
        },
    }
}
