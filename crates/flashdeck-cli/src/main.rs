use clap::{Parser, Subcommand};
use flashdeck_core::Config;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "flashdeck-cli", version, about = "Flashdeck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive study session
    Study(commands::study::StudyArgs),
    /// Inspect decks and the review intervals
    Deck {
        #[command(subcommand)]
        action: commands::deck::DeckAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {e}; using default configuration");
            Config::default()
        }
    };
    logging::init(&config.logging.level);

    let result = match cli.command {
        Commands::Study(args) => commands::study::run(args, &config),
        Commands::Deck { action } => commands::deck::run(action, &config),
        Commands::Config { action } => commands::config::run(action, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
