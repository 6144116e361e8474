//! Leuko CLI - classify white blood cell microscope images with a hosted
//! multimodal model.
//!
//! # Usage
//!
//! ```bash
//! # Guided session: choose an image, preview it, submit it
//! leuko
//!
//! # Classify a single image and print the model's answer
//! leuko classify cell.jpg
//!
//! # View configuration
//! leuko config show
//! ```

use clap::{Parser, Subcommand};
use leuko_core::{Config, Credential};

mod cli;
mod logging;

/// Leuko - white blood cell classification with Gemini.
#[derive(Parser, Debug)]
#[command(name = "leuko")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify one image and print the model's answer
    Classify(cli::classify::ClassifyArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A .env file next to the working directory may carry the API key.
    let dotenv_path = dotenv::dotenv().ok();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `leuko config path`."
            );
            Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Leuko v{}", leuko_core::VERSION);
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let credential = Credential::from_config(&config.model);
    if credential.is_none() {
        tracing::warn!(
            "No API key found; set {} to enable classification",
            Credential::source_hint(&config.model)
        );
    }

    match cli.command {
        Some(Commands::Classify(args)) => cli::classify::execute(args, &config, credential).await,
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        None => {
            if !console::user_attended_stderr() {
                anyhow::bail!(
                    "Interactive mode needs a terminal. Use `leuko classify <IMAGE>` instead."
                );
            }
            cli::interactive::run(&config, credential).await
        }
    }
}
