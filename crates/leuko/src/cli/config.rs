//! The `leuko config` command: inspect and initialize the settings file.

use std::path::Path;

use clap::{Args, Subcommand};
use leuko_core::{Config, Credential};

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (API key masked)
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with the default Gemini settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            let path = Config::default_path();
            print!("{}", render_show(&config, &path, path.exists())?);
        }

        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();
            init(&path, force)?;
            tracing::info!(path = %path.display(), "Config file written");
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Text printed by `config show`. Never contains a literal API key.
fn render_show(config: &Config, path: &Path, exists: bool) -> anyhow::Result<String> {
    let source = if exists { "file" } else { "defaults" };
    let key_status = match Credential::from_config(&config.model) {
        Some(_) => "loaded".to_string(),
        None => format!("missing (set {})", Credential::source_hint(&config.model)),
    };

    Ok(format!(
        "# {} ({source})\n# API key: {key_status}\n\n{}",
        path.display(),
        config.redacted().to_toml()?
    ))
}

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, Config::default().to_toml()?)?;
    Ok(())
}
