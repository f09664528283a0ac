//! Command-line interface and command routing

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::tasklist;
use crate::core::vault::Vault;

/// Task list generator for markdown note vaults.
#[derive(Parser, Debug)]
#[command(name = "tasklister")]
#[command(version, about = "Task list generator for markdown note vaults")]
pub struct Cli {
    /// Path to the vault root
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub vault: PathBuf,

    /// Override the settings file location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the task list note from the tasks folder
    Update,

    /// Read or write settings
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Settings subcommand
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a setting value
    Get {
        /// Setting name (tasks_root or output_note)
        key: String,
    },

    /// Set a setting value and persist it
    Set {
        /// Setting name (tasks_root or output_note)
        key: String,
        /// New value
        value: String,
    },

    /// List all settings
    List,

    /// Print the settings file location
    Path,
}

/// Execute the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Settings::default_path()?,
    };

    match cli.command {
        Commands::Update => {
            let settings = Settings::load(&config_path)?;
            let vault = Vault::open(&cli.vault)?;
            let output = tasklist::update_task_list(&vault, &settings)?;
            println!("Updated {}", output.display());
        }
        Commands::Config(config) => match config.command {
            ConfigSubcommand::Get { key } => {
                let settings = Settings::load(&config_path)?;
                match settings.get(&key) {
                    Some(value) => println!("{value}"),
                    None => anyhow::bail!("Unknown setting: {key}"),
                }
            }
            ConfigSubcommand::Set { key, value } => {
                let mut settings = Settings::load(&config_path)?;
                settings.set(&key, value)?;
                settings.save(&config_path)?;
            }
            ConfigSubcommand::List => {
                let settings = Settings::load(&config_path)?;
                for (key, value) in settings.entries() {
                    println!("{key} = {value}");
                }
            }
            ConfigSubcommand::Path => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
