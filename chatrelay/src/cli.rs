//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chatrelay")]
#[command(about = "Telegram ↔ OpenAI chat relay bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config file plus env overrides; --token overrides bot_token).
    Run {
        #[arg(short, long, env = "CONFIG_FILE", default_value = "config.json")]
        config: PathBuf,
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Load and validate the config, then print it with secrets redacted.
    CheckConfig {
        #[arg(short, long, env = "CONFIG_FILE", default_value = "config.json")]
        config: PathBuf,
    },
}
