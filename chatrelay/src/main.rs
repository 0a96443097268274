//! chatrelay CLI: run the bot or check its configuration.

use anyhow::Result;
use chatrelay::{run_bot, Cli, Commands, RelayConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, token } => {
            let config = RelayConfig::load(&config, token)?;
            run_bot(config).await
        }
        Commands::CheckConfig { config } => {
            let config = RelayConfig::load(&config, None)?;
            println!("{:#?}", config);
            if config.allowed_ids.is_empty() {
                println!("warning: allowed_ids is empty; the bot will ignore every message");
            }
            Ok(())
        }
    }
}
