//! Process entry: logging, Telegram authorization, error logger, dispatcher, polling loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use chatrelay_core::init_tracing;
use chatrelay_telegram::{authorize, run_repl, TelegramBotAdapter};
use tracing::{info, instrument};

use crate::components::build_dispatcher;
use crate::config::RelayConfig;
use crate::error_sink::{error_channel, spawn_error_logger};

/// Runs the bot until the polling loop exits. Startup failures are returned as errors.
#[instrument(skip(config))]
pub async fn run_bot(config: RelayConfig) -> Result<()> {
    init_tracing(&config.log_file).context("Failed to initialize logging")?;
    info!(config = ?config, "Starting chatrelay");

    let telegram = config.telegram().build_bot()?;
    authorize(&telegram).await?;

    let (errors, rx) = error_channel();
    // Lives for the whole process: the dispatcher keeps a sender until the loop ends.
    let _error_logger = spawn_error_logger(rx);

    let llm = Arc::new(config.llm_client());
    info!(model = %llm.model(), "Completion client ready");
    let bot = Arc::new(TelegramBotAdapter::new(telegram.clone()));

    let dispatcher = build_dispatcher(&config, llm, bot, errors);
    info!(
        allowed_users = dispatcher.allow_list().len(),
        "Dispatcher ready, starting polling"
    );

    run_repl(telegram, Arc::new(dispatcher)).await
}
