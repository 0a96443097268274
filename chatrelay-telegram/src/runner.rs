//! Long-polling loop: converts each teloxide message to a core message and hands it to a dispatcher.

use std::sync::Arc;

use anyhow::{Context, Result};
use chatrelay_core::{Dispatch, ToCoreMessage};
use teloxide::prelude::*;
use tracing::{info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Calls `getMe` to verify the token. Returns the bot's username; failure is fatal at startup.
#[instrument(skip(bot))]
pub async fn authorize(bot: &teloxide::Bot) -> Result<String> {
    let me = bot
        .get_me()
        .await
        .context("Failed to authorize with Telegram (getMe)")?;
    let username = me.user.username.clone().unwrap_or_default();
    info!(username = %username, "Authorized on account {}", username);
    Ok(username)
}

/// Runs teloxide's polling REPL until shutdown. Text messages go to `dispatcher`;
/// other updates are logged and dropped.
#[instrument(skip(bot, dispatcher))]
pub async fn run_repl(bot: teloxide::Bot, dispatcher: Arc<dyn Dispatch>) -> Result<()> {
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let dispatcher = dispatcher.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message, ignored"
                );
                return Ok(());
            }

            let dispatched = dispatcher.dispatch(core_msg);
            tracing::debug!(dispatched = dispatched, "Message handed to dispatcher");
            Ok(())
        }
    })
    .await;

    Ok(())
}
