//! Telegram connection settings and client construction.

use anyhow::{Context, Result};

/// Minimal Telegram settings: bot token and optional Bot API base URL (e.g. a local mock server).
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"[REDACTED]")
            .field("telegram_api_url", &self.telegram_api_url)
            .finish()
    }
}

impl TelegramConfig {
    pub fn new(bot_token: String, telegram_api_url: Option<String>) -> Self {
        Self {
            bot_token,
            telegram_api_url,
        }
    }

    /// Builds the teloxide client. Fails only on an unparsable API URL.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .with_context(|| format!("Invalid Telegram API URL: {}", url))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
