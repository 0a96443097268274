//! Relay configuration: JSON file, then environment overrides, then CLI token override.
//!
//! File keys: `bot_token`, `api_key`, `allowed_ids` (required); `model`, `openai_base_url`,
//! `telegram_api_url`, `log_file`, `remember_first_message`, `completion_timeout_secs` (optional).
//! Env overrides: `BOT_TOKEN`, `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `MODEL`, `TELEGRAM_API_URL`, `LOG_FILE`.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use chat_context::ResetPolicy;
use chatrelay_core::{RelayError, Result};
use chatrelay_telegram::TelegramConfig;
use llm_client::{OpenAILlmClient, DEFAULT_COMPLETION_TIMEOUT, DEFAULT_MODEL};
use serde::Deserialize;

const DEFAULT_LOG_FILE: &str = "logs/chatrelay.log";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_completion_timeout_secs() -> u64 {
    DEFAULT_COMPLETION_TIMEOUT.as_secs()
}

#[derive(Clone, Deserialize)]
pub struct RelayConfig {
    pub bot_token: String,
    pub api_key: String,
    pub allowed_ids: Vec<i64>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub openai_base_url: Option<String>,
    #[serde(default)]
    pub telegram_api_url: Option<String>,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// Store the first message of a new conversation as a user turn (off by default).
    #[serde(default)]
    pub remember_first_message: bool,
    /// A completion call slower than this is abandoned and answered with the fallback reply.
    #[serde(default = "default_completion_timeout_secs")]
    pub completion_timeout_secs: u64,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("bot_token", &"[REDACTED]")
            .field("api_key", &openai_client::mask_token(&self.api_key))
            .field("allowed_ids", &self.allowed_ids)
            .field("model", &self.model)
            .field("openai_base_url", &self.openai_base_url)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("log_file", &self.log_file)
            .field("remember_first_message", &self.remember_first_message)
            .field("completion_timeout_secs", &self.completion_timeout_secs)
            .finish()
    }
}

impl RelayConfig {
    /// Reads the file, applies env overrides and `token`, then validates. Any failure is fatal at startup.
    pub fn load(path: &Path, token: Option<String>) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| env::var(key).ok());
        if let Some(token) = token {
            config.bot_token = token;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            RelayError::Config(format!("error reading config {}: {}", path.display(), e))
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data)
            .map_err(|e| RelayError::Config(format!("error parsing config: {}", e)))
    }

    /// Replaces fields with values from `lookup` (normally the process environment).
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = get("BOT_TOKEN") {
            self.bot_token = v;
        }
        if let Some(v) = get("OPENAI_API_KEY") {
            self.api_key = v;
        }
        if let Some(v) = get("OPENAI_BASE_URL") {
            self.openai_base_url = Some(v);
        }
        if let Some(v) = get("MODEL") {
            self.model = v;
        }
        if let Some(v) = get("TELEGRAM_API_URL") {
            self.telegram_api_url = Some(v);
        }
        if let Some(v) = get("LOG_FILE") {
            self.log_file = v;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(RelayError::Config("bot_token is empty".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(RelayError::Config("api_key is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(RelayError::Config("model is empty".to_string()));
        }
        if self.completion_timeout_secs == 0 {
            return Err(RelayError::Config(
                "completion_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn reset_policy(&self) -> ResetPolicy {
        if self.remember_first_message {
            ResetPolicy::KeepPrompt
        } else {
            ResetPolicy::Discard
        }
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig::new(self.bot_token.clone(), self.telegram_api_url.clone())
    }

    pub fn llm_client(&self) -> OpenAILlmClient {
        let client = match &self.openai_base_url {
            Some(url) => OpenAILlmClient::with_base_url(self.api_key.clone(), url.clone()),
            None => OpenAILlmClient::new(self.api_key.clone()),
        };
        client.with_model(self.model.clone())
    }
}
