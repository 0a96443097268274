//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait, an OpenAI implementation, and [`complete_with_fallback`],
//! which turns a failed completion into a canned reply so the relay pipeline keeps going.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};
use tracing::{instrument, warn};

mod openai_llm;

pub use openai_llm::{OpenAILlmClient, DEFAULT_MODEL};

/// Reply sent (and remembered) in place of the model's answer when the completion call fails.
pub const FALLBACK_REPLY: &str = "The assistant did not respond.";

/// Upper bound for one completion call when the caller has no other preference.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

/// LLM client interface: request a completion from a list of messages.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages.
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Outcome of one completion attempt: the text to use, plus the error if the fallback was used.
#[derive(Debug)]
pub struct Completion {
    pub text: String,
    pub error: Option<anyhow::Error>,
}

impl Completion {
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Sends `prompt` as a single user message. On failure, or when no answer arrives within
/// `timeout`, returns [`FALLBACK_REPLY`] together with the error; the caller reports the error
/// and carries on with the fallback text.
#[instrument(skip(client, prompt), fields(prompt_len = prompt.len()))]
pub async fn complete_with_fallback(
    client: &dyn LlmClient,
    prompt: &str,
    timeout: Duration,
) -> Completion {
    let request = client.get_llm_response_with_messages(prompt::single_turn(prompt));
    let result = match tokio::time::timeout(timeout, request).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "completion timed out after {}ms",
            timeout.as_millis()
        )),
    };
    match result {
        Ok(text) => Completion { text, error: None },
        Err(e) => {
            warn!(error = %e, "Completion failed, using fallback reply");
            Completion {
                text: FALLBACK_REPLY.to_string(),
                error: Some(e.context("response was not generated")),
            }
        }
    }
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
