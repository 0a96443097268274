//! The per-message pipeline: assemble prompt → complete → deliver → remember the answer.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chat_context::{assemble_prompt, record_reply, ContextStore, ResetPolicy, Speaker};
use chatrelay_core::{Bot, Handler, HandlerError, HandlerResponse, Message, RelayError, Result};
use llm_client::{complete_with_fallback, LlmClient};
use tracing::{info, instrument, warn};

use crate::error_sink::ErrorSink;

/// Answers every message it sees, using and updating the sender's conversation context.
///
/// The sender's context lock is held for the whole pipeline, so messages from one user are
/// handled strictly one after another while different users proceed in parallel. The
/// completion call is bounded by `completion_timeout` so a stalled request cannot hold the
/// lock forever.
pub struct RelayHandler {
    contexts: Arc<ContextStore>,
    llm: Arc<dyn LlmClient>,
    bot: Arc<dyn Bot>,
    errors: ErrorSink,
    reset_policy: ResetPolicy,
    completion_timeout: Duration,
}

impl RelayHandler {
    pub fn new(
        contexts: Arc<ContextStore>,
        llm: Arc<dyn LlmClient>,
        bot: Arc<dyn Bot>,
        errors: ErrorSink,
        reset_policy: ResetPolicy,
        completion_timeout: Duration,
    ) -> Self {
        Self {
            contexts,
            llm,
            bot,
            errors,
            reset_policy,
            completion_timeout,
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, is_reply = message.is_reply()))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let context = self
            .contexts
            .get(message.user.id)
            .ok_or(HandlerError::MissingContext(message.user.id))?;
        let mut context = context.lock().await;

        let request_text = assemble_prompt(
            &mut context,
            &message.content,
            message.is_reply(),
            self.reset_policy,
        );
        info!(prompt_len = request_text.len(), stored = context.len(), "Prompt assembled");

        let completion =
            complete_with_fallback(self.llm.as_ref(), &request_text, self.completion_timeout)
                .await;
        if let Some(e) = &completion.error {
            self.errors.report(RelayError::Completion(format!(
                "request was not processed: {:#}",
                e
            )));
        }

        let outgoing = prompt::strip_speaker_label(&completion.text, Speaker::Assistant.label());
        let delivered = match self.bot.reply_to(message, outgoing).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Reply not delivered");
                self.errors
                    .report(RelayError::Delivery(format!("response was not sent: {}", e)));
                false
            }
        };

        record_reply(&mut context, &completion.text);
        info!(
            reply_len = outgoing.len(),
            fallback = completion.is_fallback(),
            delivered = delivered,
            "Reply recorded"
        );

        if delivered {
            Ok(HandlerResponse::Reply(outgoing.to_string()))
        } else {
            Ok(HandlerResponse::Stop)
        }
    }
}
