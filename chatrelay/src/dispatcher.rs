//! Top-level coordinator: allow-list gate, per-user contexts, and one task per accepted message.

use std::sync::Arc;

use chat_context::ContextStore;
use chatrelay_core::{Dispatch, Message};
use handler_chain::HandlerChain;
use middleware::AllowList;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error_sink::ErrorSink;

/// Owns the process-wide relay state. Created once at startup and never torn down.
pub struct Dispatcher {
    allow_list: AllowList,
    contexts: Arc<ContextStore>,
    chain: HandlerChain,
    errors: ErrorSink,
}

impl Dispatcher {
    pub fn new(
        allow_list: AllowList,
        contexts: Arc<ContextStore>,
        chain: HandlerChain,
        errors: ErrorSink,
    ) -> Self {
        Self {
            allow_list,
            contexts,
            chain,
            errors,
        }
    }

    /// Starts a task running the handler chain for `message`, or returns `None` (and touches
    /// nothing) if the sender is not allow-listed. Must be called inside a tokio runtime.
    pub fn spawn(&self, message: Message) -> Option<JoinHandle<()>> {
        if !self.allow_list.is_allowed(message.user.id) {
            debug!(user_id = message.user.id, "Message from unauthorized sender dropped");
            return None;
        }

        let chain = self.chain.clone();
        let errors = self.errors.clone();
        Some(tokio::spawn(async move {
            info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                message_id = %message.id,
                "step: processing message (handler chain started)"
            );
            if let Err(e) = chain.handle(&message).await {
                errors.report(e);
            }
        }))
    }

    pub fn contexts(&self) -> &Arc<ContextStore> {
        &self.contexts
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }
}

impl Dispatch for Dispatcher {
    fn dispatch(&self, message: Message) -> bool {
        self.spawn(message).is_some()
    }
}
