//! Reply-chain decision logic: what prompt to send and how the context changes around a completion.

use tracing::debug;

use crate::context::{ConversationContext, Speaker};

/// What happens to a user's first message after a reset (a message that is not a reply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Context is cleared and stays empty; only the assistant's answer will be stored.
    #[default]
    Discard,
    /// Context is cleared and the message is stored as the first user turn.
    KeepPrompt,
}

/// Decides the prompt for an inbound message and updates `context`.
///
/// - Not a reply: the context is reset and the prompt is `text` unchanged.
/// - Reply: `text` is appended as a user turn and the prompt is the rendered context.
pub fn assemble_prompt(
    context: &mut ConversationContext,
    text: &str,
    is_reply: bool,
    policy: ResetPolicy,
) -> String {
    if !is_reply {
        context.reset();
        if policy == ResetPolicy::KeepPrompt {
            context.append(Speaker::User, text);
        }
        debug!(policy = ?policy, stored = context.len(), "Context reset by non-reply message");
        return text.to_string();
    }

    context.append(Speaker::User, text);
    let prompt = context.render();
    debug!(stored = context.len(), prompt_len = prompt.len(), "Context extended by reply");
    prompt
}

/// Stores the assistant's answer as the newest turn. Called after every completion.
pub fn record_reply(context: &mut ConversationContext, reply: &str) {
    context.append(Speaker::Assistant, reply);
}
