//! # Prompt
//!
//! Shapes conversation text into what the completion service receives.
//!
//! ## Format
//!
//! - **Turn**: `"{label}: {text}"`, one per stored utterance.
//! - **Rendered context**: turns joined by a blank line ([`TURN_SEPARATOR`]).
//! - **Request**: a single `user` message carrying the rendered text ([`single_turn`]).
//!
//! ## External interactions
//!
//! - **AI models**: Output is sent to OpenAI-compatible chat completion APIs.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Separator placed between stored turns when they are rendered into one prompt.
pub const TURN_SEPARATOR: &str = "\n\n";

/// Formats one utterance as `"{label}: {text}"`.
pub fn format_turn(label: &str, text: &str) -> String {
    format!("{}: {}", label, text)
}

/// Joins turns in order with [`TURN_SEPARATOR`]. No turns yields an empty string.
pub fn join_turns<I, T>(turns: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut out = String::new();
    for (i, turn) in turns.into_iter().enumerate() {
        if i > 0 {
            out.push_str(TURN_SEPARATOR);
        }
        out.push_str(turn.as_ref());
    }
    out
}

/// Builds the request body sent for every completion: exactly one `user` message whose
/// content is the assembled prompt. History is carried inside that text, not as extra messages.
pub fn single_turn(prompt: impl Into<String>) -> Vec<ChatMessage> {
    vec![ChatMessage::user(prompt)]
}

/// Removes a leading `"{label}: "` from a model reply.
///
/// Models fed `label: text` history sometimes echo the assistant label at the start of
/// their answer; the label is dropped before the text is shown to the user.
pub fn strip_speaker_label<'a>(reply: &'a str, label: &str) -> &'a str {
    reply
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(": "))
        .unwrap_or(reply)
}
