//! Outbound side of the relay.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in chatrelay-telegram.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Sends text back to users. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends `text` privately to the sender of `message`, even when it arrived in a group.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.sender_chat(), text).await
    }
}
