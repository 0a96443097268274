//! Core types: user, chat, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound message with sender, chat, text, and the replied-to message id if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Set when the user replied to an earlier message; drives conversation continuation.
    pub reply_to_message_id: Option<String>,
}

impl Message {
    /// True when this message continues a reply chain.
    pub fn is_reply(&self) -> bool {
        self.reply_to_message_id.is_some()
    }

    /// Private chat with the sender. Conversation context is per user, so answers go here.
    pub fn sender_chat(&self) -> Chat {
        Chat {
            id: self.user.id,
            chat_type: "private".to_string(),
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the text that was sent to the user.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Receives inbound messages from a transport loop. Implementations decide whether to process
/// the message and must return quickly; work happens on spawned tasks.
pub trait Dispatch: Send + Sync {
    /// Returns true if a processing task was started for the message.
    fn dispatch(&self, message: Message) -> bool;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(reply_to: Option<&str>) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 7,
                chat_type: "private".to_string(),
            },
            content: "hi".to_string(),
            created_at: Utc::now(),
            reply_to_message_id: reply_to.map(String::from),
        }
    }

    #[test]
    fn test_is_reply() {
        assert!(!message(None).is_reply());
        assert!(message(Some("42")).is_reply());
    }

    #[test]
    fn test_sender_chat_uses_user_id() {
        let mut msg = message(None);
        msg.chat = Chat {
            id: -555,
            chat_type: "group".to_string(),
        };
        let chat = msg.sender_chat();
        assert_eq!(chat.id, 7);
        assert_eq!(chat.chat_type, "private");
    }
}
