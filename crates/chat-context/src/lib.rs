//! # chat-context
//!
//! Rolling conversation memory for each authorized user.
//!
//! - [`ConversationContext`]: bounded FIFO of `"label: text"` turns, rendered into one prompt.
//! - [`ContextStore`]: user id → context map, built once from the allow-list; each context sits
//!   behind its own async mutex so one user's messages are processed one at a time.
//! - [`assemble_prompt`] / [`record_reply`]: reply-chain decision logic around a completion call.

mod assembly;
mod context;
mod store;

pub use assembly::{assemble_prompt, record_reply, ResetPolicy};
pub use context::{ConversationContext, Speaker, MEMORY_WINDOW};
pub use store::{ContextStore, SharedContext};
