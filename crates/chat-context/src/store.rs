//! User id → conversation context map, fixed at startup.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::context::ConversationContext;

/// One user's context, shared between the tasks that process that user's messages.
pub type SharedContext = Arc<Mutex<ConversationContext>>;

/// Contexts for every allow-listed user. Entries are created once in [`ContextStore::new`] and
/// never added or removed afterwards; holding a user's lock serializes that user's messages.
#[derive(Debug, Default)]
pub struct ContextStore {
    contexts: HashMap<i64, SharedContext>,
}

impl ContextStore {
    /// Creates an empty context (default window) for each user id. Duplicate ids share one entry.
    pub fn new<I>(user_ids: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let contexts: HashMap<i64, SharedContext> = user_ids
            .into_iter()
            .map(|id| (id, Arc::new(Mutex::new(ConversationContext::new()))))
            .collect();
        debug!(users = contexts.len(), "Context store initialized");
        Self { contexts }
    }

    /// Returns the user's context, or `None` for users without one (not allow-listed).
    pub fn get(&self, user_id: i64) -> Option<SharedContext> {
        self.contexts.get(&user_id).cloned()
    }

    pub fn contains(&self, user_id: i64) -> bool {
        self.contexts.contains_key(&user_id)
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
