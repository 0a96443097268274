//! Static set of user ids permitted to talk to the bot.

use std::collections::HashSet;

use tracing::{debug, warn};

/// Authorized sender ids, fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    ids: HashSet<i64>,
}

impl AllowList {
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let ids: HashSet<i64> = ids.into_iter().collect();
        if ids.is_empty() {
            warn!("Allow-list is empty; every message will be ignored");
        }
        Self { ids }
    }

    /// True if `user_id` may use the bot.
    pub fn is_allowed(&self, user_id: i64) -> bool {
        let allowed = self.ids.contains(&user_id);
        if !allowed {
            debug!(user_id = user_id, "Sender not in allow-list");
        }
        allowed
    }

    /// Allowed ids in ascending order.
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
