//! Bounded, ordered per-user utterance buffer.

use std::collections::VecDeque;

/// Maximum number of stored turns per user.
pub const MEMORY_WINDOW: usize = 6;

/// Who produced a stored turn. The label is what the model sees in the rendered prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "AI assistant",
        }
    }
}

/// Recent turns of one user's conversation, oldest first, never longer than `window`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationContext {
    entries: VecDeque<String>,
    window: usize,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationContext {
    /// Empty context with the default [`MEMORY_WINDOW`].
    pub fn new() -> Self {
        Self::with_window(MEMORY_WINDOW)
    }

    /// Empty context holding at most `window` turns.
    pub fn with_window(window: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(window + 1),
            window,
        }
    }

    /// Stores `"{label}: {text}"` and evicts the oldest turns until the window is respected.
    pub fn append(&mut self, speaker: Speaker, text: &str) {
        self.entries
            .push_back(prompt::format_turn(speaker.label(), text));
        while self.entries.len() > self.window {
            self.entries.pop_front();
        }
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// All turns joined by a blank line, in insertion order. Empty context renders to `""`.
    pub fn render(&self) -> String {
        prompt::join_turns(&self.entries)
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_labels() {
        assert_eq!(Speaker::User.label(), "user");
        assert_eq!(Speaker::Assistant.label(), "AI assistant");
    }

    #[test]
    fn test_new_context_is_empty_with_default_window() {
        let ctx = ConversationContext::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.window(), MEMORY_WINDOW);
        assert_eq!(ctx.last(), None);
    }

    #[test]
    fn test_append_formats_label_and_text() {
        let mut ctx = ConversationContext::new();
        ctx.append(Speaker::User, "hello");
        assert_eq!(ctx.last(), Some("user: hello"));
    }

    #[test]
    fn test_reset_clears() {
        let mut ctx = ConversationContext::new();
        ctx.append(Speaker::User, "a");
        ctx.append(Speaker::Assistant, "b");
        ctx.reset();
        assert!(ctx.is_empty());
        assert_eq!(ctx.render(), "");
    }

    #[test]
    fn test_zero_window_stores_nothing() {
        let mut ctx = ConversationContext::with_window(0);
        ctx.append(Speaker::User, "a");
        assert!(ctx.is_empty());
    }
}
