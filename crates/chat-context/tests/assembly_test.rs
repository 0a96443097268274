//! Tests for [`chat_context::assemble_prompt`] and [`chat_context::record_reply`].
//!
//! Covers the non-reply reset branch (both policies), the reply branch, and the assistant turn
//! recorded after each completion.

use chat_context::{assemble_prompt, record_reply, ConversationContext, ResetPolicy, Speaker};

fn seeded(texts: &[(Speaker, &str)]) -> ConversationContext {
    let mut ctx = ConversationContext::new();
    for (speaker, text) in texts {
        ctx.append(*speaker, text);
    }
    ctx
}

/// **Test: Non-reply on a fresh context: prompt is the message verbatim and the context stays empty.**
#[test]
fn non_reply_prompt_is_message_and_context_empty() {
    let mut ctx = ConversationContext::new();
    let prompt = assemble_prompt(&mut ctx, "What is Rust?", false, ResetPolicy::Discard);
    assert_eq!(prompt, "What is Rust?");
    assert!(ctx.is_empty());
}

/// **Test: Non-reply discards existing history.**
#[test]
fn non_reply_resets_existing_history() {
    let mut ctx = seeded(&[(Speaker::User, "old"), (Speaker::Assistant, "older answer")]);
    let prompt = assemble_prompt(&mut ctx, "new topic", false, ResetPolicy::Discard);
    assert_eq!(prompt, "new topic");
    assert!(ctx.is_empty());
}

/// **Test: With KeepPrompt, the non-reply message becomes the first stored turn; prompt unchanged.**
#[test]
fn non_reply_keep_prompt_stores_first_message() {
    let mut ctx = seeded(&[(Speaker::User, "old")]);
    let prompt = assemble_prompt(&mut ctx, "new topic", false, ResetPolicy::KeepPrompt);
    assert_eq!(prompt, "new topic");
    assert_eq!(ctx.entries().collect::<Vec<_>>(), vec!["user: new topic"]);
}

/// **Test: Reply prompt equals render(E1..Ek, "user: M").**
#[test]
fn reply_prompt_is_rendered_history_plus_message() {
    let mut ctx = seeded(&[(Speaker::User, "hi"), (Speaker::Assistant, "hello")]);
    let prompt = assemble_prompt(&mut ctx, "tell me more", true, ResetPolicy::Discard);
    assert_eq!(prompt, "user: hi\n\nAI assistant: hello\n\nuser: tell me more");
    assert_eq!(ctx.last(), Some("user: tell me more"));
}

/// **Test: Reply on an empty context renders just the user turn.**
#[test]
fn reply_on_empty_context() {
    let mut ctx = ConversationContext::new();
    let prompt = assemble_prompt(&mut ctx, "hey", true, ResetPolicy::Discard);
    assert_eq!(prompt, "user: hey");
}

/// **Test: After a reply is recorded, the last entry is "AI assistant: R" for both branches.**
#[test]
fn record_reply_is_last_entry() {
    let mut ctx = ConversationContext::new();
    assemble_prompt(&mut ctx, "q1", false, ResetPolicy::Discard);
    record_reply(&mut ctx, "a1");
    assert_eq!(ctx.last(), Some("AI assistant: a1"));
    assert_eq!(ctx.len(), 1);

    assemble_prompt(&mut ctx, "q2", true, ResetPolicy::Discard);
    record_reply(&mut ctx, "a2");
    assert_eq!(ctx.last(), Some("AI assistant: a2"));
    assert_eq!(
        ctx.render(),
        "AI assistant: a1\n\nuser: q2\n\nAI assistant: a2"
    );
}

/// **Test: A non-reply followed by a reply sees only the prior assistant turn, not the first question.**
#[test]
fn reply_after_reset_sees_only_assistant_turn() {
    let mut ctx = ConversationContext::new();
    assemble_prompt(&mut ctx, "first question", false, ResetPolicy::Discard);
    record_reply(&mut ctx, "first answer");
    let prompt = assemble_prompt(&mut ctx, "follow up", true, ResetPolicy::Discard);
    assert_eq!(prompt, "AI assistant: first answer\n\nuser: follow up");
    assert!(!prompt.contains("first question"));
}
