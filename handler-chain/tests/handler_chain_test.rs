//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: before/after order, before stopping the chain, Reply stopping the handle phase and
//! being passed to after, and errors short-circuiting the chain.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chatrelay_core::{Chat, Handler, HandlerError, HandlerResponse, Message, User};
use chrono::Utc;
use handler_chain::HandlerChain;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}

struct CountingHandler {
    handle_count: Arc<AtomicUsize>,
    response: HandlerResponse,
}

#[async_trait::async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, _message: &Message) -> chatrelay_core::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

struct OrderHandler {
    name: &'static str,
    order: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl Handler for OrderHandler {
    async fn before(&self, _message: &Message) -> chatrelay_core::Result<bool> {
        self.order.lock().unwrap().push(format!("before_{}", self.name));
        Ok(true)
    }

    async fn after(
        &self,
        _message: &Message,
        response: &HandlerResponse,
    ) -> chatrelay_core::Result<()> {
        self.order
            .lock()
            .unwrap()
            .push(format!("after_{}_{:?}", self.name, response));
        Ok(())
    }
}

/// **Test: An empty chain returns Continue.**
#[tokio::test]
async fn test_empty_chain_continues() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());
    let result = chain.handle(&create_test_message("x")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: before runs first→last, after runs last→first and receives the final response.**
#[tokio::test]
async fn test_handlers_before_and_after_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first",
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second",
            order: order.clone(),
        }));

    chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(
        *order.lock().unwrap(),
        vec![
            "before_first",
            "before_second",
            "after_second_Continue",
            "after_first_Continue"
        ]
    );
}

/// **Test: before returning false stops the chain; handle is not run.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> chatrelay_core::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(CountingHandler {
            handle_count: handle_count.clone(),
            response: HandlerResponse::Continue,
        }));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: Reply ends the handle phase; later handlers are skipped and after sees the reply.**
#[tokio::test]
async fn test_reply_stops_handle_phase() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "log",
            order: order.clone(),
        }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: first.clone(),
            response: HandlerResponse::Reply("AI reply.".to_string()),
        }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: second.clone(),
            response: HandlerResponse::Continue,
        }));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("AI reply.".to_string()));
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
    assert_eq!(
        order.lock().unwrap().last().unwrap(),
        "after_log_Reply(\"AI reply.\")"
    );
}

/// **Test: Ignore falls through to the next handler.**
#[tokio::test]
async fn test_ignore_falls_through() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler {
            handle_count: first.clone(),
            response: HandlerResponse::Ignore,
        }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: second.clone(),
            response: HandlerResponse::Stop,
        }));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

/// **Test: An error from before is returned and nothing else runs.**
#[tokio::test]
async fn test_before_error_propagates() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn before(&self, message: &Message) -> chatrelay_core::Result<bool> {
            Err(HandlerError::MissingContext(message.user.id).into())
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(FailingHandler))
        .add_handler(Arc::new(CountingHandler {
            handle_count: handle_count.clone(),
            response: HandlerResponse::Continue,
        }));

    let err = chain.handle(&create_test_message("test")).await.unwrap_err();
    assert!(matches!(
        err,
        chatrelay_core::RelayError::Handler(HandlerError::MissingContext(_))
    ));
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}
