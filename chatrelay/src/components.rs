//! Wires config and collaborators into a ready [`Dispatcher`].

use std::sync::Arc;

use chat_context::ContextStore;
use chatrelay_core::Bot;
use handler_chain::HandlerChain;
use llm_client::LlmClient;
use middleware::{AllowList, LoggingHandler};

use crate::config::RelayConfig;
use crate::dispatcher::Dispatcher;
use crate::error_sink::ErrorSink;
use crate::relay_handler::RelayHandler;

/// Builds the allow-list, one empty context per allowed user, and the chain
/// `LoggingHandler → RelayHandler`. `llm` and `bot` are injected so tests can use mocks.
pub fn build_dispatcher(
    config: &RelayConfig,
    llm: Arc<dyn LlmClient>,
    bot: Arc<dyn Bot>,
    errors: ErrorSink,
) -> Dispatcher {
    let allow_list = AllowList::new(config.allowed_ids.iter().copied());
    let contexts = Arc::new(ContextStore::new(allow_list.ids()));

    let relay = RelayHandler::new(
        contexts.clone(),
        llm,
        bot,
        errors.clone(),
        config.reset_policy(),
        config.completion_timeout(),
    );
    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(relay));

    Dispatcher::new(allow_list, contexts, chain, errors)
}
