//! # chatrelay
//!
//! Relays Telegram messages from allow-listed users to an OpenAI chat model and sends the answer
//! back. Replying to a message continues the conversation with up to six remembered turns; any
//! other message starts over.
//!
//! Assembly: [`config`] → [`components::build_dispatcher`] (allow-list, context store, handler
//! chain, error sink) → [`chatrelay_telegram::run_repl`].

pub mod cli;
pub mod components;
pub mod config;
pub mod dispatcher;
pub mod error_sink;
pub mod relay_handler;
pub mod runner;

pub use cli::{Cli, Commands};
pub use components::build_dispatcher;
pub use config::RelayConfig;
pub use dispatcher::Dispatcher;
pub use error_sink::{error_channel, spawn_error_logger, ErrorSink};
pub use relay_handler::RelayHandler;
pub use runner::run_bot;
