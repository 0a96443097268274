//! # chatrelay-telegram
//!
//! Telegram transport layer: adapters to core types, [`chatrelay_core::Bot`] implementation,
//! client construction, and the long-polling runner that hands messages to a [`chatrelay_core::Dispatch`].
//! No context or AI logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{authorize, run_repl};
