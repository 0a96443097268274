//! # chatrelay-core
//!
//! Core types and traits for the relay bot: [`Bot`], [`Handler`], message and user types,
//! error types, and tracing initialization. Transport-agnostic; used by chatrelay-telegram,
//! handler-chain, and the chatrelay binary.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, RelayError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Dispatch, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
