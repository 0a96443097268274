//! # middleware
//!
//! Cross-cutting pieces around the relay pipeline: the sender allow-list checked before a
//! message is dispatched, and a logging handler for the handler chain.

mod allow_list;
mod logging;

pub use allow_list::AllowList;
pub use logging::LoggingHandler;

#[cfg(test)]
mod test;
