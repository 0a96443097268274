use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("No conversation context for user {0}")]
    MissingContext(i64),
}

pub type Result<T> = std::result::Result<T, RelayError>;
