use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Sending through the chat transport failed.
    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
