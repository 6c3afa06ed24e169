use crate::types::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Console write error: {0}")]
    Console(#[from] std::io::Error),

    #[error("Item {id} not present in the item table")]
    UnknownItem { id: ItemId },

    #[error("Tick interval must be positive")]
    ZeroInterval,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type EventResult<T> = Result<T, EventError>;
