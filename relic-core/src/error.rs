use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not a relic repository")]
    NotInitialized,

    #[error("Repository already initialized")]
    AlreadyInitialized,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Corrupt history: unresolvable commit {0}")]
    CorruptHistory(String),

    #[error("Nothing to commit")]
    NothingToCommit,

    #[error("Invalid object identifier: {0}")]
    InvalidObjectId(String),
}
