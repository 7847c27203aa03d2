// File: src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("could not persist snapshot: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("character groups have not been built")]
    GroupsNotBuilt,
}

pub type Result<T> = std::result::Result<T, FinderError>;
