// crates/tl_core/src/error.rs

use thiserror::Error;

/// Errors surfaced at the JSON boundary. Engine operations themselves never
/// fail; a bad gesture or missing geometry degrades to a no-op instead.
#[derive(Error, Debug)]
pub enum LineupError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

pub type Result<T> = std::result::Result<T, LineupError>;
