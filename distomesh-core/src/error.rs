//! Error types for distomesh core operations

use thiserror::Error;

/// Errors raised at the host-scene boundary
#[derive(Error, Debug)]
pub enum Error {
    #[error("Scene error: {0}")]
    Scene(String),
}

/// Result type alias for distomesh core operations
pub type Result<T> = std::result::Result<T, Error>;
