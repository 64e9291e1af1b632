//! Error type for the fallible edges of the crate.
//!
//! Normalization itself never fails (unusable input degrades to `None`). Only
//! payload decoding and the CLI's I/O and argument handling return errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A personalization payload was not valid JSON for the expected model.
    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command-line argument was missing or malformed.
    #[error("{0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
