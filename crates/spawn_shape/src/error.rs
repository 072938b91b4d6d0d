//! Error types and result alias for the crate.
//!
//! Sampling itself never fails. These errors only surface from the optional
//! configuration checks in [`crate::shape::config`]: invalid shape parameters
//! and unknown shape tags.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown spawn shape '{tag}'")]
    UnknownShape { tag: String },
}
