//! Error types for simulation setup

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing a simulation or its timestep.
///
/// Stepping never fails; all checks happen up front.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid particle count, config value or timestep.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
