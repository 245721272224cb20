//! Error types for Keyplace
//!
//! This module defines the common error types used throughout the system.
//! Conditions the engine defines behavior for (lookups on an empty ring,
//! removing an unknown node, position collisions) are not errors and do
//! not appear here.

use thiserror::Error;

/// Common result type for Keyplace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for Keyplace
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The key to assign was the empty string
    #[error("key must not be empty")]
    EmptyKey,

    /// A shard-indexed strategy was asked to assign into zero shards
    #[error("shard count must be positive")]
    ZeroShardCount,

    /// No strategy is registered under the given selector
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

impl Error {
    /// Create an unknown strategy error
    pub fn unknown_strategy(selector: impl Into<String>) -> Self {
        Self::UnknownStrategy(selector.into())
    }
}
