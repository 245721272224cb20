//! Keyplace Common - Shared types and utilities
//!
//! This crate provides common types, error definitions, and utilities
//! used across all Keyplace components.

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{DEFAULT_REPLICA_COUNT, PlacementConfig};
pub use error::{Error, Result};
pub use hash::{point_hash, polynomial_hash};
pub use types::*;
