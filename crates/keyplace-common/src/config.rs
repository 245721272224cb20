//! Configuration types for Keyplace
//!
//! This module defines the configuration consumed when constructing
//! assignment strategies.

use crate::types::StrategyKind;
use serde::{Deserialize, Serialize};

/// Default number of ring points placed per node
pub const DEFAULT_REPLICA_COUNT: u32 = 64;

/// Configuration for constructing an assignment strategy
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Strategy to construct
    pub strategy: StrategyKind,
    /// Ring points placed per node (consistent strategy only)
    pub replica_count: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Consistent,
            replica_count: DEFAULT_REPLICA_COUNT,
        }
    }
}
