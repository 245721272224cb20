//! Random assignment

use crate::strategy::{Assigner, Assignment};
use keyplace_common::{Error, NodeId, Result, StrategyKind};
use rand::Rng;

/// Randomized strategy: a fresh uniform draw per call
///
/// Spreads load without any affinity; two calls with the same key are
/// unrelated.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomAssigner;

impl RandomAssigner {
    /// Create a random assigner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Random shard index in `[0, shard_count)`
    ///
    /// The key is validated but does not influence the draw.
    ///
    /// # Errors
    /// [`Error::EmptyKey`] if `key` is empty; [`Error::ZeroShardCount`]
    /// if `shard_count` is zero.
    pub fn shard(key: &str, shard_count: u32) -> Result<u32> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        if shard_count == 0 {
            return Err(Error::ZeroShardCount);
        }

        Ok(rand::thread_rng().gen_range(0..shard_count))
    }
}

impl Assigner for RandomAssigner {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn assign(&self, key: &str, shard_count: u32) -> Result<Option<Assignment>> {
        Self::shard(key, shard_count).map(|shard| Some(Assignment::Shard(shard)))
    }

    fn add_node(&mut self, _id: NodeId) {}

    fn remove_node(&mut self, _id: &str) -> bool {
        false
    }

    fn set_replica_count(&mut self, _replica_count: u32) {}
}
