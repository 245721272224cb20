//! Uniform modulo assignment

use crate::strategy::{Assigner, Assignment};
use keyplace_common::hash::polynomial_hash;
use keyplace_common::{Error, NodeId, Result, StrategyKind};

/// Stateless modulo strategy over a fixed shard count
///
/// The same key and shard count always yield the same index. Changing
/// the shard count remaps nearly every key; that is the trade this
/// strategy makes for carrying no state at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformAssigner;

impl UniformAssigner {
    /// Create a uniform assigner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Shard index for `key` in `[0, shard_count)`
    ///
    /// The polynomial hash can wrap negative on long keys; the Euclidean
    /// remainder keeps the index non-negative regardless.
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

        let hash = polynomial_hash(key.as_bytes());
        Ok(hash.rem_euclid(i64::from(shard_count)) as u32)
    }
}

impl Assigner for UniformAssigner {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Uniform
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
