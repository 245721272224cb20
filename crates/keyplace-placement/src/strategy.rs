//! Assignment strategy interface

use keyplace_common::{NodeId, Result, StrategyKind};

/// Outcome of an assignment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Assignment {
    /// A named node (consistent strategy)
    Node(NodeId),
    /// A shard index in `[0, shard_count)` (uniform and random strategies)
    Shard(u32),
}

impl Assignment {
    /// Get the node identifier, if this assignment names a node
    #[must_use]
    pub const fn as_node(&self) -> Option<&NodeId> {
        match self {
            Self::Node(id) => Some(id),
            Self::Shard(_) => None,
        }
    }

    /// Get the shard index, if this assignment is an index
    #[must_use]
    pub const fn as_shard(&self) -> Option<u32> {
        match self {
            Self::Shard(shard) => Some(*shard),
            Self::Node(_) => None,
        }
    }
}

/// A key-to-target assignment strategy
///
/// Implementations are interchangeable behind `Box<dyn Assigner>`. The
/// membership operations carry state on the consistent strategy and are
/// accepted no-ops on the stateless ones, so callers can swap strategies
/// without guarding their membership plumbing.
pub trait Assigner: Send + Sync {
    /// Which strategy this is
    fn kind(&self) -> StrategyKind;

    /// Assign `key` to a target
    ///
    /// `shard_count` bounds the index-producing strategies; the
    /// consistent strategy ignores it. `Ok(None)` means the strategy has
    /// nothing to assign to (a ring with no points).
    ///
    /// # Errors
    /// [`keyplace_common::Error::EmptyKey`] if `key` is empty;
    /// [`keyplace_common::Error::ZeroShardCount`] from the index
    /// strategies when `shard_count` is zero.
    fn assign(&self, key: &str, shard_count: u32) -> Result<Option<Assignment>>;

    /// Add a node
    fn add_node(&mut self, id: NodeId);

    /// Remove a node; returns whether it was a member
    fn remove_node(&mut self, id: &str) -> bool;

    /// Change the replica count for subsequently added nodes
    fn set_replica_count(&mut self, replica_count: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_accessors() {
        let node = Assignment::Node(NodeId::new("a"));
        assert_eq!(node.as_node().unwrap().as_str(), "a");
        assert_eq!(node.as_shard(), None);

        let shard = Assignment::Shard(7);
        assert_eq!(shard.as_shard(), Some(7));
        assert!(shard.as_node().is_none());
    }
}
