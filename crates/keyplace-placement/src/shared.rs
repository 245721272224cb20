//! Shared-memory ring handle

use crate::ring::HashRing;
use keyplace_common::{NodeId, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, thread-safe handle to a [`HashRing`]
///
/// All handles cloned from one ring share state. Lookups take the shared
/// lock and clone the owner out of it; [`Self::snapshot`] clones the
/// whole ring for read paths that want to skip locking entirely.
#[derive(Clone)]
pub struct SharedRing {
    inner: Arc<RwLock<HashRing>>,
}

impl SharedRing {
    /// Wrap a ring for shared use
    #[must_use]
    pub fn new(ring: HashRing) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ring)),
        }
    }

    /// Add a node, placing the configured number of points for it
    pub fn add_node(&self, id: impl Into<NodeId>) {
        self.inner.write().add_node(id);
    }

    /// Remove a node; returns whether it was a member
    pub fn remove_node(&self, id: &str) -> bool {
        self.inner.write().remove_node(id)
    }

    /// Change the replica count for subsequent adds
    pub fn set_replica_count(&self, replica_count: u32) {
        self.inner.write().set_replica_count(replica_count);
    }

    /// Node owning `key`, cloned out of the lock
    ///
    /// # Errors
    /// [`keyplace_common::Error::EmptyKey`] if `key` is empty.
    pub fn locate(&self, key: &str) -> Result<Option<NodeId>> {
        Ok(self.inner.read().locate(key)?.cloned())
    }

    /// Clone the current ring state for lock-free reads
    #[must_use]
    pub fn snapshot(&self) -> HashRing {
        self.inner.read().clone()
    }

    /// Number of active members
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.read().node_count()
    }

    /// Number of occupied positions
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.inner.read().point_count()
    }

    /// Whether the ring has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Whether `id` is an active member
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.inner.read().contains_node(id)
    }
}

impl Default for SharedRing {
    fn default() -> Self {
        Self::new(HashRing::default())
    }
}

impl From<HashRing> for SharedRing {
    fn from(ring: HashRing) -> Self {
        Self::new(ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_ring_basics() {
        let ring = SharedRing::new(HashRing::new(16));
        assert!(ring.is_empty());
        assert_eq!(ring.locate("k").unwrap(), None);

        ring.add_node("a");
        assert_eq!(ring.node_count(), 1);
        assert_eq!(ring.point_count(), 16);
        assert_eq!(ring.locate("k").unwrap().unwrap().as_str(), "a");

        assert!(ring.remove_node("a"));
        assert!(ring.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let ring = SharedRing::new(HashRing::new(8));
        let other = ring.clone();

        ring.add_node("a");
        assert!(other.contains_node("a"));

        other.remove_node("a");
        assert_eq!(ring.node_count(), 0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let ring = SharedRing::new(HashRing::new(8));
        ring.add_node("a");

        let snapshot = ring.snapshot();
        ring.add_node("b");

        assert_eq!(snapshot.node_count(), 1);
        assert_eq!(ring.node_count(), 2);
        assert_eq!(snapshot.locate("k").unwrap().unwrap().as_str(), "a");
    }

    #[test]
    fn test_concurrent_readers() {
        let ring = SharedRing::new(HashRing::new(32));
        ring.add_node("a");
        ring.add_node("b");

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for i in 0..100 {
                        let key = format!("key-{i}");
                        assert!(ring.locate(&key).unwrap().is_some());
                    }
                });
            }
        });
    }
}
