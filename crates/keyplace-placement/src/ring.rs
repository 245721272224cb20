//! Hash-ring key assignment
//!
//! Keys and node replicas hash onto a shared 32-bit circular space. A key
//! belongs to the node owning the first occupied position at or clockwise
//! of the key's own position, wrapping past the top of the space back to
//! the smallest one. Each node is planted at `replica_count` positions
//! (its virtual replicas), so adding or removing a node disturbs only the
//! arcs next to its own points: roughly `r / (t + r)` of the keyspace for
//! `r` new points joining `t` existing ones, instead of all of it.

use crate::strategy::{Assigner, Assignment};
use keyplace_common::config::{DEFAULT_REPLICA_COUNT, PlacementConfig};
use keyplace_common::hash::point_hash;
use keyplace_common::{Error, NodeId, Result, RingPoint, StrategyKind};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Position hash fixed per ring instance
type PointHasher = fn(&[u8]) -> u32;

/// Consistent-hashing ring
///
/// Mutation takes `&mut self`, so a single instance is caller-serialized
/// by the borrow checker; wrap it in [`SharedRing`](crate::SharedRing)
/// for shared-memory use.
///
/// Two nodes' replica formulas may hash to the same position. The later
/// insertion owns the position, silently shrinking the earlier node's
/// effective replica set; with a 32-bit space and realistic replica
/// counts this stays vanishingly rare.
#[derive(Clone)]
pub struct HashRing {
    /// Occupied positions, strictly ascending
    points: Vec<RingPoint>,
    /// Owner of each occupied position
    owners: HashMap<RingPoint, NodeId>,
    /// Active members and the replica count each was added with
    members: HashMap<NodeId, u32>,
    /// Replica count applied by subsequent adds
    replica_count: u32,
    hasher: PointHasher,
}

impl HashRing {
    /// Create a ring that places `replica_count` points per node
    #[must_use]
    pub fn new(replica_count: u32) -> Self {
        Self::with_hasher(replica_count, point_hash)
    }

    /// Create a ring with a custom position hash
    ///
    /// Every instance that must agree on assignments has to use the same
    /// hash function.
    #[must_use]
    pub fn with_hasher(replica_count: u32, hasher: PointHasher) -> Self {
        Self {
            points: Vec::new(),
            owners: HashMap::new(),
            members: HashMap::new(),
            replica_count,
            hasher,
        }
    }

    /// Create a ring from placement configuration
    #[must_use]
    pub fn from_config(config: &PlacementConfig) -> Self {
        Self::new(config.replica_count)
    }

    /// Replica count applied to nodes added from now on
    #[must_use]
    pub const fn replica_count(&self) -> u32 {
        self.replica_count
    }

    /// Change the replica count for subsequent `add_node` calls
    ///
    /// Nodes already on the ring keep the count they were added with;
    /// their points move only on explicit removal or re-add.
    pub fn set_replica_count(&mut self, replica_count: u32) {
        debug!(
            "set_replica_count: {} -> {}",
            self.replica_count, replica_count
        );
        self.replica_count = replica_count;
    }

    /// Add a node, placing `replica_count` points for it
    ///
    /// Re-adding an existing member refreshes it: the old points are
    /// removed first, then placed again under the current replica count.
    /// A count of zero is legal and leaves the node a member owning no
    /// points.
    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        let id = id.into();
        if self.members.contains_key(id.as_str()) {
            self.remove_node(id.as_str());
        }

        let count = self.replica_count;
        for replica in 0..count {
            let point = self.replica_point(&id, replica);
            self.owners.insert(point, id.clone());
            if let Err(slot) = self.points.binary_search(&point) {
                self.points.insert(slot, point);
            }
        }
        debug!("add_node: {} ({} replicas)", id, count);
        self.members.insert(id, count);
    }

    /// Remove a node and every point it still owns
    ///
    /// Points are recomputed from the replica count the node was added
    /// with, so changing the count in between does not strand points. A
    /// position a later collision handed to another node stays with that
    /// node. Unknown identifiers are a no-op; the return value says
    /// whether the node was a member.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some((id, count)) = self.members.remove_entry(id) else {
            return false;
        };

        for replica in 0..count {
            let point = self.replica_point(&id, replica);
            if self.owners.get(&point) == Some(&id) {
                self.owners.remove(&point);
                if let Ok(slot) = self.points.binary_search(&point) {
                    self.points.remove(slot);
                }
            }
        }
        debug!("remove_node: {} ({} replicas)", id, count);
        true
    }

    /// Node owning `key`
    ///
    /// Returns `Ok(None)` on a ring with no points; callers decide how to
    /// treat an unpopulated ring.
    ///
    /// # Errors
    /// [`Error::EmptyKey`] if `key` is empty.
    pub fn locate(&self, key: &str) -> Result<Option<&NodeId>> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        if self.points.is_empty() {
            return Ok(None);
        }

        let position = RingPoint::new((self.hasher)(key.as_bytes()));
        let slot = match self.points.binary_search(&position) {
            Ok(slot) => slot,
            Err(slot) if slot == self.points.len() => 0,
            Err(slot) => slot,
        };
        Ok(self.owners.get(&self.points[slot]))
    }

    /// Number of active members
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.members.len()
    }

    /// Number of occupied positions
    ///
    /// At most the sum of member replica counts; collisions make it
    /// smaller.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Whether the ring has no points
    ///
    /// A ring whose members were all added with zero replicas is empty
    /// for lookup purposes while still having members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `id` is an active member
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    /// Active members, in unspecified order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.members.keys()
    }

    /// Owner of a specific position, if occupied
    #[must_use]
    pub fn owner_of(&self, point: RingPoint) -> Option<&NodeId> {
        self.owners.get(&point)
    }

    /// Position of replica `replica` of node `id`
    fn replica_point(&self, id: &NodeId, replica: u32) -> RingPoint {
        RingPoint::new((self.hasher)(format!("{id}-{replica}").as_bytes()))
    }
}

impl Default for HashRing {
    fn default() -> Self {
        Self::new(DEFAULT_REPLICA_COUNT)
    }
}

impl fmt::Debug for HashRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRing")
            .field("nodes", &self.members.len())
            .field("points", &self.points.len())
            .field("replica_count", &self.replica_count)
            .finish()
    }
}

impl Assigner for HashRing {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Consistent
    }

    /// Assign `key` to its owning node; `shard_count` is not used by the
    /// ring strategy.
    fn assign(&self, key: &str, _shard_count: u32) -> Result<Option<Assignment>> {
        Ok(self.locate(key)?.cloned().map(Assignment::Node))
    }

    fn add_node(&mut self, id: NodeId) {
        Self::add_node(self, id);
    }

    fn remove_node(&mut self, id: &str) -> bool {
        Self::remove_node(self, id)
    }

    fn set_replica_count(&mut self, replica_count: u32) {
        Self::set_replica_count(self, replica_count);
    }
}
