//! Strategy construction and selection

use crate::random::RandomAssigner;
use crate::ring::HashRing;
use crate::strategy::Assigner;
use crate::uniform::UniformAssigner;
use keyplace_common::{PlacementConfig, Result, StrategyKind};

/// Factory for constructing assignment strategies
pub struct StrategyFactory;

impl StrategyFactory {
    /// Construct the strategy selected by `kind`
    ///
    /// The consistent strategy starts with no members; callers populate
    /// it through [`Assigner::add_node`]. The stateless strategies reach
    /// readiness immediately.
    #[must_use]
    pub fn create(kind: StrategyKind, config: &PlacementConfig) -> Box<dyn Assigner> {
        match kind {
            StrategyKind::Consistent => Box::new(HashRing::from_config(config)),
            StrategyKind::Random => Box::new(RandomAssigner::new()),
            StrategyKind::Uniform => Box::new(UniformAssigner::new()),
        }
    }

    /// Construct the strategy registered under a numeric id
    ///
    /// # Errors
    /// [`keyplace_common::Error::UnknownStrategy`] if `id` is not
    /// registered.
    pub fn create_by_id(id: u32, config: &PlacementConfig) -> Result<Box<dyn Assigner>> {
        Ok(Self::create(StrategyKind::from_id(id)?, config))
    }

    /// Construct the strategy named by the configuration
    #[must_use]
    pub fn from_config(config: &PlacementConfig) -> Box<dyn Assigner> {
        Self::create(config.strategy, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Assignment;
    use keyplace_common::NodeId;

    #[test]
    fn test_create_each_kind() {
        let config = PlacementConfig::default();
        for kind in [
            StrategyKind::Consistent,
            StrategyKind::Random,
            StrategyKind::Uniform,
        ] {
            let assigner = StrategyFactory::create(kind, &config);
            assert_eq!(assigner.kind(), kind);
        }
    }

    #[test]
    fn test_create_consistent_uses_replica_count() {
        let config = PlacementConfig {
            strategy: StrategyKind::Consistent,
            replica_count: 3,
        };
        let mut assigner = StrategyFactory::from_config(&config);

        // No members yet: the ring reports the sentinel, not an error.
        assert_eq!(assigner.assign("k", 0).unwrap(), None);

        assigner.add_node(NodeId::new("a"));
        assert_eq!(
            assigner.assign("k", 0).unwrap(),
            Some(Assignment::Node(NodeId::new("a")))
        );
    }

    #[test]
    fn test_create_uniform_assigns_shards() {
        let config = PlacementConfig::default();
        let assigner = StrategyFactory::create(StrategyKind::Uniform, &config);

        let assignment = assigner.assign("k", 8).unwrap().unwrap();
        assert!(assignment.as_shard().unwrap() < 8);
    }

    #[test]
    fn test_create_random_assigns_shards() {
        let config = PlacementConfig::default();
        let assigner = StrategyFactory::create(StrategyKind::Random, &config);

        let assignment = assigner.assign("k", 8).unwrap().unwrap();
        assert!(assignment.as_shard().unwrap() < 8);
    }

    #[test]
    fn test_create_by_id() {
        let config = PlacementConfig::default();
        assert_eq!(
            StrategyFactory::create_by_id(0, &config).unwrap().kind(),
            StrategyKind::Consistent
        );
        assert_eq!(
            StrategyFactory::create_by_id(1, &config).unwrap().kind(),
            StrategyKind::Random
        );
        assert_eq!(
            StrategyFactory::create_by_id(2, &config).unwrap().kind(),
            StrategyKind::Uniform
        );
    }

    #[test]
    fn test_create_by_unknown_id() {
        let config = PlacementConfig::default();
        let Err(err) = StrategyFactory::create_by_id(9, &config) else {
            panic!("expected unknown strategy error");
        };
        assert_eq!(err.to_string(), "unknown strategy: 9");
    }

    #[test]
    fn test_zero_replica_config_is_legal() {
        let config = PlacementConfig {
            strategy: StrategyKind::Consistent,
            replica_count: 0,
        };
        let mut assigner = StrategyFactory::from_config(&config);

        // Members added under a zero count own no points.
        assigner.add_node(NodeId::new("a"));
        assert_eq!(assigner.assign("k", 0).unwrap(), None);
    }
}
