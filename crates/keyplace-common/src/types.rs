//! Core type definitions for Keyplace
//!
//! This module defines the fundamental types used throughout the system
//! including node identifiers, ring positions, and strategy selection.

use crate::error::{Error, Result};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Identifier for an assignable node (shard, cache server, worker)
///
/// Identifiers are opaque: any string is accepted, including the empty
/// string. Keeping them unique among active members is the caller's
/// contract; the engine never inspects their contents.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into)]
#[display("{_0}")]
pub struct NodeId(String);

impl NodeId {
    /// Create a new node identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:?})", self.0)
    }
}

/// Position on the 32-bit circular hash space
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, From, Into,
)]
pub struct RingPoint(u32);

impl RingPoint {
    /// Create a point from a raw position
    #[must_use]
    pub const fn new(position: u32) -> Self {
        Self(position)
    }

    /// Get the raw position
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RingPoint({})", self.0)
    }
}

impl fmt::Display for RingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Assignment strategy selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StrategyKind {
    /// Hash-ring assignment with virtual replicas (default)
    #[default]
    Consistent,
    /// Uniformly random assignment, redrawn on every call
    Random,
    /// Deterministic modulo assignment over a fixed shard count
    Uniform,
}

impl StrategyKind {
    /// Stable numeric identifier for this strategy
    ///
    /// The ids are part of the external contract and must not be
    /// renumbered: 0 = consistent, 1 = random, 2 = uniform.
    #[must_use]
    pub const fn id(&self) -> u32 {
        match self {
            Self::Consistent => 0,
            Self::Random => 1,
            Self::Uniform => 2,
        }
    }

    /// Resolve a strategy from its numeric identifier
    ///
    /// # Errors
    /// [`Error::UnknownStrategy`] if no strategy is registered under `id`.
    pub fn from_id(id: u32) -> Result<Self> {
        match id {
            0 => Ok(Self::Consistent),
            1 => Ok(Self::Random),
            2 => Ok(Self::Uniform),
            other => Err(Error::unknown_strategy(other.to_string())),
        }
    }

    /// Get the strategy name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Consistent => "consistent",
            Self::Random => "random",
            Self::Uniform => "uniform",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "consistent" | "consistent_hashing" | "ring" => Ok(Self::Consistent),
            "random" | "random_hashing" => Ok(Self::Random),
            "uniform" | "uniform_hashing" | "modulo" => Ok(Self::Uniform),
            _ => Err(Error::unknown_strategy(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_basics() {
        let id = NodeId::new("cache-1");
        assert_eq!(id.as_str(), "cache-1");
        assert_eq!(id.to_string(), "cache-1");
        assert_eq!(format!("{id:?}"), "NodeId(\"cache-1\")");
    }

    #[test]
    fn test_node_id_conversions() {
        let from_str: NodeId = "n1".into();
        let from_string: NodeId = String::from("n1").into();
        assert_eq!(from_str, from_string);

        let back: String = from_string.into();
        assert_eq!(back, "n1");
    }

    #[test]
    fn test_ring_point_ordering() {
        let mut points = vec![RingPoint::new(30), RingPoint::new(10), RingPoint::new(20)];
        points.sort_unstable();
        assert_eq!(points[0].as_u32(), 10);
        assert_eq!(points[2].as_u32(), 30);
    }

    #[test]
    fn test_strategy_kind_ids() {
        assert_eq!(StrategyKind::Consistent.id(), 0);
        assert_eq!(StrategyKind::Random.id(), 1);
        assert_eq!(StrategyKind::Uniform.id(), 2);

        for kind in [
            StrategyKind::Consistent,
            StrategyKind::Random,
            StrategyKind::Uniform,
        ] {
            assert_eq!(StrategyKind::from_id(kind.id()).unwrap(), kind);
        }
    }

    #[test]
    fn test_strategy_kind_unknown_id() {
        let err = StrategyKind::from_id(3).unwrap_err();
        assert_eq!(err.to_string(), "unknown strategy: 3");
    }

    #[test]
    fn test_strategy_kind_parse() {
        assert_eq!(
            "consistent".parse::<StrategyKind>().unwrap(),
            StrategyKind::Consistent
        );
        assert_eq!("ring".parse::<StrategyKind>().unwrap(), StrategyKind::Consistent);
        assert_eq!("RANDOM".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert_eq!(
            "uniform_hashing".parse::<StrategyKind>().unwrap(),
            StrategyKind::Uniform
        );
        assert!("blake3".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_strategy_kind_display() {
        assert_eq!(StrategyKind::Consistent.to_string(), "consistent");
        assert_eq!(StrategyKind::Uniform.to_string(), "uniform");
    }
}
