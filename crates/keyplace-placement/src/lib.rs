//! Keyplace Placement - key-to-node assignment strategies
//!
//! This crate implements the strategies for assigning string keys to a
//! dynamic set of named nodes:
//!
//! - **Consistent** ([`HashRing`]): keys and node replicas share a
//!   circular hash space; membership changes remap only the keys on the
//!   arcs next to the moved points.
//! - **Uniform** ([`UniformAssigner`]): deterministic modulo placement
//!   over a fixed shard count.
//! - **Random** ([`RandomAssigner`]): a fresh uniform draw per call.
//!
//! All three sit behind the [`Assigner`] trait and are constructed
//! through [`StrategyFactory`]. [`SharedRing`] wraps the ring for
//! shared-memory use.
//!
//! # Example
//! ```
//! use keyplace_placement::HashRing;
//!
//! let mut ring = HashRing::new(64);
//! ring.add_node("cache-a");
//! ring.add_node("cache-b");
//!
//! let owner = ring.locate("user:1234").unwrap();
//! assert!(owner.is_some());
//! ```

pub mod factory;
pub mod random;
pub mod ring;
pub mod shared;
pub mod strategy;
pub mod uniform;

pub use factory::StrategyFactory;
pub use random::RandomAssigner;
pub use ring::HashRing;
pub use shared::SharedRing;
pub use strategy::{Assigner, Assignment};
pub use uniform::UniformAssigner;
