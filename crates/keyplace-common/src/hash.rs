//! Hash functions for key and point placement
//!
//! Provides the position hash shared by ring points and lookups, and the
//! polynomial key hash used by the uniform strategy.

/// Hash bytes to a position on the 32-bit circular space
///
/// Deterministic and unseeded: the same input maps to the same position
/// in every process, which is what keeps independently configured
/// instances in agreement. Empty input is valid here; key validation
/// happens in the strategies.
#[inline]
#[must_use]
pub fn point_hash(data: &[u8]) -> u32 {
    xxhash_rust::xxh32::xxh32(data, 0)
}

/// Polynomial key hash: `h = h * 31 + byte` over the input
///
/// Accumulates in a signed 64-bit integer with wrap-on-overflow, so long
/// keys can drive the value negative. Callers reduce with `rem_euclid`
/// to land in a non-negative range.
#[inline]
#[must_use]
pub fn polynomial_hash(data: &[u8]) -> i64 {
    let mut hash: i64 = 0;
    for &byte in data {
        hash = hash.wrapping_mul(31).wrapping_add(i64::from(byte));
    }
    hash
}
