//! Stable hashing helpers shared by comparer implementations.

use siphasher::sip::SipHasher13;
use std::hash::{Hash, Hasher};

/// Multiplier used when folding a key hash and a value hash together.
pub const PAIR_HASH_MULTIPLIER: u64 = 31;

/// Hashes `value` with SipHash-1-3 configured with fixed zero keys.
///
/// Unlike `std::collections::hash_map::DefaultHasher`, the keys never change
/// between processes, so a digest computed here can be compared across runs
/// and platforms.
pub fn stable_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    value.hash(&mut hasher);
    hasher.finish()
}

/// Folds a key hash and a value hash into one order-sensitive digest.
///
/// Computes `key * 31 + value` with wrapping arithmetic.
pub fn combine_pair_hashes(key: u64, value: u64) -> u64 {
    key.wrapping_mul(PAIR_HASH_MULTIPLIER).wrapping_add(value)
}
