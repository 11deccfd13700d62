#![deny(missing_docs)]
#![doc = "Core traits, error types, and stable hashing shared by the affirm assertion crates."]

use std::hash::Hash;

pub mod errors;
pub mod hash;

pub use errors::{codes, AffirmError, ErrorInfo};
pub use hash::{combine_pair_hashes, stable_hash};

/// Equality and hashing strategy over values of type `T`.
///
/// Implementations must stay internally consistent: whenever
/// `equals(a, b)` holds, `hash_of(a) == hash_of(b)` must hold as well.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns whether `left` and `right` are considered equal.
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Returns a digest consistent with [`EqualityComparer::equals`].
    fn hash_of(&self, value: &T) -> u64;
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &C {
    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }

    fn hash_of(&self, value: &T) -> u64 {
        (**self).hash_of(value)
    }
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for Box<C> {
    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }

    fn hash_of(&self, value: &T) -> u64 {
        (**self).hash_of(value)
    }
}

/// The type's own `Eq` and `Hash`, digested with [`stable_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultEquality;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for DefaultEquality {
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    fn hash_of(&self, value: &T) -> u64 {
        stable_hash(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_equality_follows_eq() {
        assert!(DefaultEquality.equals(&3, &3));
        assert!(!DefaultEquality.equals("a", "b"));
        assert_eq!(DefaultEquality.hash_of(&7u8), stable_hash(&7u8));
    }

    #[test]
    fn references_delegate() {
        let cmp = &DefaultEquality;
        assert!(EqualityComparer::<str>::equals(&cmp, "x", "x"));
        let boxed: Box<dyn EqualityComparer<i32>> = Box::new(DefaultEquality);
        assert!(boxed.equals(&1, &1));
        assert_eq!(boxed.hash_of(&1), stable_hash(&1));
    }
}
