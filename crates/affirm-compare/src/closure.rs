use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use affirm_core::{stable_hash, EqualityComparer};

/// Comparer assembled from an equality closure and a hash closure.
///
/// The caller is responsible for keeping the two closures consistent.
pub struct FnComparer<E, H> {
    eq: E,
    hash: H,
}

impl<E, H> FnComparer<E, H> {
    /// Creates a comparer from the provided closures.
    pub fn new(eq: E, hash: H) -> Self {
        Self { eq, hash }
    }
}

impl<E, H> fmt::Debug for FnComparer<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparer").finish_non_exhaustive()
    }
}

impl<T, E, H> EqualityComparer<T> for FnComparer<E, H>
where
    T: ?Sized,
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn equals(&self, left: &T, right: &T) -> bool {
        (self.eq)(left, right)
    }

    fn hash_of(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// Compares values by a projected key using the key's own equality.
///
/// `by_projection(|s: &String| s.to_lowercase())` yields a case-insensitive
/// string comparer whose hash is consistent by construction.
pub struct Projected<T: ?Sized, F> {
    project: F,
    _marker: PhantomData<fn(&T)>,
}

/// Builds a [`Projected`] comparer.
pub fn by_projection<T, K, F>(project: F) -> Projected<T, F>
where
    T: ?Sized,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    Projected {
        project,
        _marker: PhantomData,
    }
}

impl<T: ?Sized, F> fmt::Debug for Projected<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projected").finish_non_exhaustive()
    }
}

impl<T, K, F> EqualityComparer<T> for Projected<T, F>
where
    T: ?Sized,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    fn equals(&self, left: &T, right: &T) -> bool {
        (self.project)(left) == (self.project)(right)
    }

    fn hash_of(&self, value: &T) -> u64 {
        stable_hash(&(self.project)(value))
    }
}
