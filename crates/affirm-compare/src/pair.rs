use affirm_core::{combine_pair_hashes, DefaultEquality, EqualityComparer};

use crate::defaulting::OrDefault;

/// Equality and hashing over key/value pairs, composed from a key comparer
/// and a value comparer.
///
/// Two pairs are equal exactly when both the keys and the values are equal
/// under their respective comparers. The pair hash folds the component
/// hashes with [`combine_pair_hashes`], so consistency of the components
/// carries over to the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairComparer<KC, VC> {
    key: KC,
    value: VC,
}

impl<KC, VC> PairComparer<KC, VC> {
    /// Composes a pair comparer from two explicit component comparers.
    pub fn new(key: KC, value: VC) -> Self {
        Self { key, value }
    }

    /// Returns the comparer applied to keys.
    pub fn key_comparer(&self) -> &KC {
        &self.key
    }

    /// Returns the comparer applied to values.
    pub fn value_comparer(&self) -> &VC {
        &self.value
    }

    /// Compares two borrowed key/value views, such as map entries.
    pub fn equals_parts<K, V>(&self, left: (&K, &V), right: (&K, &V)) -> bool
    where
        K: ?Sized,
        V: ?Sized,
        KC: EqualityComparer<K>,
        VC: EqualityComparer<V>,
    {
        self.key.equals(left.0, right.0) && self.value.equals(left.1, right.1)
    }

    /// Hashes a borrowed key/value view consistently with [`Self::equals_parts`].
    pub fn hash_parts<K, V>(&self, key: &K, value: &V) -> u64
    where
        K: ?Sized,
        V: ?Sized,
        KC: EqualityComparer<K>,
        VC: EqualityComparer<V>,
    {
        combine_pair_hashes(self.key.hash_of(key), self.value.hash_of(value))
    }
}

impl<KC, VC> PairComparer<OrDefault<KC>, OrDefault<VC>> {
    /// Composes a pair comparer from optional components.
    ///
    /// A `None` component compares with the type's own equality. When both
    /// components are omitted the element types of the `Option`s still need
    /// naming, e.g. `PairComparer::of(None::<DefaultEquality>, None::<DefaultEquality>)`.
    ///
    /// Either component may fall back to the default, so the resulting
    /// comparer only applies to keys and values that are `Eq + Hash`, even
    /// when both comparers are supplied. Use [`PairComparer::new`] for types
    /// such as `f64`.
    pub fn of(key: Option<KC>, value: Option<VC>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<KC> PairComparer<KC, DefaultEquality> {
    /// Custom key comparison, default value equality.
    pub fn keyed_by(key: KC) -> Self {
        Self {
            key,
            value: DefaultEquality,
        }
    }
}

impl<VC> PairComparer<DefaultEquality, VC> {
    /// Default key equality, custom value comparison.
    pub fn valued_by(value: VC) -> Self {
        Self {
            key: DefaultEquality,
            value,
        }
    }
}

impl PairComparer<DefaultEquality, DefaultEquality> {
    /// Both components use the types' own equality.
    pub fn with_defaults() -> Self {
        Self {
            key: DefaultEquality,
            value: DefaultEquality,
        }
    }
}

impl Default for PairComparer<DefaultEquality, DefaultEquality> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<K, V, KC, VC> EqualityComparer<(K, V)> for PairComparer<KC, VC>
where
    KC: EqualityComparer<K>,
    VC: EqualityComparer<V>,
{
    fn equals(&self, left: &(K, V), right: &(K, V)) -> bool {
        self.equals_parts((&left.0, &left.1), (&right.0, &right.1))
    }

    fn hash_of(&self, value: &(K, V)) -> u64 {
        self.hash_parts(&value.0, &value.1)
    }
}
