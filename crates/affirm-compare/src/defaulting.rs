use std::hash::Hash;

use affirm_core::{DefaultEquality, EqualityComparer};

/// A comparer that was either supplied by the caller or left to the type's default.
///
/// `Option<C>` parameters are resolved into this type at the API boundary, so
/// comparison code never checks for a missing comparer itself.
///
/// Comparing requires `T: Eq + Hash` for both variants, since the variant is
/// only known at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrDefault<C> {
    /// Caller supplied comparer.
    Supplied(C),
    /// Fall back to [`DefaultEquality`].
    Default,
}

impl<C> OrDefault<C> {
    /// Whether the caller left this component to the default.
    pub fn is_default(&self) -> bool {
        matches!(self, OrDefault::Default)
    }
}

impl<C> Default for OrDefault<C> {
    fn default() -> Self {
        OrDefault::Default
    }
}

impl<C> From<Option<C>> for OrDefault<C> {
    fn from(value: Option<C>) -> Self {
        match value {
            Some(comparer) => OrDefault::Supplied(comparer),
            None => OrDefault::Default,
        }
    }
}

impl<T, C> EqualityComparer<T> for OrDefault<C>
where
    T: Eq + Hash + ?Sized,
    C: EqualityComparer<T>,
{
    fn equals(&self, left: &T, right: &T) -> bool {
        match self {
            OrDefault::Supplied(comparer) => comparer.equals(left, right),
            OrDefault::Default => DefaultEquality.equals(left, right),
        }
    }

    fn hash_of(&self, value: &T) -> u64 {
        match self {
            OrDefault::Supplied(comparer) => comparer.hash_of(value),
            OrDefault::Default => DefaultEquality.hash_of(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FnComparer;

    #[test]
    fn none_resolves_to_default() {
        let resolved: OrDefault<DefaultEquality> = None.into();
        assert!(resolved.is_default());
        assert!(resolved.equals(&5, &5));
        assert_eq!(resolved.hash_of(&5), DefaultEquality.hash_of(&5));
    }

    #[test]
    fn supplied_comparer_wins() {
        let parity = FnComparer::new(|a: &i32, b: &i32| a % 2 == b % 2, |v: &i32| (v % 2) as u64);
        let resolved = OrDefault::from(Some(parity));
        assert!(!resolved.is_default());
        assert!(resolved.equals(&2, &4));
        assert_eq!(resolved.hash_of(&3), 1);
    }
}
