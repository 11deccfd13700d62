use affirm_compare::PairComparer;
use affirm_core::EqualityComparer;

use crate::buffer::SequenceBuffer;

/// Boolean-accumulating continuation over a sequence.
///
/// The source may be single-pass: items are buffered as they are read and
/// never requested from the source twice. Operations skipped by
/// short-circuit read nothing at all.
#[must_use = "a check chain does nothing until its result() is read"]
pub struct CheckMany<I: Iterator> {
    buffer: SequenceBuffer<I>,
    outcome: bool,
}

/// A [`CheckMany`] whose items are key/value pairs.
pub type CheckPairs<I> = CheckMany<I>;

/// Starts a check chain on a sequence.
pub fn check_many<S: IntoIterator>(source: S) -> CheckMany<S::IntoIter> {
    CheckMany {
        buffer: SequenceBuffer::new(source.into_iter()),
        outcome: true,
    }
}

/// Starts a check chain on a sequence of key/value pairs.
pub fn check_pairs<K, V, S>(source: S) -> CheckPairs<S::IntoIter>
where
    S: IntoIterator<Item = (K, V)>,
{
    check_many(source)
}

impl<I: Iterator> std::fmt::Debug for CheckMany<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckMany")
            .field("buffer", &self.buffer)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl<I: Iterator> CheckMany<I> {
    fn step<E>(mut self, eval: E) -> Self
    where
        E: FnOnce(&mut SequenceBuffer<I>) -> bool,
    {
        if self.outcome {
            self.outcome = eval(&mut self.buffer);
        } else {
            tracing::trace!("sequence check already failed; operation skipped");
        }
        self
    }

    /// ANDs `predicate(items)` into the outcome, reading the whole sequence.
    pub fn that<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&[I::Item]) -> bool,
    {
        self.step(|buffer| predicate(buffer.fill_all()))
    }

    /// ANDs `!predicate(items)` into the outcome.
    pub fn not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&[I::Item]) -> bool,
    {
        self.that(|items| !predicate(items))
    }

    /// Requires exactly `expected` items.
    ///
    /// Sources with an exact `size_hint` are not read; others are read at
    /// most `expected + 1` items deep.
    pub fn has_count(self, expected: usize) -> Self {
        self.step(|buffer| buffer.observe_count(expected).is(expected))
    }

    /// Requires exactly `expected` items, then hands the buffered items to
    /// `predicate`.
    ///
    /// The predicate always sees exactly `expected` items, even when the
    /// source misreports its length.
    pub fn that_exactly<P>(self, expected: usize, predicate: P) -> Self
    where
        P: FnOnce(&[I::Item]) -> bool,
    {
        self.step(|buffer| {
            buffer.observe_count(expected).is(expected)
                && buffer.fill_exact(expected).is_some_and(predicate)
        })
    }

    /// Requires at least one item matching `predicate`.
    pub fn that_any<P>(self, predicate: P) -> Self
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.step(|buffer| buffer.position(predicate).is_some())
    }

    /// Requires every item to match `predicate`; stops at the first miss.
    pub fn that_all<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.step(|buffer| buffer.position(|item| !predicate(item)).is_none())
    }

    /// Requires an item equal to `needle` under `comparer`.
    pub fn contains_by<C>(self, needle: &I::Item, comparer: &C) -> Self
    where
        C: EqualityComparer<I::Item>,
    {
        self.that_any(|item| comparer.equals(item, needle))
    }

    /// The conjunction of every operation applied so far.
    pub fn result(&self) -> bool {
        self.outcome
    }

    /// Items read from the source so far.
    pub fn buffered(&self) -> &[I::Item] {
        self.buffer.buffered()
    }

    /// Gives back every item, reading whatever the source still holds.
    pub fn into_items(self) -> Vec<I::Item> {
        self.buffer.into_items()
    }
}

impl<K, V, I> CheckMany<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Requires a pair equal to `entry` under `comparer`.
    pub fn contains_pair_by<KC, VC>(self, entry: &(K, V), comparer: &PairComparer<KC, VC>) -> Self
    where
        KC: EqualityComparer<K>,
        VC: EqualityComparer<V>,
    {
        self.that_any(|item| comparer.equals(item, entry))
    }

    /// Requires a pair whose key equals `key` under `comparer`.
    pub fn contains_key_by<C>(self, key: &K, comparer: &C) -> Self
    where
        C: EqualityComparer<K>,
    {
        self.that_any(|(k, _)| comparer.equals(k, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affirm_core::DefaultEquality;

    #[test]
    fn slice_predicates_see_every_item() {
        assert!(check_many(vec![1, 2, 3]).that(|items| items.len() == 3).result());
        assert!(check_many([1, 2, 3]).not(|items| items.contains(&4)).result());
    }

    #[test]
    fn count_mismatch_skips_item_predicate() {
        let mut called = false;
        let chain = check_many(0..5).that_exactly(4, |_| {
            called = true;
            true
        });
        assert!(!chain.result());
        assert!(!called);
    }

    #[test]
    fn membership_helpers() {
        assert!(check_many(1..).that_any(|n| *n > 100).result());
        assert!(check_many(vec!["a", "b"]).that_all(|s| s.len() == 1).result());
        assert!(check_many(vec![1, 2]).contains_by(&2, &DefaultEquality).result());
        assert!(!check_many(vec![1, 2]).contains_by(&3, &DefaultEquality).result());
    }

    #[test]
    fn pair_helpers_use_composed_comparers() {
        let entries = vec![("Alpha".to_string(), 1), ("beta".to_string(), 2)];
        let cmp = PairComparer::keyed_by(affirm_compare::by_projection(|k: &String| {
            k.to_lowercase()
        }));
        assert!(check_pairs(entries.clone())
            .contains_pair_by(&("ALPHA".to_string(), 1), &cmp)
            .result());
        assert!(!check_pairs(entries.clone())
            .contains_pair_by(&("alpha".to_string(), 2), &cmp)
            .result());
        assert!(check_pairs(entries)
            .contains_key_by(&"Beta".to_string(), cmp.key_comparer())
            .result());
    }
}
