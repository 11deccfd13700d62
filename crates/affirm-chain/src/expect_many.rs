use affirm_compare::PairComparer;
use affirm_core::errors::{codes, AffirmError};
use affirm_core::EqualityComparer;
use affirm_render::{Callable, Diagnostic, Renderer};

use crate::buffer::{ObservedCount, SequenceBuffer};
use crate::issue::{expectation_failure, raise, Issue, Operation};

/// Failing continuation over a sequence.
///
/// Shares the buffering of [`CheckMany`](crate::CheckMany): the source is read
/// at most once across the whole chain. A failure renders the items read so
/// far as the target.
pub struct ExpectMany<I: Iterator> {
    buffer: SequenceBuffer<I>,
    renderer: Renderer,
}

/// Starts an expectation chain on a sequence.
pub fn expect_many<S>(source: S) -> ExpectMany<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Diagnostic,
{
    ExpectMany {
        buffer: SequenceBuffer::new(source.into_iter()),
        renderer: Renderer::default(),
    }
}

impl<I: Iterator> std::fmt::Debug for ExpectMany<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpectMany")
            .field("buffer", &self.buffer)
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl<I> ExpectMany<I>
where
    I: Iterator,
    I::Item: Diagnostic,
{
    /// Uses `renderer` for failure messages.
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    fn fail(
        &self,
        code: &str,
        operation: &Operation<'_>,
        issue: Option<&dyn Issue<[I::Item]>>,
    ) -> AffirmError {
        raise(expectation_failure(
            code,
            operation,
            self.buffer.buffered(),
            issue,
            &self.renderer,
        ))
    }

    /// Evaluates `predicate` over the whole sequence as the named `operation`.
    pub fn apply<P>(
        mut self,
        operation: Operation<'_>,
        predicate: P,
        issue: Option<&dyn Issue<[I::Item]>>,
    ) -> Result<Self, AffirmError>
    where
        P: FnOnce(&[I::Item]) -> bool,
    {
        if predicate(self.buffer.fill_all()) {
            return Ok(self);
        }
        Err(self.fail(codes::EXPECTATION_FAILED, &operation, issue))
    }

    /// Requires `predicate(items)`.
    pub fn that<P>(self, predicate: P) -> Result<Self, AffirmError>
    where
        P: FnOnce(&[I::Item]) -> bool,
    {
        let callable = Callable::of(&predicate);
        self.apply(Operation::named("That").with_argument(&callable), predicate, None)
    }

    /// Requires `!predicate(items)`.
    pub fn not<P>(self, predicate: P) -> Result<Self, AffirmError>
    where
        P: FnOnce(&[I::Item]) -> bool,
    {
        let callable = Callable::of(&predicate);
        self.apply(
            Operation::named("Not").with_argument(&callable),
            |items| !predicate(items),
            None,
        )
    }

    /// Requires `predicate(items)`, reporting failure through `issue`.
    pub fn that_or<P, F>(self, predicate: P, issue: F) -> Result<Self, AffirmError>
    where
        P: FnOnce(&[I::Item]) -> bool,
        F: Issue<[I::Item]>,
    {
        let callable = Callable::of(&predicate);
        let issue: &dyn Issue<[I::Item]> = &issue;
        self.apply(
            Operation::named("That").with_argument(&callable),
            predicate,
            Some(issue),
        )
    }

    /// Requires `!predicate(items)`, reporting failure through `issue`.
    pub fn not_or<P, F>(self, predicate: P, issue: F) -> Result<Self, AffirmError>
    where
        P: FnOnce(&[I::Item]) -> bool,
        F: Issue<[I::Item]>,
    {
        let callable = Callable::of(&predicate);
        let issue: &dyn Issue<[I::Item]> = &issue;
        self.apply(
            Operation::named("Not").with_argument(&callable),
            |items| !predicate(items),
            Some(issue),
        )
    }

    fn count(
        mut self,
        expected: usize,
        issue: Option<&dyn Issue<[I::Item]>>,
    ) -> Result<Self, AffirmError> {
        let observed = self.buffer.observe_count(expected);
        if observed.is(expected) {
            return Ok(self);
        }
        Err(self.count_failure(expected, observed, issue))
    }

    // Renders only what has been read; `actual` carries the observed length.
    fn count_failure(
        &self,
        expected: usize,
        observed: ObservedCount,
        issue: Option<&dyn Issue<[I::Item]>>,
    ) -> AffirmError {
        let operation = Operation::named("Count").with_argument(&expected);
        let info = expectation_failure(
            codes::COUNT_MISMATCH,
            &operation,
            self.buffer.buffered(),
            issue,
            &self.renderer,
        )
        .with_context("actual", observed.describe());
        raise(info)
    }

    /// Requires exactly `expected` items.
    ///
    /// Reads no more than `expected + 1` items when the source does not
    /// report an exact length.
    pub fn has_count(self, expected: usize) -> Result<Self, AffirmError> {
        self.count(expected, None)
    }

    /// Requires exactly `expected` items, reporting failure through `issue`.
    pub fn has_count_or<F>(self, expected: usize, issue: F) -> Result<Self, AffirmError>
    where
        F: Issue<[I::Item]>,
    {
        let issue: &dyn Issue<[I::Item]> = &issue;
        self.count(expected, Some(issue))
    }

    /// Requires exactly `expected` items, then `predicate` over them.
    ///
    /// A source whose length disagrees with its `size_hint` fails the count
    /// once it has been read in full.
    pub fn that_exactly<P>(self, expected: usize, predicate: P) -> Result<Self, AffirmError>
    where
        P: FnOnce(&[I::Item]) -> bool,
    {
        let callable = Callable::of(&predicate);
        let mut chain = self.count(expected, None)?;
        if chain.buffer.fill_exact(expected).is_none() {
            let actual = ObservedCount::Exact(chain.buffer.buffered().len());
            return Err(chain.count_failure(expected, actual, None));
        }
        chain.apply(
            Operation::named("Exactly")
                .with_argument(&expected)
                .with_argument(&callable),
            predicate,
            None,
        )
    }

    fn find<P>(mut self, operation: Operation<'_>, predicate: P) -> Result<Self, AffirmError>
    where
        P: FnMut(&I::Item) -> bool,
    {
        if self.buffer.position(predicate).is_some() {
            return Ok(self);
        }
        Err(self.fail(codes::EXPECTATION_FAILED, &operation, None))
    }

    /// Requires at least one item matching `predicate`.
    pub fn that_any<P>(self, predicate: P) -> Result<Self, AffirmError>
    where
        P: FnMut(&I::Item) -> bool,
    {
        let callable = Callable::of(&predicate);
        self.find(Operation::named("Any").with_argument(&callable), predicate)
    }

    /// Requires every item to match `predicate`.
    ///
    /// Reading stops at the first miss, so the failure renders the items up
    /// to and including it.
    pub fn that_all<P>(mut self, mut predicate: P) -> Result<Self, AffirmError>
    where
        P: FnMut(&I::Item) -> bool,
    {
        let callable = Callable::of(&predicate);
        if self.buffer.position(|item| !predicate(item)).is_none() {
            return Ok(self);
        }
        let operation = Operation::named("All").with_argument(&callable);
        Err(self.fail(codes::EXPECTATION_FAILED, &operation, None))
    }

    /// Requires an item equal to `needle` under `comparer`.
    pub fn contains_by<C>(self, needle: &I::Item, comparer: &C) -> Result<Self, AffirmError>
    where
        C: EqualityComparer<I::Item>,
    {
        self.find(
            Operation::named("Contains").with_argument(needle),
            |item| comparer.equals(item, needle),
        )
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

impl<K, V, I> ExpectMany<I>
where
    I: Iterator<Item = (K, V)>,
    K: Diagnostic,
    V: Diagnostic,
{
    /// Requires a pair equal to `entry` under `comparer`.
    pub fn contains_pair_by<KC, VC>(
        self,
        entry: &(K, V),
        comparer: &PairComparer<KC, VC>,
    ) -> Result<Self, AffirmError>
    where
        KC: EqualityComparer<K>,
        VC: EqualityComparer<V>,
    {
        self.find(
            Operation::named("ContainsPair").with_argument(entry),
            |item| comparer.equals(item, entry),
        )
    }

    /// Requires a pair whose key equals `key` under `comparer`.
    pub fn contains_key_by<C>(self, key: &K, comparer: &C) -> Result<Self, AffirmError>
    where
        C: EqualityComparer<K>,
    {
        self.find(
            Operation::named("ContainsKey").with_argument(key),
            |(k, _)| comparer.equals(k, key),
        )
    }
}
