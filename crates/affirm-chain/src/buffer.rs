//! Single-pass sequence buffering.
//!
//! A [`SequenceBuffer`] owns the caller's iterator and every item pulled from
//! it. Items are read on demand and kept, so any number of operations on the
//! same continuation enumerate the source at most once in total.

/// Length of a sequence as far as it has been observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedCount {
    /// The full length is known.
    Exact(usize),
    /// Reading stopped after this many items; more may follow.
    AtLeast(usize),
}

impl ObservedCount {
    /// Whether the observed length equals `expected`.
    pub fn is(&self, expected: usize) -> bool {
        matches!(self, ObservedCount::Exact(len) if *len == expected)
    }

    /// Human readable form used in failure context.
    pub fn describe(&self) -> String {
        match self {
            ObservedCount::Exact(len) => len.to_string(),
            ObservedCount::AtLeast(len) => format!("at least {len}"),
        }
    }
}

/// Lazily filled, indexable view over a single-pass iterator.
pub struct SequenceBuffer<I: Iterator> {
    items: Vec<I::Item>,
    rest: Option<I>,
}

impl<I: Iterator> std::fmt::Debug for SequenceBuffer<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceBuffer")
            .field("buffered", &self.items.len())
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

impl<I: Iterator> SequenceBuffer<I> {
    /// Wraps `source` without reading from it.
    pub fn new(source: I) -> Self {
        Self {
            items: Vec::new(),
            rest: Some(source),
        }
    }

    /// Items read so far.
    pub fn buffered(&self) -> &[I::Item] {
        &self.items
    }

    /// Whether the source has reported its end.
    pub fn is_exhausted(&self) -> bool {
        self.rest.is_none()
    }

    /// Total length if known without further reading.
    ///
    /// The remaining source counts as known when its `size_hint` bounds
    /// coincide.
    pub fn known_len(&self) -> Option<usize> {
        match &self.rest {
            None => Some(self.items.len()),
            Some(rest) => match rest.size_hint() {
                (lower, Some(upper)) if lower == upper => Some(self.items.len() + lower),
                _ => None,
            },
        }
    }

    fn pull(&mut self) -> bool {
        let Some(rest) = self.rest.as_mut() else {
            return false;
        };
        match rest.next() {
            Some(item) => {
                self.items.push(item);
                true
            }
            None => {
                self.rest = None;
                false
            }
        }
    }

    /// Reads until at least `len` items are buffered or the source ends.
    pub fn fill_to(&mut self, len: usize) -> usize {
        let before = self.items.len();
        while self.items.len() < len && self.pull() {}
        if self.items.len() > before {
            tracing::trace!(
                buffered = self.items.len(),
                exhausted = self.is_exhausted(),
                "sequence buffer filled"
            );
        }
        self.items.len()
    }

    /// Reads the remaining source and returns every item.
    pub fn fill_all(&mut self) -> &[I::Item] {
        self.fill_to(usize::MAX);
        &self.items
    }

    /// Reads the remaining source and returns every item if there are exactly
    /// `expected` of them.
    ///
    /// `size_hint` is advisory, so a count taken from it is confirmed here.
    pub fn fill_exact(&mut self, expected: usize) -> Option<&[I::Item]> {
        let items = self.fill_all();
        if items.len() == expected {
            return Some(items);
        }
        tracing::debug!(
            expected,
            actual = items.len(),
            "sequence length disagrees with its size hint"
        );
        None
    }

    /// Counts the sequence against `expected`, reading no more than
    /// `expected + 1` items when the length is not known up front.
    pub fn observe_count(&mut self, expected: usize) -> ObservedCount {
        if let Some(len) = self.known_len() {
            return ObservedCount::Exact(len);
        }
        let limit = expected.saturating_add(1);
        let read = self.fill_to(limit);
        if self.is_exhausted() {
            ObservedCount::Exact(read)
        } else {
            ObservedCount::AtLeast(read)
        }
    }

    /// Index of the first item matching `predicate`, reading only as far as
    /// needed.
    pub fn position<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&I::Item) -> bool,
    {
        if let Some(idx) = self.items.iter().position(&mut predicate) {
            return Some(idx);
        }
        while self.pull() {
            let idx = self.items.len() - 1;
            if predicate(&self.items[idx]) {
                return Some(idx);
            }
        }
        None
    }

    /// Consumes the buffer, draining whatever the source still holds.
    pub fn into_items(mut self) -> Vec<I::Item> {
        self.fill_all();
        self.items
    }
}
