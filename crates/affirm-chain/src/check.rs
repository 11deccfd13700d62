/// Boolean-accumulating continuation over a single value.
///
/// Each `.that` / `.not` ANDs one predicate into the running outcome. Once
/// the outcome is false, later predicates are not invoked.
#[must_use = "a check chain does nothing until its result() is read"]
#[derive(Debug, Clone)]
pub struct Check<T> {
    target: T,
    outcome: bool,
}

/// Starts a check chain on `value`.
pub fn check<T>(value: T) -> Check<T> {
    Check {
        target: value,
        outcome: true,
    }
}

impl<T> Check<T> {
    /// ANDs `predicate(target)` into the outcome.
    pub fn that<P>(mut self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.outcome {
            self.outcome = predicate(&self.target);
        } else {
            tracing::trace!("check already failed; predicate skipped");
        }
        self
    }

    /// ANDs `!predicate(target)` into the outcome.
    pub fn not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.that(|target| !predicate(target))
    }

    /// The conjunction of every predicate applied so far.
    pub fn result(&self) -> bool {
        self.outcome
    }

    /// The value under test.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Gives back the value under test.
    pub fn into_inner(self) -> T {
        self.target
    }
}
