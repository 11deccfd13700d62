use affirm_core::errors::{codes, AffirmError};
use affirm_render::{Callable, Diagnostic, Renderer};

use crate::issue::{expectation_failure, raise, Issue, Operation};

/// Failing continuation over a single value.
///
/// Every operator returns the continuation on success and an
/// [`AffirmError::Expectation`] on failure, so chains compose with `?`.
#[derive(Debug, Clone)]
pub struct Expect<T> {
    target: T,
    renderer: Renderer,
}

/// Starts an expectation chain on `value`.
pub fn expect<T: Diagnostic>(value: T) -> Expect<T> {
    Expect {
        target: value,
        renderer: Renderer::default(),
    }
}

impl<T: Diagnostic> Expect<T> {
    /// Uses `renderer` for failure messages.
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Evaluates `predicate` as the named `operation`.
    ///
    /// This is the primitive every operator is written against. On failure the
    /// message comes from `issue` when supplied, otherwise it is synthesized
    /// from the operation and the rendered target.
    pub fn apply<P>(
        self,
        operation: Operation<'_>,
        predicate: P,
        issue: Option<&dyn Issue<T>>,
    ) -> Result<Self, AffirmError>
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&self.target) {
            return Ok(self);
        }
        Err(raise(expectation_failure(
            codes::EXPECTATION_FAILED,
            &operation,
            &self.target,
            issue,
            &self.renderer,
        )))
    }

    /// Requires `predicate(target)`.
    pub fn that<P>(self, predicate: P) -> Result<Self, AffirmError>
    where
        P: FnOnce(&T) -> bool,
    {
        let callable = Callable::of(&predicate);
        self.apply(Operation::named("That").with_argument(&callable), predicate, None)
    }

    /// Requires `!predicate(target)`.
    pub fn not<P>(self, predicate: P) -> Result<Self, AffirmError>
    where
        P: FnOnce(&T) -> bool,
    {
        let callable = Callable::of(&predicate);
        self.apply(
            Operation::named("Not").with_argument(&callable),
            |target| !predicate(target),
            None,
        )
    }

    /// Requires `predicate(target)`, reporting failure through `issue`.
    pub fn that_or<P, I>(self, predicate: P, issue: I) -> Result<Self, AffirmError>
    where
        P: FnOnce(&T) -> bool,
        I: Issue<T>,
    {
        let callable = Callable::of(&predicate);
        let issue: &dyn Issue<T> = &issue;
        self.apply(
            Operation::named("That").with_argument(&callable),
            predicate,
            Some(issue),
        )
    }

    /// Requires `!predicate(target)`, reporting failure through `issue`.
    pub fn not_or<P, I>(self, predicate: P, issue: I) -> Result<Self, AffirmError>
    where
        P: FnOnce(&T) -> bool,
        I: Issue<T>,
    {
        let callable = Callable::of(&predicate);
        let issue: &dyn Issue<T> = &issue;
        self.apply(
            Operation::named("Not").with_argument(&callable),
            |target| !predicate(target),
            Some(issue),
        )
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

#[cfg(test)]
mod tests {
    use super::*;
    use affirm_render::RenderConfig;

    fn is_even(value: &i32) -> bool {
        value % 2 == 0
    }

    #[test]
    fn passing_chain_returns_target() {
        let chain = expect(4).that(is_even).and_then(|e| e.not(|v| *v > 10));
        assert_eq!(chain.map(Expect::into_inner), Ok(4));
    }

    #[test]
    fn default_message_names_operator_and_predicate() {
        let err = expect(3).that(is_even).unwrap_err();
        assert!(err.is_expectation());
        assert_eq!(err.message(), "expected 3 to satisfy That(tests.is_even)");
        assert_eq!(err.info().code, codes::EXPECTATION_FAILED);
        assert_eq!(err.info().context_value("operator"), Some("That"));
        assert_eq!(err.info().context_value("target"), Some("3"));
    }

    #[test]
    fn not_reports_under_its_own_name() {
        let err = expect(2).not(is_even).unwrap_err();
        assert_eq!(err.message(), "expected 2 to satisfy Not(tests.is_even)");
    }

    #[test]
    fn supplied_issue_wins() {
        let err = expect(String::from("abc"))
            .that_or(|s| s.is_empty(), |s: &String| format!("{s} should be empty"))
            .unwrap_err();
        assert_eq!(err.message(), "abc should be empty");
    }

    #[test]
    fn apply_carries_named_arguments() {
        let low = 1;
        let high = 9;
        let operation = Operation::named("Between").with_argument(&low).with_argument(&high);
        let err = expect(12)
            .apply(operation, |v| (low..=high).contains(v), None)
            .unwrap_err();
        assert_eq!(err.message(), "expected 12 to satisfy Between(1, 9)");
        assert_eq!(err.info().context_value("argument.1"), Some("9"));
    }

    #[test]
    fn custom_renderer_shapes_the_target() {
        let renderer = Renderer::new(RenderConfig {
            max_inline_width: 2,
            ..RenderConfig::default()
        });
        let err = expect(vec![10, 20])
            .with_renderer(renderer)
            .that(|v| v.is_empty())
            .unwrap_err();
        assert_eq!(err.info().context_value("target"), Some("[\n  10,\n  20\n]"));
    }
}
