//! Turning a failed operation into a message.

use std::borrow::Cow;
use std::fmt;

use affirm_core::errors::{AffirmError, ErrorInfo};
use affirm_render::{Diagnostic, Renderer};

/// A named operator together with the arguments it was applied with.
///
/// Arguments are borrowed and only rendered when a failure message is built.
pub struct Operation<'a> {
    name: Cow<'a, str>,
    arguments: Vec<&'a dyn Diagnostic>,
}

impl<'a> Operation<'a> {
    /// Creates an operation without arguments.
    pub fn named(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Appends an argument.
    pub fn with_argument(mut self, argument: &'a dyn Diagnostic) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Operator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments in application order.
    pub fn arguments(&self) -> &[&'a dyn Diagnostic] {
        &self.arguments
    }

    /// `Name(arg, ...)` with every argument rendered.
    pub fn describe(&self, renderer: &Renderer) -> String {
        let arguments: Vec<String> = self
            .arguments
            .iter()
            .map(|argument| renderer.render(*argument))
            .collect();
        format!("{}({})", self.name, arguments.join(", "))
    }
}

impl fmt::Debug for Operation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("arguments", &self.arguments.len())
            .finish()
    }
}

/// Caller supplied failure message.
///
/// Any `Fn(&T) -> String` is an issue that sees only the target. Wrap a
/// closure in [`IssueMany`] to also receive the failing operation's
/// arguments.
pub trait Issue<T: ?Sized> {
    /// Produces the message for a failure on `target`.
    fn describe(&self, target: &T, arguments: &[&dyn Diagnostic]) -> String;
}

impl<T: ?Sized, F> Issue<T> for F
where
    F: Fn(&T) -> String,
{
    fn describe(&self, target: &T, _arguments: &[&dyn Diagnostic]) -> String {
        self(target)
    }
}

/// Issue that receives the operation's arguments alongside the target.
pub struct IssueMany<F>(pub F);

impl<T: ?Sized, F> Issue<T> for IssueMany<F>
where
    F: Fn(&T, &[&dyn Diagnostic]) -> String,
{
    fn describe(&self, target: &T, arguments: &[&dyn Diagnostic]) -> String {
        (self.0)(target, arguments)
    }
}

impl<F> fmt::Debug for IssueMany<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueMany").finish_non_exhaustive()
    }
}

/// Resolves the message for a failed operation.
///
/// A supplied issue is used verbatim; otherwise the message names the
/// operation and renders its arguments and the target.
pub fn resolve_issue<T>(
    operation: &Operation<'_>,
    target: &T,
    issue: Option<&dyn Issue<T>>,
    renderer: &Renderer,
) -> String
where
    T: Diagnostic + ?Sized,
{
    match issue {
        Some(issue) => issue.describe(target, operation.arguments()),
        None => default_message(operation, target, renderer),
    }
}

/// `expected <target> to satisfy <Name>(<args>)`.
pub fn default_message<T>(operation: &Operation<'_>, target: &T, renderer: &Renderer) -> String
where
    T: Diagnostic + ?Sized,
{
    format!(
        "expected {} to satisfy {}",
        renderer.render(target),
        operation.describe(renderer)
    )
}

/// Builds the error raised by an expectation chain.
pub(crate) fn expectation_failure<T>(
    code: &str,
    operation: &Operation<'_>,
    target: &T,
    issue: Option<&dyn Issue<T>>,
    renderer: &Renderer,
) -> ErrorInfo
where
    T: Diagnostic + ?Sized,
{
    let message = resolve_issue(operation, target, issue, renderer);
    let mut info = ErrorInfo::new(code, message)
        .with_context("operator", operation.name())
        .with_context("target", renderer.render(target));
    for (idx, argument) in operation.arguments().iter().enumerate() {
        info = info.with_context(format!("argument.{idx}"), renderer.render(*argument));
    }
    tracing::debug!(operator = %operation.name(), code, "expectation failed");
    info
}

/// Wraps a failure payload into the expectation error family.
pub(crate) fn raise(info: ErrorInfo) -> AffirmError {
    AffirmError::Expectation(info)
}
