//! Naming of function values in diagnostics.

use crate::shape::{Diagnostic, Shape};

/// A function value captured for rendering.
///
/// Rust functions and closures carry no runtime name, so the label is taken
/// from the static type name of the callable at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callable {
    type_name: &'static str,
}

impl Callable {
    /// Captures the name of the provided function or closure.
    pub fn of<F>(_callable: &F) -> Self {
        Self {
            type_name: std::any::type_name::<F>(),
        }
    }

    /// Full type path the label is derived from.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `<Declaring>.<Member>` label, see [`callable_label`].
    pub fn label(&self) -> String {
        callable_label(self.type_name)
    }
}

impl Diagnostic for Callable {
    fn shape(&self) -> Shape<'_> {
        Shape::Callable(self.type_name)
    }
}

/// Derives the `<Declaring>.<Member>` label from a type path.
///
/// Generic arguments are dropped. When the declaring segment is compiler
/// synthesized (a closure scope, a `<T as Trait>` qualification) only the
/// member is kept.
pub fn callable_label(type_name: &str) -> String {
    let segments = split_path(type_name);
    let member = segments.last().map(|s| strip_generics(s)).unwrap_or(type_name);
    match segments.len().checked_sub(2).map(|idx| strip_generics(segments[idx])) {
        Some(declaring) if !is_synthesized(declaring) => format!("{declaring}.{member}"),
        _ => member.to_string(),
    }
}

// Splits on `::` outside of angle brackets.
fn split_path(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(idx + 1) == Some(&b':') => {
                segments.push(&path[start..idx]);
                idx += 2;
                start = idx;
                continue;
            }
            _ => {}
        }
        idx += 1;
    }
    segments.push(&path[start..]);
    segments
}

fn strip_generics(segment: &str) -> &str {
    if segment.starts_with('<') {
        return segment;
    }
    match segment.find('<') {
        Some(end) => &segment[..end],
        None => segment,
    }
}

fn is_synthesized(segment: &str) -> bool {
    segment.is_empty()
        || !segment
            .chars()
            .all(|c| c == '_' || c.is_alphanumeric())
}
