#![deny(missing_docs)]
#![doc = "Predicate chaining continuations. `check` chains fold predicates into a boolean; \
`expect` chains stop at the first rejected predicate with a rendered, typed failure."]

mod buffer;
mod check;
mod check_many;
mod expect;
mod expect_many;
/// Operation descriptors and failure message resolution.
pub mod issue;

pub use check::{check, Check};
pub use check_many::{check_many, check_pairs, CheckMany, CheckPairs};
pub use expect::{expect, Expect};
pub use expect_many::{expect_many, ExpectMany};
pub use issue::{default_message, resolve_issue, Issue, IssueMany, Operation};

pub use affirm_compare::PairComparer;
pub use affirm_core::{AffirmError, DefaultEquality, EqualityComparer, ErrorInfo};
pub use affirm_render::{render, Diagnostic, RenderConfig, Renderer};
