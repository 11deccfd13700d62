#![deny(missing_docs)]

//! Diagnostic value formatter for affirm failure messages.
//!
//! Values report a [`Shape`] through the [`Diagnostic`] trait and the
//! [`Renderer`] turns shapes into text:
//!
//! ```text
//! None            -> <null>
//! "hi"            -> "hi"
//! '\n'            -> \u000A
//! ("a", 1)        -> ["a"] = 1
//! vec![1, 2, 3]   -> [1, 2, 3]
//! BTreeMap::new() -> {}
//! ```

mod callable;
mod config;
mod impls;
mod renderer;
mod shape;

pub use callable::{callable_label, Callable};
pub use config::{RenderConfig, DEFAULT_INDENT, DEFAULT_MAX_INLINE_WIDTH};
pub use renderer::{render, Renderer};
pub use shape::{Diagnostic, Shape};
