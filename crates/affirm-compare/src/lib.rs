#![deny(missing_docs)]
#![doc = "Composable equality strategies: key/value pair comparers built from optional component comparers."]

mod closure;
mod defaulting;
mod pair;

pub use closure::{by_projection, FnComparer, Projected};
pub use defaulting::OrDefault;
pub use pair::PairComparer;

/// Re-export of the comparer contract for downstream convenience.
pub use affirm_core::{DefaultEquality, EqualityComparer};
