use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::shape::{Diagnostic, Shape};

macro_rules! scalar_diagnostic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Diagnostic for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(self.to_string())
                }
            }
        )*
    };
}

scalar_diagnostic!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    std::num::NonZeroU32, std::num::NonZeroU64, std::num::NonZeroUsize,
);

impl Diagnostic for std::time::Duration {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(format!("{self:?}"))
    }
}

impl Diagnostic for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl Diagnostic for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self.as_str())
    }
}

impl Diagnostic for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self.as_ref())
    }
}

impl Diagnostic for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Char(*self)
    }
}

impl Diagnostic for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }
}

impl<T: Diagnostic> Diagnostic for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Null,
        }
    }

    fn pair_parts(&self) -> Option<(&dyn Diagnostic, &dyn Diagnostic)> {
        self.as_ref().and_then(|value| value.pair_parts())
    }
}

impl<K: Diagnostic, V: Diagnostic> Diagnostic for (K, V) {
    fn shape(&self) -> Shape<'_> {
        Shape::Pair(&self.0, &self.1)
    }

    fn pair_parts(&self) -> Option<(&dyn Diagnostic, &dyn Diagnostic)> {
        Some((&self.0 as &dyn Diagnostic, &self.1 as &dyn Diagnostic))
    }

    fn pair_shaped() -> bool
    where
        Self: Sized,
    {
        true
    }
}

macro_rules! pointer_diagnostic {
    ($($ptr:ident),*) => {
        $(
            impl<T: Diagnostic + ?Sized> Diagnostic for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }

                fn pair_parts(&self) -> Option<(&dyn Diagnostic, &dyn Diagnostic)> {
                    (**self).pair_parts()
                }
            }
        )*
    };
}

pointer_diagnostic!(Box, Rc, Arc);

impl<T: Diagnostic + ?Sized> Diagnostic for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn pair_parts(&self) -> Option<(&dyn Diagnostic, &dyn Diagnostic)> {
        (**self).pair_parts()
    }
}

impl<T: Diagnostic + ?Sized> Diagnostic for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn pair_parts(&self) -> Option<(&dyn Diagnostic, &dyn Diagnostic)> {
        (**self).pair_parts()
    }
}

/// Classifies a sequence by its element type; pair elements take priority.
pub(crate) fn sequence_shape<'a, T, I>(items: I) -> Shape<'a>
where
    T: Diagnostic + 'a,
    I: Iterator<Item = &'a T>,
{
    if T::pair_shaped() {
        Shape::Pairs(items.filter_map(|item| item.pair_parts()).collect())
    } else {
        Shape::Items(items.map(|item| item as &dyn Diagnostic).collect())
    }
}

impl<T: Diagnostic> Diagnostic for [T] {
    fn shape(&self) -> Shape<'_> {
        sequence_shape(self.iter())
    }
}

impl<T: Diagnostic, const N: usize> Diagnostic for [T; N] {
    fn shape(&self) -> Shape<'_> {
        sequence_shape(self.iter())
    }
}

impl<T: Diagnostic> Diagnostic for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        sequence_shape(self.iter())
    }
}

impl<T: Diagnostic> Diagnostic for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        sequence_shape(self.iter())
    }
}

impl<T: Diagnostic> Diagnostic for LinkedList<T> {
    fn shape(&self) -> Shape<'_> {
        sequence_shape(self.iter())
    }
}

impl<T: Diagnostic> Diagnostic for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        sequence_shape(self.iter())
    }
}

impl<T: Diagnostic, S> Diagnostic for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        sequence_shape(self.iter())
    }
}

impl<K: Diagnostic, V: Diagnostic> Diagnostic for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pairs(
            self.iter()
                .map(|(k, v)| (k as &dyn Diagnostic, v as &dyn Diagnostic))
                .collect(),
        )
    }
}

impl<K: Diagnostic, V: Diagnostic, S> Diagnostic for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pairs(
            self.iter()
                .map(|(k, v)| (k as &dyn Diagnostic, v as &dyn Diagnostic))
                .collect(),
        )
    }
}
