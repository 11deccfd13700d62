//! The closed classification every diagnostic value resolves to.

/// Runtime shape of a value, used to pick a rendering rule.
///
/// Every [`Diagnostic`] implementation reports exactly one shape; the renderer
/// never inspects concrete types.
pub enum Shape<'a> {
    /// Absent value, rendered as `<null>`.
    Null,
    /// Text, rendered verbatim between double quotes.
    Text(&'a str),
    /// A single character.
    Char(char),
    /// A boolean.
    Bool(bool),
    /// A callable, carrying its full `std::any::type_name`.
    Callable(&'a str),
    /// Any other scalar, already converted with `Display`.
    Scalar(String),
    /// A key/value pair.
    Pair(&'a dyn Diagnostic, &'a dyn Diagnostic),
    /// A sequence of key/value pairs, rendered as a `{ ... }` block.
    Pairs(Vec<(&'a dyn Diagnostic, &'a dyn Diagnostic)>),
    /// A sequence of plain items, rendered as a `[ ... ]` list.
    Items(Vec<&'a dyn Diagnostic>),
}

impl Shape<'_> {
    /// Short label for the shape, used in debug output.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Null => "null",
            Shape::Text(_) => "text",
            Shape::Char(_) => "char",
            Shape::Bool(_) => "bool",
            Shape::Callable(_) => "callable",
            Shape::Scalar(_) => "scalar",
            Shape::Pair(..) => "pair",
            Shape::Pairs(_) => "pairs",
            Shape::Items(_) => "items",
        }
    }
}

impl std::fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Pairs(entries) => write!(f, "Pairs(len={})", entries.len()),
            Shape::Items(items) => write!(f, "Items(len={})", items.len()),
            Shape::Text(text) => write!(f, "Text({text:?})"),
            Shape::Scalar(text) => write!(f, "Scalar({text})"),
            Shape::Callable(name) => write!(f, "Callable({name})"),
            Shape::Char(c) => write!(f, "Char({c:?})"),
            Shape::Bool(b) => write!(f, "Bool({b})"),
            Shape::Null | Shape::Pair(..) => f.write_str(self.kind()),
        }
    }
}

/// Values that can be rendered into failure messages.
///
/// Implementations exist for the standard scalars, strings, options, pairs,
/// and the standard collections. Downstream types opt in by reporting a
/// [`Shape`], typically `Shape::Scalar(self.to_string())`.
pub trait Diagnostic {
    /// Classifies the value.
    fn shape(&self) -> Shape<'_>;

    /// Borrowed key and value when the value is a pair.
    fn pair_parts(&self) -> Option<(&dyn Diagnostic, &dyn Diagnostic)> {
        None
    }

    /// Whether every value of this type is a pair.
    ///
    /// Sequences consult their element type: a sequence of pair-shaped
    /// elements renders as a pair block even when empty.
    fn pair_shaped() -> bool
    where
        Self: Sized,
    {
        false
    }
}
