mod format;
mod json;

#[cfg(test)]
mod tests;

use crate::fields::FieldMap;
use regex::Regex;
use std::{fmt, sync::LazyLock};

// re-exports
pub use format::format_value;

///
/// CONSTANTS
///

/// `identifier.identifier`, e.g. `hero.id`.
static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+\.\w+$").expect("reference pattern is valid"));

/// True if `text` names a field of another statement rather than a literal.
#[must_use]
pub fn is_reference(text: &str) -> bool {
    REFERENCE_PATTERN.is_match(text)
}

///
/// Value
///
/// Parameter, header, and modifier values carried by a query document.
/// `Reference` is kept apart from `Text` so cross-statement references
/// render unquoted while literals render quoted.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    /// Ordered list; rendered through the generic JSON encoder.
    List(Vec<Self>),
    /// Nested mapping; rendered recursively by the value formatter.
    Map(FieldMap<Self>),
    Reference(String),
    Text(String),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Text value that is never treated as a reference by conversion.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Cross-statement field reference, rendered verbatim.
    #[must_use]
    pub fn reference(path: impl Into<String>) -> Self {
        Self::Reference(path.into())
    }

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `Value::Map` from key/value pairs, last write wins per key.
    pub fn from_pairs<K, T>(pairs: impl IntoIterator<Item = (K, T)>) -> Self
    where
        K: Into<String>,
        T: Into<Self>,
    {
        Self::Map(pairs.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    ///
    /// INSPECTION
    ///

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Reference(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// True for references and for text shaped like one.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        match self {
            Self::Reference(_) => true,
            Self::Text(s) => is_reference(s),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(self))
    }
}

///
/// CONVERSIONS
///

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        if is_reference(text) {
            Self::Reference(text.to_string())
        } else {
            Self::Text(text.to_string())
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        if is_reference(&text) {
            Self::Reference(text)
        } else {
            Self::Text(text)
        }
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_int {
    ( $( $t:ty ),* $(,)? ) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::from_list(items)
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::from_list(items)
    }
}

impl<T: Clone + Into<Self>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Self::from_list(items.iter().cloned())
    }
}

impl From<FieldMap<Self>> for Value {
    fn from(map: FieldMap<Self>) -> Self {
        Self::Map(map)
    }
}
