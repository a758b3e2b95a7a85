//! Block factory: one pure constructor per clause, each producing a
//! single-key fragment of a query document.

use crate::{
    document::{ApplyBinding, ApplyBindings, QueryDocument},
    fields::FieldMap,
    value::Value,
};
use std::fmt;

///
/// ClauseKind
///
/// Top-level key of a fragment.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClauseKind {
    From,
    As,
    Timeout,
    Headers,
    With,
    Only,
    Hidden,
    IgnoreErrors,
    Modifiers,
    Apply,
    Document,
}

impl ClauseKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::As => "as",
            Self::Timeout => "timeout",
            Self::Headers => "headers",
            Self::With => "with",
            Self::Only => "only",
            Self::Hidden => "hidden",
            Self::IgnoreErrors => "ignoreErrors",
            Self::Modifiers => "modifiers",
            Self::Apply => "apply",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Fragment
///
/// Partial document produced by one clause invocation, before merging.
/// `Document` carries a whole seeded document; `Apply` an operator binding.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    From(String),
    Alias(String),
    Timeout(u64),
    Headers(FieldMap<Value>),
    With { name: String, value: Value },
    Only(Vec<String>),
    Hidden(bool),
    IgnoreErrors(bool),
    Modifiers(FieldMap<Value>),
    Apply(ApplyBinding),
    Document(QueryDocument),
}

impl Fragment {
    #[must_use]
    pub const fn kind(&self) -> ClauseKind {
        match self {
            Self::From(_) => ClauseKind::From,
            Self::Alias(_) => ClauseKind::As,
            Self::Timeout(_) => ClauseKind::Timeout,
            Self::Headers(_) => ClauseKind::Headers,
            Self::With { .. } => ClauseKind::With,
            Self::Only(_) => ClauseKind::Only,
            Self::Hidden(_) => ClauseKind::Hidden,
            Self::IgnoreErrors(_) => ClauseKind::IgnoreErrors,
            Self::Modifiers(_) => ClauseKind::Modifiers,
            Self::Apply(_) => ClauseKind::Apply,
            Self::Document(_) => ClauseKind::Document,
        }
    }
}

impl From<Fragment> for QueryDocument {
    fn from(fragment: Fragment) -> Self {
        match fragment {
            Fragment::From(endpoint) => Self {
                from: Some(endpoint),
                ..Self::default()
            },
            Fragment::Alias(alias) => Self {
                alias: Some(alias),
                ..Self::default()
            },
            Fragment::Timeout(timeout) => Self {
                timeout: Some(timeout),
                ..Self::default()
            },
            Fragment::Headers(headers) => Self {
                headers,
                ..Self::default()
            },
            Fragment::With { name, value } => Self {
                with: FieldMap::from_iter([(name, value)]),
                ..Self::default()
            },
            Fragment::Only(only) => Self {
                only,
                ..Self::default()
            },
            Fragment::Hidden(hidden) => Self {
                hidden: Some(hidden),
                ..Self::default()
            },
            Fragment::IgnoreErrors(ignore_errors) => Self {
                ignore_errors: Some(ignore_errors),
                ..Self::default()
            },
            Fragment::Modifiers(modifiers) => Self {
                modifiers,
                ..Self::default()
            },
            Fragment::Apply(binding) => Self {
                apply: ApplyBindings::from(binding),
                ..Self::default()
            },
            Fragment::Document(document) => document,
        }
    }
}

///
/// IntoFilters
///
/// Field names accepted by `only`: one name, or an ordered list of names.
///

pub trait IntoFilters {
    fn into_filters(self) -> Vec<String>;
}

impl IntoFilters for &str {
    fn into_filters(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoFilters for String {
    fn into_filters(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoFilters for &String {
    fn into_filters(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: Into<String>> IntoFilters for Vec<T> {
    fn into_filters(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String>, const N: usize> IntoFilters for [T; N] {
    fn into_filters(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Clone + Into<String>> IntoFilters for &[T] {
    fn into_filters(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}

///
/// CONSTRUCTORS
///

#[must_use]
pub fn from(endpoint: impl Into<String>) -> Fragment {
    Fragment::From(endpoint.into())
}

/// The `as` clause.
#[must_use]
pub fn alias(alias: impl Into<String>) -> Fragment {
    Fragment::Alias(alias.into())
}

#[must_use]
pub const fn timeout(timeout: u64) -> Fragment {
    Fragment::Timeout(timeout)
}

/// Headers from `(name, value)` pairs; a repeated name keeps the last value.
pub fn headers<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Fragment
where
    K: Into<String>,
    V: Into<Value>,
{
    Fragment::Headers(collect_pairs(pairs))
}

#[must_use]
pub fn with(name: impl Into<String>, value: impl Into<Value>) -> Fragment {
    Fragment::With {
        name: name.into(),
        value: value.into(),
    }
}

/// Partially applied `with`: binds the parameter name, awaits the value.
pub fn with_param(name: impl Into<String>) -> impl Fn(Value) -> Fragment + Clone {
    let name = name.into();

    move |value| with(name.clone(), value)
}

/// `only` with one name or a list of names; a single name becomes a
/// one-element list.
pub fn only(filters: impl IntoFilters) -> Fragment {
    Fragment::Only(filters.into_filters())
}

#[must_use]
pub const fn hidden(hidden: bool) -> Fragment {
    Fragment::Hidden(hidden)
}

#[must_use]
pub const fn ignore_errors(ignore_errors: bool) -> Fragment {
    Fragment::IgnoreErrors(ignore_errors)
}

/// The `use` clause, from `(name, value)` pairs.
pub fn modifiers<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Fragment
where
    K: Into<String>,
    V: Into<Value>,
{
    Fragment::Modifiers(collect_pairs(pairs))
}

fn collect_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> FieldMap<Value>
where
    K: Into<String>,
    V: Into<Value>,
{
    pairs.into_iter().map(|(k, v)| (k, v.into())).collect()
}

///
/// TESTS
///
