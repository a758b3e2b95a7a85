//! Query documents: the accumulated clause fields of one statement, and
//! ordered sequences of them for multi-statement batches.

mod reducer;


use crate::{fields::FieldMap, value::Value};
use derive_more::{Deref, Display};
use serde::Serialize;
use serde_json::Value as JsonValue;

// re-exports
pub use reducer::{Merge, merge};

///
/// QueryDocument
///
/// One query statement. Every field is independently present or absent;
/// mapping fields and `only` are absent when empty.
/// Documents are values: clause application always yields a new document.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(rename = "as", skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(skip_serializing_if = "FieldMap::is_empty")]
    pub headers: FieldMap<Value>,

    /// Filter parameters, in insertion order.
    #[serde(skip_serializing_if = "FieldMap::is_empty")]
    pub with: FieldMap<Value>,

    /// Projected fields. Grows by concatenation; duplicates are kept.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_errors: Option<bool>,

    #[serde(skip_serializing_if = "FieldMap::is_empty")]
    pub modifiers: FieldMap<Value>,

    #[serde(skip_serializing_if = "ApplyBindings::is_empty")]
    pub apply: ApplyBindings,
}

impl QueryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain mapping form of this document.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }

    /// True if no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

///
/// BlockKind
///
/// Clause kinds an apply operator can decorate.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum BlockKind {
    #[display("with")]
    With,

    #[display("only")]
    Only,
}

///
/// ApplyBinding
///
/// One operator bound to a with-parameter or only-filter by name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApplyBinding {
    pub kind: BlockKind,
    pub target: String,
    pub operator: String,
}

impl ApplyBinding {
    pub fn new(kind: BlockKind, target: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            operator: operator.into(),
        }
    }
}

///
/// ApplyBindings
///
/// Operator names keyed by block kind, then by the literal target name.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ApplyBindings {
    #[serde(skip_serializing_if = "FieldMap::is_empty")]
    pub with: FieldMap<String>,

    #[serde(skip_serializing_if = "FieldMap::is_empty")]
    pub only: FieldMap<String>,
}

impl ApplyBindings {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with.is_empty() && self.only.is_empty()
    }

    #[must_use]
    pub const fn for_kind(&self, kind: BlockKind) -> &FieldMap<String> {
        match kind {
            BlockKind::With => &self.with,
            BlockKind::Only => &self.only,
        }
    }

    /// Operator bound to `target` within `kind`, if any.
    #[must_use]
    pub fn operator(&self, kind: BlockKind, target: &str) -> Option<&str> {
        self.for_kind(kind).get(target).map(String::as_str)
    }

    /// Record a binding, replacing any earlier one for the same target.
    pub fn bind(&mut self, binding: ApplyBinding) {
        let slot = match binding.kind {
            BlockKind::With => &mut self.with,
            BlockKind::Only => &mut self.only,
        };
        slot.insert(binding.target, binding.operator);
    }
}

impl From<ApplyBinding> for ApplyBindings {
    fn from(binding: ApplyBinding) -> Self {
        let mut bindings = Self::default();
        bindings.bind(binding);

        bindings
    }
}

///
/// QuerySequence
///
/// Ordered, flat batch of documents. Concatenation never nests.
///

#[derive(Clone, Debug, Default, Deref, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuerySequence(Vec<QueryDocument>);

impl QuerySequence {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a document or every document of another sequence.
    #[must_use]
    pub fn concat(mut self, other: impl Into<Self>) -> Self {
        self.0.extend(other.into().0);
        self
    }

    #[must_use]
    pub fn into_documents(self) -> Vec<QueryDocument> {
        self.0
    }
}

/// Flatten two documents or sequences into one sequence, without merging.
pub fn concat(left: impl Into<QuerySequence>, right: impl Into<QuerySequence>) -> QuerySequence {
    left.into().concat(right)
}

impl From<QueryDocument> for QuerySequence {
    fn from(document: QueryDocument) -> Self {
        Self(vec![document])
    }
}

impl From<Option<QueryDocument>> for QuerySequence {
    fn from(document: Option<QueryDocument>) -> Self {
        Self(document.into_iter().collect())
    }
}

impl From<Vec<QueryDocument>> for QuerySequence {
    fn from(documents: Vec<QueryDocument>) -> Self {
        Self(documents)
    }
}

impl FromIterator<QueryDocument> for QuerySequence {
    fn from_iter<I: IntoIterator<Item = QueryDocument>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for QuerySequence {
    type Item = QueryDocument;
    type IntoIter = std::vec::IntoIter<QueryDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
