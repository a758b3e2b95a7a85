//! Fluent query chains.
//!
//! Every clause method consumes the chain and returns a new one wrapping the
//! extended builder. Clone a `Query` to branch it.

use crate::core::{
    QueryError,
    block::{self, Fragment, IntoFilters},
    builder::{self, FragmentBuilder, IntoBuilder},
    document::{QueryDocument, QuerySequence},
    provenance::{self, ClauseRecord},
    serialize,
    value::Value,
};
use serde::{Serialize, Serializer};
use std::fmt;

///
/// Query
///
/// Chainable wrapper over a fragment builder.
/// Evaluation is deferred until a terminal method is called.
///

#[derive(Clone, Debug)]
pub struct Query {
    builder: FragmentBuilder,
}

impl Query {
    /// Empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::from_builder(FragmentBuilder::empty())
    }

    /// Chain seeded with an initial document.
    #[must_use]
    pub fn from_document(document: QueryDocument) -> Self {
        Self::from_builder(document.into_builder())
    }

    /// Chain continuing an existing builder.
    #[must_use]
    pub const fn from_builder(builder: FragmentBuilder) -> Self {
        Self { builder }
    }

    fn push(self, fragment: Fragment) -> Self {
        Self::from_builder(builder::extend(self.builder, fragment))
    }

    // ------------------------------------------------------------------
    // Clauses
    // ------------------------------------------------------------------

    /// The `from` clause. Shadows `From::from` in `Query::from(..)` path
    /// calls; use `Query::from_document` or `.into()` for conversions.
    #[must_use]
    pub fn from(self, endpoint: impl Into<String>) -> Self {
        self.push(block::from(endpoint))
    }

    /// The `as` clause.
    #[must_use]
    pub fn alias(self, alias: impl Into<String>) -> Self {
        self.push(block::alias(alias))
    }

    #[must_use]
    pub fn with(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(block::with(name, value))
    }

    #[must_use]
    pub fn only(self, filters: impl IntoFilters) -> Self {
        self.push(block::only(filters))
    }

    #[must_use]
    pub fn headers<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.push(block::headers(pairs))
    }

    #[must_use]
    pub fn timeout(self, timeout: u64) -> Self {
        self.push(block::timeout(timeout))
    }

    #[must_use]
    pub fn hidden(self) -> Self {
        self.push(block::hidden(true))
    }

    #[must_use]
    pub fn ignore_errors(self) -> Self {
        self.push(block::ignore_errors(true))
    }

    /// The `use` clause.
    #[must_use]
    pub fn modifiers<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.push(block::modifiers(pairs))
    }

    /// Bind `operator` to the with-parameter or only-filter added last.
    pub fn apply(self, operator: impl Into<String>) -> Result<Self, QueryError> {
        let builder = builder::apply_operator(operator, self.builder)?;

        Ok(Self::from_builder(builder))
    }

    // ------------------------------------------------------------------
    // Terminals
    // ------------------------------------------------------------------

    /// Force the chain into one document.
    #[must_use]
    pub fn to_query_map(&self) -> QueryDocument {
        builder::evaluate(&self.builder, QueryDocument::default())
    }

    #[must_use]
    pub fn to_query_string(&self) -> String {
        serialize::stringify(self.to_query_map())
    }

    #[must_use]
    pub const fn builder(&self) -> &FragmentBuilder {
        &self.builder
    }

    /// Which clause produced each fragment, in chain order.
    #[must_use]
    pub fn provenance(&self) -> Vec<ClauseRecord> {
        provenance::records(&self.builder.force())
    }

    /// Batch this query with another query, document, or sequence.
    /// Fields are never merged across statements.
    #[must_use]
    pub fn concat(&self, other: impl Into<QuerySequence>) -> QuerySequence {
        QuerySequence::from(self.to_query_map()).concat(other)
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

// Serializes as the evaluated document.
impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_query_map().serialize(serializer)
    }
}

impl IntoBuilder for Query {
    fn into_builder(self) -> FragmentBuilder {
        self.builder
    }
}

impl IntoBuilder for &Query {
    fn into_builder(self) -> FragmentBuilder {
        self.builder.clone()
    }
}

// `Query::from(x)` resolves to the inherent `from` clause method; convert
// with `.into()`, `From::from`, or `Query::from_document` instead.
impl From<QueryDocument> for Query {
    fn from(document: QueryDocument) -> Self {
        Self::from_document(document)
    }
}

impl From<FragmentBuilder> for Query {
    fn from(builder: FragmentBuilder) -> Self {
        Self::from_builder(builder)
    }
}

impl From<Query> for QueryDocument {
    fn from(query: Query) -> Self {
        query.to_query_map()
    }
}

impl From<Query> for QuerySequence {
    fn from(query: Query) -> Self {
        Self::from(query.to_query_map())
    }
}

///
/// TESTS
///
