//! Core engine for restql: values, query documents, fragment merging,
//! deferred builders, and the canonical query-string serializer.
#![warn(unreachable_pub)]

pub mod arity;
pub mod block;
pub mod builder;
pub mod document;
pub mod error;
pub mod fields;
pub mod provenance;
pub mod serialize;
pub mod value;

// re-exports
pub use error::QueryError;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No builders, reducers, or serializers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        block::{ClauseKind, Fragment},
        document::{ApplyBindings, BlockKind, QueryDocument, QuerySequence},
        fields::FieldMap,
        value::Value,
    };
}
