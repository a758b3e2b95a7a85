//! ## Crate layout
//! - `core`: values, query documents, fragment merging, deferred builders,
//!   multi-arity dispatch, clause provenance, and the serializer.
//! - `fluent`: the chainable [`Query`] object.
//! - `point_free`: standalone clause functions that take the upstream input
//!   last and compose with [`point_free::pipe`].
//!
//! Both surfaces drive the same builder engine and render identical text.

pub use restql_core as core;

pub mod fluent;
pub mod point_free;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// re-exports
pub use crate::core::{
    QueryError,
    document::{QueryDocument, QuerySequence, concat},
    serialize::stringify,
};
pub use fluent::Query;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        Query, QueryError,
        core::{
            builder::IntoBuilder as _,
            document::Merge as _,
            prelude::*,
        },
        point_free::{Clause, pipe},
        stringify,
    };
}
