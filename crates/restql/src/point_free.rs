//! Point-free clause functions.
//!
//! Each clause comes in two forms: `from(endpoint)` binds the clause
//! arguments and returns a [`Clause`] awaiting its input, and
//! `from_on(endpoint, input)` applies directly with the upstream input last.
//! Inputs are anything that seeds a chain: a document, a builder, a fragment,
//! or a [`Query`].

use crate::{
    Query,
    core::{
        QueryError,
        block::{self, Fragment, IntoFilters},
        builder::{self, IntoBuilder},
        value::Value,
    },
};
use std::{fmt, sync::Arc};

type Step = Arc<dyn Fn(Query) -> Result<Query, QueryError> + Send + Sync>;

///
/// Clause
///
/// Continuation awaiting the upstream chain: an ordered list of steps run
/// one after another, so composing any number of clauses stays flat.
/// Clauses compose left to right with [`Clause::then`] and [`pipe`].
///

#[derive(Clone)]
pub struct Clause {
    steps: Vec<Step>,
}

impl Clause {
    #[must_use]
    pub fn new(step: impl Fn(Query) -> Result<Query, QueryError> + Send + Sync + 'static) -> Self {
        Self {
            steps: vec![Arc::new(step)],
        }
    }

    /// Clause that leaves its input unchanged.
    #[must_use]
    pub const fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    fn push(fragment: Fragment) -> Self {
        Self::new(move |query| Ok(push_on(query, fragment.clone())))
    }

    /// Run this clause against `input`.
    pub fn apply_to(&self, input: impl IntoBuilder) -> Result<Query, QueryError> {
        let mut query = Query::from_builder(input.into_builder());
        for step in &self.steps {
            query = step(query)?;
        }

        Ok(query)
    }

    /// Run this clause, then `next` on its output.
    #[must_use]
    pub fn then(mut self, next: Self) -> Self {
        self.steps.extend(next.steps);
        self
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// Compose `clauses` left to right; an empty list is the identity clause.
#[must_use]
pub fn pipe(clauses: impl IntoIterator<Item = Clause>) -> Clause {
    Clause {
        steps: clauses.into_iter().flat_map(|clause| clause.steps).collect(),
    }
}

fn push_on(input: impl IntoBuilder, fragment: Fragment) -> Query {
    Query::from_builder(builder::extend(input.into_builder(), fragment))
}

///
/// CLAUSES
///

// One continuation form and one direct form per clause.
macro_rules! clause {
    ($(#[$meta:meta])* $name:ident, $on:ident, ($($arg:ident: $ty:ty),*) => $fragment:expr) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name($($arg: $ty),*) -> Clause {
            Clause::push($fragment)
        }

        $(#[$meta])*
        #[must_use]
        pub fn $on($($arg: $ty,)* input: impl IntoBuilder) -> Query {
            push_on(input, $fragment)
        }
    };
}

clause!(from, from_on, (endpoint: impl Into<String>) => block::from(endpoint));

clause!(
    /// The `as` clause.
    alias, alias_on, (alias: impl Into<String>) => block::alias(alias)
);

clause!(timeout, timeout_on, (timeout: u64) => block::timeout(timeout));

clause!(
    headers, headers_on,
    (pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>) => block::headers(pairs)
);

clause!(
    with, with_on,
    (name: impl Into<String>, value: impl Into<Value>) => block::with(name, value)
);

clause!(only, only_on, (filters: impl IntoFilters) => block::only(filters));

clause!(hidden, hidden_on, (hidden: bool) => block::hidden(hidden));

clause!(
    ignore_errors, ignore_errors_on,
    (ignore_errors: bool) => block::ignore_errors(ignore_errors)
);

clause!(
    /// The `use` clause.
    modifiers, modifiers_on,
    (pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>) => block::modifiers(pairs)
);

/// Partially applied `with`: binds the parameter name, awaits the value.
pub fn with_param(name: impl Into<String>) -> impl Fn(Value) -> Clause + Clone {
    let bind = block::with_param(name);

    move |value| Clause::push(bind(value))
}

/// Bind `operator` to the with-parameter or only-filter added last.
#[must_use]
pub fn apply(operator: impl Into<String>) -> Clause {
    let operator = operator.into();

    Clause::new(move |query| query.apply(operator.clone()))
}

pub fn apply_on(operator: impl Into<String>, input: impl IntoBuilder) -> Result<Query, QueryError> {
    apply(operator).apply_to(input)
}

///
/// TESTS
///
