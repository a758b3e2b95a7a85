//! Multi-arity dispatch: pick a handler by argument count.

use crate::error::QueryError;
use std::{fmt, sync::Arc};

type Handler<A, R> = Arc<dyn Fn(Vec<A>) -> R + Send + Sync>;

///
/// Arity
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Arity {
    Exact(usize),

    /// Fallback for any count without an exact handler.
    Any,
}

///
/// MultiArity
///
/// Closed table of handlers keyed by argument count.
/// An exact match wins over the `Any` default regardless of registration
/// order; registering the same arity twice keeps the later handler.
///

pub struct MultiArity<A, R> {
    exact: Vec<(usize, Handler<A, R>)>,
    default: Option<Handler<A, R>>,
}

impl<A, R> MultiArity<A, R> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exact: Vec::new(),
            default: None,
        }
    }

    /// Register `handler` for `arity`.
    #[must_use]
    pub fn with(mut self, arity: Arity, handler: impl Fn(Vec<A>) -> R + Send + Sync + 'static) -> Self {
        let handler: Handler<A, R> = Arc::new(handler);

        match arity {
            Arity::Exact(count) => {
                self.exact.retain(|(registered, _)| *registered != count);
                self.exact.push((count, handler));
            }
            Arity::Any => self.default = Some(handler),
        }

        self
    }

    #[must_use]
    pub fn exact(self, count: usize, handler: impl Fn(Vec<A>) -> R + Send + Sync + 'static) -> Self {
        self.with(Arity::Exact(count), handler)
    }

    #[must_use]
    pub fn any(self, handler: impl Fn(Vec<A>) -> R + Send + Sync + 'static) -> Self {
        self.with(Arity::Any, handler)
    }

    /// True if a call with `count` arguments has a handler.
    #[must_use]
    pub fn supports(&self, count: usize) -> bool {
        self.default.is_some() || self.exact.iter().any(|(registered, _)| *registered == count)
    }

    /// Dispatch `args` on their count.
    pub fn call(&self, args: Vec<A>) -> Result<R, QueryError> {
        let arity = args.len();
        let handler = self
            .exact
            .iter()
            .find(|(registered, _)| *registered == arity)
            .map(|(_, handler)| handler)
            .or(self.default.as_ref())
            .ok_or(QueryError::UnsupportedArity { arity })?;

        Ok(handler(args))
    }
}

impl<A, R> Default for MultiArity<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> Clone for MultiArity<A, R> {
    fn clone(&self) -> Self {
        Self {
            exact: self.exact.clone(),
            default: self.default.clone(),
        }
    }
}

impl<A, R> fmt::Debug for MultiArity<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arities: Vec<usize> = self.exact.iter().map(|(count, _)| *count).collect();

        f.debug_struct("MultiArity")
            .field("exact", &arities)
            .field("default", &self.default.is_some())
            .finish()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn add() -> MultiArity<i64, i64> {
        MultiArity::new()
            .exact(1, |args| args[0] + 1)
            .exact(2, |args| args[0] + args[1])
    }

    #[test]
    fn dispatches_on_exact_count() {
        let add = add();

        assert_eq!(add.call(vec![1]), Ok(2));
        assert_eq!(add.call(vec![1, 2]), Ok(3));
    }

    #[test]
    fn missing_arity_without_default_is_an_error() {
        let err = add().call(vec![1, 2, 3]).expect_err("no handler for three arguments");

        assert_eq!(err, QueryError::UnsupportedArity { arity: 3 });
        assert_eq!(err.to_string(), "no handler registered for arity 3");
        assert!(!err.is_apply_target());
    }

    #[test]
    fn default_handles_every_other_count() {
        let add = add().any(|args| args.iter().sum());

        assert_eq!(add.call(vec![1, 2, 3, 4]), Ok(10));
        assert_eq!(add.call(Vec::new()), Ok(0));
        assert_eq!(add.call(vec![5]), Ok(6));
    }

    #[test]
    fn exact_wins_over_default_registered_first() {
        let partial = MultiArity::new()
            .any(|args: Vec<i64>| args.len() as i64)
            .exact(2, |args| args[0] * args[1]);

        assert_eq!(partial.call(vec![3, 4]), Ok(12));
        assert_eq!(partial.call(vec![3, 4, 5]), Ok(3));
        assert!(partial.supports(7));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let table = MultiArity::new()
            .exact(1, |_: Vec<u8>| "first")
            .exact(1, |_| "second");

        assert_eq!(table.call(vec![0]), Ok("second"));
        assert!(!table.supports(2));
        assert_eq!(format!("{table:?}"), "MultiArity { exact: [1], default: false }");
    }
}
