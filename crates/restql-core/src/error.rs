use thiserror::Error as ThisError;

///
/// QueryError
///
/// Precondition violations raised while composing a query.
/// Every other clause, merge, and render operation is total.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("apply '{operator}' needs a preceding with/only clause, found {found}")]
    MissingApplyTarget {
        operator: String,
        found: &'static str,
    },

    #[error("apply '{operator}' follows an only clause with no filters")]
    EmptyOnlyTarget { operator: String },

    #[error("no handler registered for arity {arity}")]
    UnsupportedArity { arity: usize },
}

impl QueryError {
    pub(crate) fn missing_apply_target(operator: impl Into<String>, found: &'static str) -> Self {
        Self::MissingApplyTarget {
            operator: operator.into(),
            found,
        }
    }

    /// True if the error came from an apply operator with nothing to bind.
    #[must_use]
    pub const fn is_apply_target(&self) -> bool {
        matches!(
            self,
            Self::MissingApplyTarget { .. } | Self::EmptyOnlyTarget { .. }
        )
    }
}
