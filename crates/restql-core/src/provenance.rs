//! Clause provenance: which clause produced each fragment of a chain, and
//! with which arguments.

use crate::{
    block::{ClauseKind, Fragment},
    value::Value,
};
use serde::{Serialize, Serializer};

///
/// ClauseRecord
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClauseRecord {
    pub kind: ClauseKind,
    pub params: Vec<Value>,
}

impl ClauseRecord {
    #[must_use]
    pub const fn new(kind: ClauseKind, params: Vec<Value>) -> Self {
        Self { kind, params }
    }
}

impl Serialize for ClauseKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Fragment {
    /// Record of the clause invocation this fragment came from.
    #[must_use]
    pub fn record(&self) -> ClauseRecord {
        let params = match self {
            Self::From(endpoint) => vec![Value::text(endpoint)],
            Self::Alias(alias) => vec![Value::text(alias)],
            Self::Timeout(timeout) => vec![timeout_param(*timeout)],
            Self::Headers(map) | Self::Modifiers(map) => vec![Value::Map(map.clone())],
            Self::With { name, value } => vec![Value::text(name), value.clone()],
            Self::Only(filters) => filters.iter().map(Value::text).collect(),
            Self::Hidden(flag) | Self::IgnoreErrors(flag) => vec![Value::Bool(*flag)],
            Self::Apply(binding) => vec![Value::text(&binding.operator)],
            Self::Document(_) => Vec::new(),
        };

        ClauseRecord::new(self.kind(), params)
    }
}

// Timeouts past i64::MAX keep their exact digits as text.
fn timeout_param(timeout: u64) -> Value {
    i64::try_from(timeout).map_or_else(|_| Value::text(timeout.to_string()), Value::Int)
}

/// Records for `fragments`, in clause order.
#[must_use]
pub fn records(fragments: &[Fragment]) -> Vec<ClauseRecord> {
    fragments.iter().map(Fragment::record).collect()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        block,
        document::{ApplyBinding, BlockKind, QueryDocument},
    };
    use serde_json::json;

    #[test]
    fn records_follow_clause_order() {
        let fragments = vec![
            block::from("heroes"),
            block::with("name", "Link"),
            block::only(["name", "stats"]),
            Fragment::Apply(ApplyBinding::new(BlockKind::Only, "stats", "flatten")),
        ];

        let kinds: Vec<_> = records(&fragments).into_iter().map(|r| r.kind).collect();

        assert_eq!(
            kinds,
            vec![
                ClauseKind::From,
                ClauseKind::With,
                ClauseKind::Only,
                ClauseKind::Apply
            ]
        );
    }

    #[test]
    fn params_carry_clause_arguments() {
        assert_eq!(
            block::with("hero", "hero.id").record(),
            ClauseRecord::new(
                ClauseKind::With,
                vec![Value::text("hero"), Value::reference("hero.id")]
            )
        );
        assert_eq!(
            block::timeout(u64::MAX).record().params,
            vec![Value::text(u64::MAX.to_string())]
        );
        assert_eq!(block::hidden(true).record().params, vec![Value::Bool(true)]);
        assert!(Fragment::Document(QueryDocument::new()).record().params.is_empty());
    }

    #[test]
    fn record_serializes_with_document_key() {
        let record = block::ignore_errors(true).record();

        assert_eq!(
            serde_json::to_value(&record).unwrap_or_default(),
            json!({ "kind": "ignoreErrors", "params": [true] })
        );
    }
}
