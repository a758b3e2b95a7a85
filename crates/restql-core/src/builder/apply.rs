use crate::{
    block::Fragment,
    builder::{FragmentBuilder, IntoBuilder, extend},
    document::{ApplyBinding, BlockKind},
    error::QueryError,
};

/// Bind `operator` to whatever clause the chain added last.
///
/// A trailing `with` fragment binds its parameter name; a trailing `only`
/// fragment binds its last filter. The binding is appended to the chain so
/// it merges alongside the clause it decorates. Only the last fragment is
/// inspected; the rest of the chain is never forced.
pub fn apply_operator(
    operator: impl Into<String>,
    builder: impl IntoBuilder,
) -> Result<FragmentBuilder, QueryError> {
    let operator = operator.into();
    let builder = builder.into_builder();

    let binding = match bind_last(&operator, builder.last().as_ref()) {
        Ok(binding) => binding,
        Err(err) => {
            tracing::debug!(%operator, error = %err, "apply operator rejected");
            return Err(err);
        }
    };
    tracing::debug!(
        kind = %binding.kind,
        target = %binding.target,
        operator = %binding.operator,
        "bound apply operator"
    );

    Ok(extend(builder, Fragment::Apply(binding)))
}

fn bind_last(operator: &str, last: Option<&Fragment>) -> Result<ApplyBinding, QueryError> {
    match last {
        Some(Fragment::With { name, .. }) => {
            Ok(ApplyBinding::new(BlockKind::With, name.as_str(), operator))
        }
        Some(Fragment::Only(filters)) => filters
            .last()
            .map(|target| ApplyBinding::new(BlockKind::Only, target.as_str(), operator))
            .ok_or_else(|| QueryError::EmptyOnlyTarget {
                operator: operator.to_string(),
            }),
        Some(other) => Err(QueryError::missing_apply_target(
            operator,
            other.kind().as_str(),
        )),
        None => Err(QueryError::missing_apply_target(operator, "nothing")),
    }
}
