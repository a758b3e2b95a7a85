use crate::{
    fields::FieldMap,
    value::{Value, is_reference},
};

/// Render a value as a query-language literal.
///
/// - references (and reference-shaped text) are verbatim
/// - text is double-quoted, embedded quotes are not escaped
/// - lists go through the generic JSON encoder, so nested text is always
///   JSON-quoted, reference-shaped or not
/// - maps recurse through this formatter: `{k: v, k2: v2}`
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Reference(path) => path.clone(),
        Value::Text(text) if is_reference(text) => text.clone(),
        Value::Text(text) => format!("\"{text}\""),
        Value::List(items) => format_list(items),
        Value::Map(entries) => format_map(entries),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => format_float(*n),
        Value::Bool(b) => b.to_string(),
    }
}

fn format_list(items: &[Value]) -> String {
    serde_json::Value::Array(items.iter().map(Value::to_json).collect()).to_string()
}

fn format_map(entries: &FieldMap<Value>) -> String {
    let body = entries
        .iter()
        .map(|(key, value)| format!("{key}: {}", format_value(value)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{{{body}}}")
}

// Default textual number form: no trailing `.0`, named non-finite values,
// exponent notation outside [1e-6, 1e21) with an explicit `+` on positive
// exponents.
fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else if !(EXPONENT_BELOW..EXPONENT_FROM).contains(&n.abs()) {
        format_exponent(n)
    } else {
        n.to_string()
    }
}

const EXPONENT_BELOW: f64 = 1e-6;
const EXPONENT_FROM: f64 = 1e21;

fn format_exponent(n: f64) -> String {
    let text = format!("{n:e}");

    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
