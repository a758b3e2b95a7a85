use crate::value::Value;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value as JsonValue};

/// Largest integer an f64 holds exactly (2^53).
const F64_SAFE_INT: f64 = 9_007_199_254_740_992.0;

impl Value {
    /// Generic JSON encoding.
    ///
    /// References are plain strings here; whole-number floats drop their
    /// fraction and non-finite floats become `null`.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Float(n) => float_to_json(*n),
            Self::Int(n) => JsonValue::Number(Number::from(*n)),
            Self::List(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(entries) => JsonValue::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<_, _>>(),
            ),
            Self::Reference(s) | Self::Text(s) => JsonValue::String(s.clone()),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_json(n: f64) -> JsonValue {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= F64_SAFE_INT {
        return JsonValue::Number(Number::from(n as i64));
    }

    Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
