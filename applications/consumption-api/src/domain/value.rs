use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Maximum number of nested `value` wrappers followed before giving up.
pub const MAX_UNWRAP_DEPTH: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedValueError {
    #[error("value nesting exceeds {0} levels")]
    DepthExceeded(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Bool(bool),
}

/// A device feature value as reported by the heating backend.
///
/// The backend nests readings as `{ "value": ..., "unit": ... }`, sometimes
/// several levels deep, and mixes them with plain scalars and arbitrary
/// objects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum FeatureValue {
    Absent,
    Scalar(Scalar),
    Wrapped {
        value: Box<FeatureValue>,
        unit: Option<String>,
    },
    /// Object without a `value` field, or an array.
    Composite(Value),
}

impl FeatureValue {
    pub fn number(value: f64) -> Self {
        Self::Scalar(Scalar::Number(value))
    }
}

impl From<Value> for FeatureValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FeatureValue::Absent,
            Value::Bool(b) => FeatureValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => match n.as_f64() {
                Some(f) => FeatureValue::number(f),
                None => FeatureValue::Composite(Value::Number(n)),
            },
            Value::String(s) => FeatureValue::Scalar(Scalar::Text(s)),
            Value::Object(mut map) => match map.remove("value") {
                Some(inner) => {
                    let unit = map
                        .get("unit")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    FeatureValue::Wrapped {
                        value: Box::new(FeatureValue::from(inner)),
                        unit,
                    }
                }
                None => FeatureValue::Composite(Value::Object(map)),
            },
            other @ Value::Array(_) => FeatureValue::Composite(other),
        }
    }
}

/// What is left once every wrapper has been peeled off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unwrapped<'a> {
    Absent,
    Scalar(&'a Scalar),
    Composite(&'a Value),
}

/// Innermost value of a feature together with the innermost unit seen on
/// the way down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnwrappedValue<'a> {
    pub value: Unwrapped<'a>,
    pub unit: Option<&'a str>,
}

impl UnwrappedValue<'_> {
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            Unwrapped::Scalar(Scalar::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

/// Follow nested `value` fields down to a scalar, at most
/// [`MAX_UNWRAP_DEPTH`] levels deep.
pub fn unwrap_value(feature: &FeatureValue) -> Result<UnwrappedValue<'_>, MalformedValueError> {
    let mut current = feature;
    let mut unit = None;
    let mut depth = 0;

    loop {
        match current {
            FeatureValue::Wrapped { value, unit: u } => {
                depth += 1;
                if depth > MAX_UNWRAP_DEPTH {
                    return Err(MalformedValueError::DepthExceeded(MAX_UNWRAP_DEPTH));
                }
                if let Some(u) = u {
                    unit = Some(u.as_str());
                }
                current = value;
            }
            FeatureValue::Absent => {
                return Ok(UnwrappedValue {
                    value: Unwrapped::Absent,
                    unit,
                })
            }
            FeatureValue::Scalar(s) => {
                return Ok(UnwrappedValue {
                    value: Unwrapped::Scalar(s),
                    unit,
                })
            }
            FeatureValue::Composite(v) => {
                return Ok(UnwrappedValue {
                    value: Unwrapped::Composite(v),
                    unit,
                })
            }
        }
    }
}
