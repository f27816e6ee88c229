//! Transformation parameters
//!
//! Keys are kept in a `BTreeMap`, so iteration is always in ascending key
//! order. Both query variants and therefore the signature depend on that
//! order being stable.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::SignError;

/// Image transformation directives, e.g. `w=400`, `con=10`
pub type Params = BTreeMap<String, ParamValue>;

/// A scalar parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// Parse a raw command-line value: integer, then float, then boolean,
    /// falling back to a plain string
    pub fn parse(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            return ParamValue::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            if f.is_finite() {
                return ParamValue::Float(f);
            }
        }
        match raw {
            "true" => ParamValue::Bool(true),
            "false" => ParamValue::Bool(false),
            _ => ParamValue::Str(raw.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl TryFrom<&serde_yaml::Value> for ParamValue {
    type Error = SignError;

    fn try_from(value: &serde_yaml::Value) -> Result<Self, Self::Error> {
        use serde_yaml::Value;

        match value {
            Value::String(s) => Ok(ParamValue::Str(s.clone())),
            Value::Bool(b) => Ok(ParamValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ParamValue::Int(i))
                } else if let Some(u) = n.as_u64() {
                    // Above i64::MAX; keep the exact digits
                    Ok(ParamValue::Str(u.to_string()))
                } else if let Some(x) = n.as_f64().filter(|x| x.is_finite()) {
                    Ok(ParamValue::Float(x))
                } else {
                    Err(SignError::invalid_input(format!("unsupported number: {}", n)))
                }
            }
            Value::Null => Err(SignError::invalid_input("null is not a scalar value")),
            Value::Sequence(_) => Err(SignError::invalid_input("list is not a scalar value")),
            Value::Mapping(_) => Err(SignError::invalid_input("mapping is not a scalar value")),
            Value::Tagged(_) => Err(SignError::invalid_input(
                "tagged value is not a scalar value",
            )),
        }
    }
}

/// Convert a YAML parameter map (as found in config presets) into `Params`
pub fn params_from_yaml(map: &HashMap<String, serde_yaml::Value>) -> Result<Params, SignError> {
    map.iter()
        .map(|(key, value)| {
            let value = ParamValue::try_from(value).map_err(|e| match e {
                SignError::InvalidInput(message) => {
                    SignError::invalid_input(format!("param '{}': {}", key, message))
                }
                other => other,
            })?;
            Ok::<_, SignError>((key.clone(), value))
        })
        .collect()
}

/// Parse a `key=value` argument. Only the first `=` separates; the value
/// may itself contain `=`.
pub fn parse_param_arg(arg: &str) -> Result<(String, ParamValue), SignError> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| SignError::invalid_input(format!("expected key=value, got '{}'", arg)))?;

    if key.is_empty() {
        return Err(SignError::invalid_input(format!(
            "empty parameter name in '{}'",
            arg
        )));
    }

    Ok((key.to_string(), ParamValue::parse(value)))
}

/// Overlay `key=value` arguments on base params (usually a preset).
///
/// Arguments win over base entries with the same key. Returns `None` when
/// the merged set is empty so callers sign a bare path.
pub fn merge_params(base: Params, args: &[String]) -> Result<Option<Params>, SignError> {
    let mut params = base;
    for arg in args {
        let (key, value) = parse_param_arg(arg)?;
        params.insert(key, value);
    }

    Ok(if params.is_empty() { None } else { Some(params) })
}
