use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell of raw tabular input, classified once at ingestion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl RawValue {
    /// Converts a JSON value. Arrays and objects have no natural numeric form and are
    /// kept as their JSON text so they still receive a code.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => Self::number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            other => Self::String(other.to_string()),
        }
    }

    /// A number cell. `NaN` and infinities carry no position on an axis and are
    /// treated as missing.
    pub fn number(v: f64) -> Self {
        if v.is_finite() {
            Self::Number(v)
        } else {
            Self::Null
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Textual form used when a non-string value lands in a `string` attribute.
    /// `None` for null, which stays null after encoding.
    pub fn as_label(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Boolean(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::String(s) => Some(s.clone()),
        }
    }

    /// Hashable identity of the value, used to count distinct raw values.
    pub(crate) fn key(&self) -> ValueKey {
        match self {
            Self::Null => ValueKey::Null,
            Self::Boolean(b) => ValueKey::Boolean(*b),
            // -0.0 and 0.0 are the same observation
            Self::Number(n) => ValueKey::Number(if *n == 0.0 { 0 } else { n.to_bits() }),
            Self::String(s) => ValueKey::String(s.clone()),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::number(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Null,
    Boolean(bool),
    Number(u64),
    String(String),
}
