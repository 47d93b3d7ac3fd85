use super::value::RawValue;
use serde::{Deserialize, Serialize};

/// Final semantic type of an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeType {
    String,
    NumberLinear,
    NumberLog,
    Boolean,
}

impl AttributeType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::NumberLinear | Self::NumberLog)
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::String)
    }
}

/// Type accumulated while scanning an attribute, before the log-scale refinement.
///
/// Variants are declared in precedence order so that the derived `Ord` is the merge
/// rule: string beats number beats boolean beats unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObservedType {
    #[default]
    Unset,
    Boolean,
    Number,
    String,
}

impl ObservedType {
    /// Type implied by a single value. Null carries no type information.
    pub fn of(value: &RawValue) -> Self {
        match value {
            RawValue::Null => Self::Unset,
            RawValue::Boolean(_) => Self::Boolean,
            RawValue::Number(_) => Self::Number,
            RawValue::String(_) => Self::String,
        }
    }
}

/// Precedence-resolved merge of the type seen so far with a newly observed one.
pub fn merge_type(current: ObservedType, observed: ObservedType) -> ObservedType {
    current.max(observed)
}
