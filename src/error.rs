//! Error types for dataset typing and brushing.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// `infer` was handed zero records.
    #[error("cannot infer types from zero records")]
    EmptyDataset,

    /// A brush bound was `NaN` or infinite.
    #[error("brush on '{attribute}' has a non-finite bound [{min}, {max}]")]
    NonFiniteBound {
        attribute: String,
        min: f64,
        max: f64,
    },

    /// The attribute is not part of the typed dataset.
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    /// The attribute exists but has no axis (degenerate or excluded).
    #[error("attribute '{0}' has no brushable axis")]
    NotBrushable(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
