//! parcoords: attribute typing and brush filtering for parallel-coordinates charts

pub mod brush;
pub mod chart;
pub mod code_table;
pub mod data_types;
pub mod error;
pub mod loader;
#[cfg(feature = "polars")]
pub mod polars_source;
pub mod scales;
pub mod typing;

pub use brush::{BrushFilter, BrushRange};
pub use chart::ParallelChart;
pub use code_table::CodeTable;
pub use data_types::{
    AttributeType, ChartConfig, EncodedRecord, LogScaleMode, RawValue, Record,
};
pub use error::ChartError;
pub use scales::should_use_log_scale;
pub use typing::{infer, infer_with, TypedDataset};
