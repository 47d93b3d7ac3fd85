#![cfg(feature = "polars")]

use eyre::{Result, WrapErr};
use polars::prelude::*;

use crate::data_types::{RawValue, Record};

/// Converts every row of `df` into a record, columns in frame order.
pub fn records_from_dataframe(df: &DataFrame) -> Result<Vec<Record>> {
    let columns = df.get_columns();
    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut record = Record::new();
        for column in columns {
            let value = column
                .get(row)
                .wrap_err_with(|| format!("reading row {} of column '{}'", row, column.name()))?;
            record.insert(column.name().as_str(), raw_value(value));
        }
        records.push(record);
    }
    Ok(records)
}

fn raw_value(value: AnyValue<'_>) -> RawValue {
    match value {
        AnyValue::Null => RawValue::Null,
        AnyValue::Boolean(b) => RawValue::Boolean(b),
        AnyValue::String(s) => RawValue::String(s.to_string()),
        AnyValue::StringOwned(s) => RawValue::String(s.to_string()),
        AnyValue::Int8(v) => RawValue::number(v as f64),
        AnyValue::Int16(v) => RawValue::number(v as f64),
        AnyValue::Int32(v) => RawValue::number(v as f64),
        AnyValue::Int64(v) => RawValue::number(v as f64),
        AnyValue::UInt8(v) => RawValue::number(v as f64),
        AnyValue::UInt16(v) => RawValue::number(v as f64),
        AnyValue::UInt32(v) => RawValue::number(v as f64),
        AnyValue::UInt64(v) => RawValue::number(v as f64),
        AnyValue::Float32(v) => RawValue::number(v as f64),
        AnyValue::Float64(v) => RawValue::number(v),
        other => RawValue::String(other.to_string()),
    }
}
