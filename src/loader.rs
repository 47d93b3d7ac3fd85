//! JSON ingestion of raw records.

use eyre::{bail, Result, WrapErr};
use serde_json::Value;

use crate::data_types::{RawValue, Record};

/// Parses a JSON array of flat objects into records, keeping key order.
pub fn records_from_json_str(json: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(json).wrap_err("records are not valid JSON")?;
    records_from_json_value(value)
}

pub fn records_from_json_value(value: Value) -> Result<Vec<Record>> {
    let Value::Array(rows) = value else {
        bail!("expected a JSON array of records");
    };
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Object(fields) => Ok(fields
                .into_iter()
                .map(|(k, v)| (k, RawValue::from_json(v)))
                .collect()),
            other => bail!("record {} is not an object: {}", i, other),
        })
        .collect()
}
