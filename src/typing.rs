//! Attribute typing and encoding.
//!
//! `infer` classifies every attribute of a raw dataset, builds the categorical code
//! tables and produces the numeric copy of the data that brushing works on.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::code_table::CodeTable;
use crate::data_types::value::ValueKey;
use crate::data_types::{
    merge_type, AttributeType, EncodedRecord, LogScaleMode, ObservedType, RawValue, Record,
};
use crate::error::{ChartError, Result};
use crate::scales::{self, ChartScale, ScaleKind};

/// Output of the typing pass. Immutable once built; a new dataset means a new value.
#[derive(Clone, Debug, Default)]
pub struct TypedDataset {
    attributes: Vec<String>,
    types: HashMap<String, AttributeType>,
    code_tables: HashMap<String, CodeTable>,
    encoded: Vec<EncodedRecord>,
    degenerate: Vec<String>,
    constants: HashMap<String, RawValue>,
}

#[derive(Default)]
struct AttributeScan {
    observed: ObservedType,
    distinct: HashSet<ValueKey>,
    first: Option<RawValue>,
    present: usize,
}

/// Types and encodes `records` with the log-scale heuristic enabled.
pub fn infer(records: &[Record]) -> Result<TypedDataset> {
    infer_with(records, LogScaleMode::Auto)
}

pub fn infer_with(records: &[Record], log_scale: LogScaleMode) -> Result<TypedDataset> {
    if records.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let mut attributes: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut scans: Vec<AttributeScan> = Vec::new();

    for record in records {
        for (name, value) in record.iter() {
            let i = *index.entry(name.to_string()).or_insert_with(|| {
                attributes.push(name.to_string());
                scans.push(AttributeScan::default());
                scans.len() - 1
            });
            let scan = &mut scans[i];
            scan.observed = merge_type(scan.observed, ObservedType::of(value));
            scan.distinct.insert(value.key());
            scan.first.get_or_insert_with(|| value.clone());
            scan.present += 1;
        }
    }

    let mut code_tables: HashMap<String, CodeTable> = HashMap::new();
    let mut degenerate = Vec::new();
    let mut constants = HashMap::new();
    for (name, scan) in attributes.iter().zip(scans.iter_mut()) {
        // records without the attribute contribute a null
        if scan.present < records.len() {
            scan.distinct.insert(ValueKey::Null);
        }
        if scan.distinct.len() == 1 {
            degenerate.push(name.clone());
            let value = if scan.present < records.len() {
                RawValue::Null
            } else {
                scan.first.clone().unwrap_or_default()
            };
            constants.insert(name.clone(), value);
        }
        if scan.observed == ObservedType::String {
            code_tables.insert(name.clone(), CodeTable::new());
        }
    }

    let encoded: Vec<EncodedRecord> = records
        .iter()
        .map(|record| {
            let mut out = EncodedRecord::new();
            for (name, scan) in attributes.iter().zip(scans.iter()) {
                let value = record.get(name).unwrap_or(&RawValue::Null);
                let code = encode_value(value, scan.observed, code_tables.get_mut(name));
                out.insert(name.as_str(), code);
            }
            out
        })
        .collect();

    let mut types = HashMap::with_capacity(attributes.len());
    for (name, scan) in attributes.iter().zip(scans.iter()) {
        let ty = match scan.observed {
            ObservedType::String => AttributeType::String,
            ObservedType::Boolean => AttributeType::Boolean,
            // an all-null attribute has nothing to refine
            ObservedType::Unset => AttributeType::NumberLinear,
            ObservedType::Number => {
                let values: Vec<f64> = encoded.iter().filter_map(|r| r.get(name)).collect();
                if log_scale == LogScaleMode::Auto && scales::should_use_log_scale(&values) {
                    debug!(attribute = %name, "using log scale");
                    AttributeType::NumberLog
                } else {
                    AttributeType::NumberLinear
                }
            }
        };
        types.insert(name.clone(), ty);
    }

    debug!(
        rows = records.len(),
        attributes = attributes.len(),
        categorical = code_tables.len(),
        degenerate = degenerate.len(),
        "typed dataset"
    );

    Ok(TypedDataset {
        attributes,
        types,
        code_tables,
        encoded,
        degenerate,
        constants,
    })
}

fn encode_value(
    value: &RawValue,
    observed: ObservedType,
    table: Option<&mut CodeTable>,
) -> Option<f64> {
    match (observed, value) {
        (_, RawValue::Null) => None,
        (ObservedType::String, v) => {
            let label = v.as_label()?;
            table.map(|t| t.encode(&label) as f64)
        }
        (_, RawValue::Number(n)) => n.is_finite().then_some(*n),
        (_, RawValue::Boolean(b)) => Some(if *b { 1.0 } else { 0.0 }),
        // a string forces the attribute to ObservedType::String above
        (_, RawValue::String(_)) => None,
    }
}

impl TypedDataset {
    /// Attribute names in first-seen order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.types.contains_key(attribute)
    }

    pub fn attribute_type(&self, attribute: &str) -> Option<AttributeType> {
        self.types.get(attribute).copied()
    }

    /// `(name, type)` pairs in attribute order.
    pub fn types(&self) -> impl Iterator<Item = (&str, AttributeType)> {
        self.attributes
            .iter()
            .filter_map(|a| self.types.get(a).map(|t| (a.as_str(), *t)))
    }

    pub fn code_table(&self, attribute: &str) -> Option<&CodeTable> {
        self.code_tables.get(attribute)
    }

    pub fn encoded(&self) -> &[EncodedRecord] {
        &self.encoded
    }

    pub fn record(&self, row: usize) -> Option<&EncodedRecord> {
        self.encoded.get(row)
    }

    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }

    /// Attributes with a single distinct raw value, in attribute order.
    pub fn degenerate(&self) -> &[String] {
        &self.degenerate
    }

    pub fn is_degenerate(&self, attribute: &str) -> bool {
        self.degenerate.iter().any(|a| a == attribute)
    }

    /// The single value of a degenerate attribute.
    pub fn constant_value(&self, attribute: &str) -> Option<&RawValue> {
        self.constants.get(attribute)
    }

    /// Non-degenerate attributes, in attribute order.
    pub fn brushable_attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|a| !self.is_degenerate(a))
            .map(String::as_str)
    }

    /// Original label of a categorical code. Display only; filtering uses codes.
    pub fn decode(&self, attribute: &str, code: u32) -> Option<&str> {
        self.code_tables.get(attribute)?.decode(code)
    }

    /// Min and max encoded value of `attribute` over all rows.
    pub fn extent(&self, attribute: &str) -> Option<(f64, f64)> {
        scales::extent(self.encoded.iter().filter_map(|r| r.get(attribute)))
    }

    /// Min and max encoded value of `attribute` over the given rows.
    pub fn extent_of(&self, attribute: &str, rows: &[usize]) -> Option<(f64, f64)> {
        scales::extent(
            rows.iter()
                .filter_map(|&i| self.encoded.get(i))
                .filter_map(|r| r.get(attribute)),
        )
    }

    /// Scale for `attribute` over its full extent. Categorical attributes span all codes.
    pub fn scale(&self, attribute: &str) -> Option<ChartScale> {
        let ty = self.attribute_type(attribute)?;
        let domain = match self.code_tables.get(attribute) {
            Some(table) if !table.is_empty() => (0.0, (table.len() - 1) as f64),
            _ => self.extent(attribute)?,
        };
        Some(ChartScale::new(ScaleKind::from(ty), domain))
    }

    /// Human readable value of one field: decoded label, `true`/`false`, the number,
    /// or an empty string for null. Codes without a label render as `Unknown`.
    pub fn display_value(&self, row: usize, attribute: &str) -> String {
        let Some(value) = self.encoded.get(row).and_then(|r| r.get(attribute)) else {
            return String::new();
        };
        match self.attribute_type(attribute) {
            Some(AttributeType::String) => {
                match self.code_tables.get(attribute).and_then(|t| t.decode_value(value)) {
                    Some(label) => label.to_string(),
                    None => {
                        debug!(attribute, value, "no label for code");
                        "Unknown".to_string()
                    }
                }
            }
            Some(AttributeType::Boolean) => (value != 0.0).to_string(),
            _ => value.to_string(),
        }
    }

    /// `(attribute, display value)` for every attribute of one row.
    pub fn describe(&self, row: usize) -> Vec<(String, String)> {
        self.attributes
            .iter()
            .map(|a| (a.clone(), self.display_value(row, a)))
            .collect()
    }
}
