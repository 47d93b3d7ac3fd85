//! Dense integer codes for categorical values.
//!
//! Codes are assigned in first-seen order starting at 0, so a table built from the
//! same records in the same order is always identical.

use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CodeTable {
    codes: HashMap<String, u32>,
    labels: Vec<String>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code of `label`, assigning the next free one if it has not been seen.
    pub fn encode(&mut self, label: &str) -> u32 {
        if let Some(&code) = self.codes.get(label) {
            return code;
        }
        let code = self.labels.len() as u32;
        self.codes.insert(label.to_string(), code);
        self.labels.push(label.to_string());
        code
    }

    /// Code of an already seen label.
    pub fn code(&self, label: &str) -> Option<u32> {
        self.codes.get(label).copied()
    }

    pub fn decode(&self, code: u32) -> Option<&str> {
        self.labels.get(code as usize).map(String::as_str)
    }

    /// Decodes an encoded value. Only exact non-negative integers are codes.
    pub fn decode_value(&self, value: f64) -> Option<&str> {
        if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return None;
        }
        self.decode(value as u32)
    }

    /// Labels in code order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// `(label, code)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.as_str(), i as u32))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for CodeTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = CodeTable::new();
        for label in iter {
            table.encode(label);
        }
        table
    }
}
