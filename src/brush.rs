//! Per-axis range selections and the conjunctive record filter.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::debug;

use crate::data_types::EncodedRecord;
use crate::error::{ChartError, Result};

/// Above this many records `matching_indices` evaluates in parallel.
const PARALLEL_THRESHOLD: usize = 4096;

/// A brushed interval in encoded space. Bounds are kept as dragged, so `min` may be
/// greater than `max`; membership is tested against the ordered pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushRange {
    pub min: f64,
    pub max: f64,
}

impl BrushRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Bounds in ascending order.
    pub fn ordered(&self) -> (f64, f64) {
        if self.is_inverted() {
            (self.max, self.min)
        } else {
            (self.min, self.max)
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = self.ordered();
        value >= lo && value <= hi
    }
}

/// The active brushes of one chart. Absence of an attribute means no constraint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrushFilter {
    ranges: BTreeMap<String, BrushRange>,
}

impl BrushFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the brush on `attribute`. Non-finite bounds are rejected and
    /// leave the filter unchanged.
    pub fn set_range(&mut self, attribute: impl Into<String>, min: f64, max: f64) -> Result<()> {
        let attribute = attribute.into();
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::NonFiniteBound {
                attribute,
                min,
                max,
            });
        }
        debug!(attribute = %attribute, min, max, "brush set");
        self.ranges.insert(attribute, BrushRange::new(min, max));
        Ok(())
    }

    /// Removes the brush on `attribute`, returning it if there was one.
    pub fn clear_range(&mut self, attribute: &str) -> Option<BrushRange> {
        let removed = self.ranges.remove(attribute);
        if removed.is_some() {
            debug!(attribute, "brush cleared");
        }
        removed
    }

    pub fn clear_all(&mut self) {
        if !self.ranges.is_empty() {
            debug!(count = self.ranges.len(), "all brushes cleared");
        }
        self.ranges.clear();
    }

    /// Gesture entry point: a selection upserts the brush, `None` (the brush was
    /// dismissed) clears it.
    pub fn apply_selection(&mut self, attribute: &str, selection: Option<(f64, f64)>) -> Result<()> {
        match selection {
            Some((min, max)) => self.set_range(attribute, min, max),
            None => {
                self.clear_range(attribute);
                Ok(())
            }
        }
    }

    pub fn range(&self, attribute: &str) -> Option<BrushRange> {
        self.ranges.get(attribute).copied()
    }

    /// Active brushes ordered by attribute name.
    pub fn ranges(&self) -> impl Iterator<Item = (&str, BrushRange)> {
        self.ranges.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// True iff the record lies within every active brush.
    ///
    /// A null value fails the brush on its attribute. A brush on an attribute the
    /// record does not have at all is ignored.
    pub fn test(&self, record: &EncodedRecord) -> bool {
        self.ranges
            .iter()
            .all(|(attribute, range)| match record.field(attribute) {
                None => {
                    debug!(attribute = %attribute, "ignoring brush on attribute missing from record");
                    true
                }
                Some(None) => false,
                Some(Some(value)) => range.contains(value),
            })
    }

    /// Indices of the records passing `test`, in input order.
    pub fn matching_indices(&self, records: &[EncodedRecord]) -> Vec<usize> {
        if self.ranges.is_empty() {
            return (0..records.len()).collect();
        }
        if records.len() > PARALLEL_THRESHOLD {
            records
                .par_iter()
                .enumerate()
                .filter(|(_, r)| self.test(r))
                .map(|(i, _)| i)
                .collect()
        } else {
            records
                .iter()
                .enumerate()
                .filter(|(_, r)| self.test(r))
                .map(|(i, _)| i)
                .collect()
        }
    }
}
