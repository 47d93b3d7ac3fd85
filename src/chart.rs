//! Chart Model
//!
//! `ParallelChart` is the state owned by one parallel-coordinates chart: the typed
//! dataset, the rows currently in view, the active brushes and the color axis. The
//! renderer reads from it and forwards brush gestures and menu choices to it, then
//! redraws; nothing here is shared between charts.

use tracing::{info, warn};

use crate::brush::BrushFilter;
use crate::data_types::{ChartConfig, EncodedRecord, RawValue, Record};
use crate::error::{ChartError, Result};
use crate::scales::ChartScale;
use crate::typing::{infer_with, TypedDataset};

#[derive(Clone, Debug)]
pub struct ParallelChart {
    config: ChartConfig,
    dataset: TypedDataset,
    /// Rows in view, ascending. Narrowed by `drill_down`, restored by `reset`.
    view: Vec<usize>,
    brushes: BrushFilter,
    color_axis: Option<String>,
}

impl ParallelChart {
    pub fn new(records: &[Record], config: ChartConfig) -> Result<Self> {
        let dataset = infer_with(records, config.log_scale)?;
        let mut chart = Self {
            view: (0..dataset.len()).collect(),
            config,
            dataset,
            brushes: BrushFilter::new(),
            color_axis: None,
        };
        chart.color_axis = chart.default_color_axis();
        info!(
            rows = chart.dataset.len(),
            axes = chart.axes().len(),
            "chart created"
        );
        Ok(chart)
    }

    /// Replaces the dataset. Brushes and the view are reset together with it; if
    /// typing fails the current state is left untouched.
    pub fn reload(&mut self, records: &[Record]) -> Result<()> {
        let dataset = infer_with(records, self.config.log_scale)?;
        self.dataset = dataset;
        self.view = (0..self.dataset.len()).collect();
        self.brushes.clear_all();
        self.color_axis = self.default_color_axis();
        info!(rows = self.dataset.len(), "chart reloaded");
        Ok(())
    }

    /// Back to the full dataset with no brushes and the initial color axis.
    pub fn reset(&mut self) {
        self.view = (0..self.dataset.len()).collect();
        self.brushes.clear_all();
        self.color_axis = self.default_color_axis();
        info!("chart reset");
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dataset(&self) -> &TypedDataset {
        &self.dataset
    }

    pub fn brushes(&self) -> &BrushFilter {
        &self.brushes
    }

    pub fn view(&self) -> &[usize] {
        &self.view
    }

    /// Attributes drawn as axes: non-degenerate and not excluded by the config.
    pub fn axes(&self) -> Vec<&str> {
        self.dataset
            .brushable_attributes()
            .filter(|a| !self.config.is_excluded(a))
            .collect()
    }

    /// Degenerate attributes with their single value, shown as static labels.
    pub fn annotations(&self) -> Vec<(&str, &RawValue)> {
        self.dataset
            .degenerate()
            .iter()
            .filter_map(|a| {
                self.dataset
                    .constant_value(a)
                    .map(|v| (a.as_str(), v))
            })
            .collect()
    }

    fn default_color_axis(&self) -> Option<String> {
        self.config
            .color_attribute
            .as_deref()
            .filter(|a| self.dataset.has_attribute(a))
            .or_else(|| self.axes().first().copied())
            .or_else(|| self.dataset.attributes().first().map(String::as_str))
            .map(str::to_string)
    }

    pub fn color_axis(&self) -> Option<&str> {
        self.color_axis.as_deref()
    }

    pub fn set_color_axis(&mut self, attribute: &str) -> Result<()> {
        if !self.dataset.has_attribute(attribute) {
            return Err(ChartError::UnknownAttribute(attribute.to_string()));
        }
        self.color_axis = Some(attribute.to_string());
        Ok(())
    }

    /// Position of `row` on the color ramp, in `[0, 1]` over the extent of the
    /// color attribute within the current view. `None` for a null value.
    pub fn color_value(&self, row: usize) -> Option<f64> {
        let axis = self.color_axis.as_deref()?;
        let value = self.dataset.record(row)?.get(axis)?;
        let domain = self.dataset.extent_of(axis, &self.view)?;
        Some(ChartScale::new_linear(domain).normalize(value))
    }

    /// Applies a brush gesture on `attribute`: `Some` sets the range, `None` clears it.
    /// Only attributes drawn as axes can be brushed.
    pub fn brush(&mut self, attribute: &str, selection: Option<(f64, f64)>) -> Result<()> {
        if selection.is_some() {
            if !self.dataset.has_attribute(attribute) {
                return Err(ChartError::UnknownAttribute(attribute.to_string()));
            }
            if !self.axes().contains(&attribute) {
                return Err(ChartError::NotBrushable(attribute.to_string()));
            }
        }
        self.brushes.apply_selection(attribute, selection)
    }

    /// Narrows the view to rows whose `attribute` encodes to `code`, e.g. one category
    /// picked from a dropdown. Brushes are cleared. Returns the new number of rows.
    pub fn drill_down(&mut self, attribute: &str, code: f64) -> Result<usize> {
        if !self.dataset.has_attribute(attribute) {
            return Err(ChartError::UnknownAttribute(attribute.to_string()));
        }
        let dataset = &self.dataset;
        self.view
            .retain(|&row| dataset.record(row).and_then(|r| r.get(attribute)) == Some(code));
        self.brushes.clear_all();
        if self.view.is_empty() {
            warn!(attribute, code, "drill-down left no rows");
        }
        info!(attribute, code, rows = self.view.len(), "drill-down");
        Ok(self.view.len())
    }

    pub fn is_visible(&self, row: usize) -> bool {
        self.view.binary_search(&row).is_ok()
            && self
                .dataset
                .record(row)
                .is_some_and(|r| self.brushes.test(r))
    }

    /// Rows in view that pass every brush, ascending.
    pub fn visible_rows(&self) -> Vec<usize> {
        self.view
            .iter()
            .copied()
            .filter(|&row| self.is_visible(row))
            .collect()
    }

    /// Opacity the renderer should use for `row`'s line.
    pub fn opacity(&self, row: usize) -> f32 {
        if self.is_visible(row) {
            self.config.selected_opacity
        } else {
            self.config.deselected_opacity
        }
    }

    pub fn selected_records(&self) -> Vec<&EncodedRecord> {
        self.visible_rows()
            .into_iter()
            .filter_map(|row| self.dataset.record(row))
            .collect()
    }
}
