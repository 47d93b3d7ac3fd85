//! Axis scale selection and value normalisation.

use crate::data_types::AttributeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log,
    /// One evenly spaced slot per category code.
    Band,
}

impl From<AttributeType> for ScaleKind {
    fn from(ty: AttributeType) -> Self {
        match ty {
            AttributeType::NumberLog => Self::Log,
            AttributeType::String => Self::Band,
            AttributeType::NumberLinear | AttributeType::Boolean => Self::Linear,
        }
    }
}

/// Heuristic choice between a linear and a logarithmic axis.
///
/// Log is preferred when consecutive gaps between the sorted distinct values are
/// more uniform in log10 space than in linear space, measured as max gap / min gap.
/// This says nothing about whether the data is actually log-distributed.
///
/// Returns `false` (linear) whenever the ratios are undefined: a non-positive or
/// non-finite value, fewer than two distinct values, or a zero gap after the log.
pub fn should_use_log_scale(values: &[f64]) -> bool {
    if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return false;
    }

    let mut distinct = values.to_vec();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();
    if distinct.len() < 2 {
        return false;
    }

    let linear: Vec<f64> = distinct.windows(2).map(|w| w[1] - w[0]).collect();
    let log: Vec<f64> = distinct
        .windows(2)
        .map(|w| w[1].log10() - w[0].log10())
        .collect();

    match (spread_ratio(&linear), spread_ratio(&log)) {
        (Some(ratio), Some(log_ratio)) => log_ratio < ratio,
        _ => false,
    }
}

/// max / min of a list of gaps, `None` if empty or the smallest gap is not positive.
fn spread_ratio(diffs: &[f64]) -> Option<f64> {
    let min = diffs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = diffs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if diffs.is_empty() || min <= 0.0 {
        return None;
    }
    let ratio = max / min;
    ratio.is_finite().then_some(ratio)
}

/// Minimum and maximum of the present values.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Maps encoded values of one attribute into `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScale {
    kind: ScaleKind,
    min: f64,
    max: f64,
}

impl ChartScale {
    pub fn new(kind: ScaleKind, domain: (f64, f64)) -> Self {
        let (mut min, mut max) = domain;
        if kind == ScaleKind::Log && (min <= 0.0 || max <= 0.0) {
            return Self::new(ScaleKind::Linear, domain);
        }
        if kind == ScaleKind::Linear && (max - min).abs() < f64::EPSILON {
            min -= 0.5;
            max += 0.5;
        }
        Self { kind, min, max }
    }

    pub fn new_linear(domain: (f64, f64)) -> Self {
        Self::new(ScaleKind::Linear, domain)
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Position of `value` in `[0, 1]`; values outside the domain fall outside it.
    /// A flat log or band domain maps everything to 0.5.
    pub fn normalize(&self, value: f64) -> f64 {
        let res = match self.kind {
            ScaleKind::Linear => (value - self.min) / (self.max - self.min),
            ScaleKind::Log => {
                let (lo, hi) = (self.min.log10(), self.max.log10());
                if (hi - lo).abs() < f64::EPSILON {
                    0.5
                } else {
                    (value.log10() - lo) / (hi - lo)
                }
            }
            ScaleKind::Band => {
                // slot centres of max - min + 1 bands
                let slots = (self.max - self.min).round() + 1.0;
                if slots <= 1.0 {
                    0.5
                } else {
                    (value - self.min + 0.5) / slots
                }
            }
        };
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }
}
