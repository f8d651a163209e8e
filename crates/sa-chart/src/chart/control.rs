//! Individuals control chart over an immutable series.
//!
//! A control chart plots a time-ordered series against limits derived
//! from the same data's mean and spread. Points beyond the limits are
//! flagged as statistically unusual.
//!
//! The series is taken by value at construction and never mutated, so
//! every accessor is deterministic for the lifetime of the chart.

use serde::{Deserialize, Serialize};

use crate::chart::descriptive::{mean, median, sample_std_dev};

/// Number of standard deviations between the center line and each limit.
const SIGMA_MULTIPLIER: f64 = 3.0;

/// One element of the series, identified by insertion position and value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Zero-based position in the series (insertion order is time order).
    pub index: usize,
    /// The observed value.
    pub value: f64,
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.index, self.value)
    }
}

/// Lower and upper control limits derived from a series.
///
/// `lower <= upper` holds whenever the standard deviation is defined,
/// since both are offsets of the same mean by a non-negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    /// Lower control limit: mean - 3 sigma.
    pub lower: f64,
    /// Upper control limit: mean + 3 sigma.
    pub upper: f64,
}

/// Control chart statistics for an ordered, finite series of values.
///
/// Degenerate series follow the NaN convention: `mean` and `median` of an
/// empty series are NaN, `std_dev` is NaN for fewer than two values, and
/// the control limits inherit NaN. NaN comparisons are false, so outlier
/// lists stay empty and [`ControlChart::is_last_point_in_control`] is
/// false when the limits are undefined.
#[derive(Debug, Clone)]
pub struct ControlChart {
    values: Vec<f64>,
}

impl ControlChart {
    /// Build a chart over the given series. Order is preserved exactly;
    /// no sorting, no deduplication.
    pub fn new(values: Vec<f64>) -> Self {
        ControlChart { values }
    }

    /// Arithmetic mean of the series; NaN when empty.
    pub fn mean(&self) -> f64 {
        mean(&self.values)
    }

    /// Median of the series by value order; NaN when empty.
    pub fn median(&self) -> f64 {
        median(&self.values)
    }

    /// Sample standard deviation (n-1); NaN for fewer than two values.
    pub fn std_dev(&self) -> f64 {
        sample_std_dev(&self.values)
    }

    /// Lower control limit: mean - 3 standard deviations.
    pub fn lower_control_limit(&self) -> f64 {
        self.mean() - SIGMA_MULTIPLIER * self.std_dev()
    }

    /// Upper control limit: mean + 3 standard deviations.
    pub fn upper_control_limit(&self) -> f64 {
        self.mean() + SIGMA_MULTIPLIER * self.std_dev()
    }

    /// Both control limits, pairwise equal to the individual accessors.
    pub fn control_limits(&self) -> ControlLimits {
        ControlLimits {
            lower: self.lower_control_limit(),
            upper: self.upper_control_limit(),
        }
    }

    /// Every observation strictly below the lower control limit, in
    /// ascending index order.
    pub fn points_outside_lcl(&self) -> Vec<Observation> {
        let lcl = self.lower_control_limit();
        self.observations().filter(|o| o.value < lcl).collect()
    }

    /// Every observation strictly above the upper control limit, in
    /// ascending index order.
    pub fn points_outside_ucl(&self) -> Vec<Observation> {
        let ucl = self.upper_control_limit();
        self.observations().filter(|o| o.value > ucl).collect()
    }

    /// The last observation by insertion order; `None` when the series
    /// is empty.
    pub fn get_last_point(&self) -> Option<Observation> {
        self.values.last().map(|&value| Observation {
            index: self.values.len() - 1,
            value,
        })
    }

    /// Whether the last observation lies within the control limits,
    /// inclusive on both ends.
    ///
    /// The inclusive test is intentionally asymmetric with the strict
    /// outlier tests: a point exactly on a limit is in control and is
    /// also not reported as an outlier. False when the series is empty
    /// or the limits are undefined.
    pub fn is_last_point_in_control(&self) -> bool {
        match self.get_last_point() {
            Some(point) => {
                let limits = self.control_limits();
                limits.lower <= point.value && point.value <= limits.upper
            }
            None => false,
        }
    }

    /// Number of observations in the series.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying series in insertion order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| Observation { index, value })
    }
}
