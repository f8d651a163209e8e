//! Descriptive statistics over a finite series of observations.
//!
//! All functions are total: degenerate inputs yield NaN instead of
//! panicking, so callers can compose derived quantities without guards.

/// Arithmetic mean of all values.
///
/// Returns NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard median: middle value by sort order for an odd count, mean of
/// the two middle values for an even count.
///
/// Returns NaN for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Sample standard deviation (sum of squared deviations divided by n-1).
///
/// Requires at least two values for a defined result; returns NaN for
/// n <= 1. The sample framing corrects for estimating the mean from the
/// same data.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
