use serde::{Deserialize, Serialize};

use crate::services::histogram::{Histogram, bin_index};

pub const DEFAULT_CONFIDENCE: f64 = 95.0;

/// Total time at a confidence level, plus the histogram bin that holds it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PercentileResult {
    pub confidence: f64,
    pub value: f64,
    pub bin: Option<usize>,
}

/// Value below which `confidence_pct` percent of `totals` fall.
///
/// - Index is `floor(confidence_pct / 100 * len)` into the sorted totals.
/// - An index outside the data yields `0.0`. This covers empty input and
///   `confidence_pct == 100`, which lands one past the end. The 100% case
///   returning `0.0` rather than the maximum is kept on purpose so results
///   match earlier releases.
pub fn percentile(totals: &[f64], confidence_pct: f64) -> f64 {
    let mut sorted = totals.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    value_sorted(&sorted, confidence_pct)
}

/// Same as [`percentile`] for a slice already sorted ascending.
pub fn value_sorted(sorted_values: &[f64], confidence_pct: f64) -> f64 {
    let position = ((confidence_pct / 100.0) * sorted_values.len() as f64).floor();
    if !(position >= 0.0) {
        return 0.0;
    }
    sorted_values
        .get(position as usize)
        .copied()
        .unwrap_or(0.0)
}

/// Histogram bin of an already computed percentile value, using the same
/// formula as the histogram builder. `None` when there is nothing to mark.
pub fn percentile_bin(
    value: f64,
    min_value: f64,
    max_value: f64,
    number_of_bins: usize,
    sample_count: usize,
) -> Option<usize> {
    if sample_count == 0 || number_of_bins == 0 {
        return None;
    }
    Some(bin_index(value, min_value, max_value, number_of_bins))
}

pub fn locate_percentile(
    totals: &[f64],
    histogram: &Histogram,
    confidence: f64,
) -> PercentileResult {
    let value = percentile(totals, confidence);
    let bin = percentile_bin(
        value,
        histogram.min_value,
        histogram.max_value,
        histogram.number_of_bins(),
        totals.len(),
    );
    PercentileResult {
        confidence,
        value,
        bin,
    }
}
