use serde::{Deserialize, Serialize};

pub const DEFAULT_NUMBER_OF_BINS: usize = 20;

/// Equal-width frequency counts over the observed range of trial totals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Histogram {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    pub min_value: f64,
    pub max_value: f64,
}

impl Histogram {
    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            counts: Vec::new(),
            min_value: 0.0,
            max_value: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn number_of_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Builds a histogram with `number_of_bins` equal-width bins spanning
/// `[min(totals), max(totals)]`.
///
/// - Empty input => [`Histogram::empty`].
/// - All totals equal => every count lands in bin 0.
/// - The maximum value is clamped into the last bin.
pub fn build_histogram(totals: &[f64], number_of_bins: usize) -> Histogram {
    if totals.is_empty() {
        return Histogram::empty();
    }

    let min_value = totals.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_value = totals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if number_of_bins == 0 {
        return Histogram {
            labels: Vec::new(),
            counts: Vec::new(),
            min_value,
            max_value,
        };
    }

    let mut counts = vec![0usize; number_of_bins];
    for value in totals {
        counts[bin_index(*value, min_value, max_value, number_of_bins)] += 1;
    }

    let size = bin_size(min_value, max_value, number_of_bins);
    let labels = (0..number_of_bins)
        .map(|i| {
            let start = min_value + i as f64 * size;
            let end = start + size;
            format!("{start:.1} - {end:.1}")
        })
        .collect();

    Histogram {
        labels,
        counts,
        min_value,
        max_value,
    }
}

/// Bin that `value` falls into, clamped to `[0, number_of_bins - 1]`.
///
/// A zero-width range maps everything to bin 0, as does NaN.
pub fn bin_index(value: f64, min_value: f64, max_value: f64, number_of_bins: usize) -> usize {
    if number_of_bins == 0 {
        return 0;
    }
    let size = bin_size(min_value, max_value, number_of_bins);
    if !(size > 0.0) || !size.is_finite() {
        return 0;
    }
    let position = ((value - min_value) / size).floor();
    if !(position > 0.0) {
        return 0;
    }
    (position as usize).min(number_of_bins - 1)
}

fn bin_size(min_value: f64, max_value: f64, number_of_bins: usize) -> f64 {
    if number_of_bins == 0 {
        return 0.0;
    }
    (max_value - min_value) / number_of_bins as f64
}
