use serde::Serialize;

use crate::services::histogram::Histogram;
use crate::services::percentiles::PercentileResult;

#[derive(Serialize, Debug, Clone)]
pub struct ForecastReport {
    pub data_source: String,
    pub tasks: usize,
    pub iterations: usize,
    pub mean: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub percentile: PercentileResult,
}

#[derive(Serialize, Debug, Clone)]
pub struct ForecastOutput {
    pub report: ForecastReport,
    pub histogram: Histogram,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<f64>>,
}
