use crate::services::simulation_types::ForecastOutput;

pub fn format_forecast_report(output: &ForecastOutput) -> String {
    let report = &output.report;
    let percentile = &report.percentile;

    let mut lines = Vec::new();
    lines.push("Forecast Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Tasks: {}", report.tasks));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!("Mean: {:.2}", report.mean));
    lines.push(format!("Range: {:.2} - {:.2}", report.min_value, report.max_value));
    lines.push(String::new());
    lines.push(format!(
        "By {}% certainty, tasks finish in about {:.2} time units.",
        percentile.confidence, percentile.value
    ));
    lines.push(String::new());
    lines.push("Bin | Count".to_string());
    lines.push("----|------".to_string());
    for (index, (label, count)) in output
        .histogram
        .labels
        .iter()
        .zip(&output.histogram.counts)
        .enumerate()
    {
        lines.push(format_bin_row(label, *count, percentile.bin == Some(index)));
    }

    lines.join("\n")
}

fn format_bin_row(label: &str, count: usize, is_percentile_bin: bool) -> String {
    let marker = if is_percentile_bin { " <" } else { "" };
    format!("{label} | {count}{marker}")
}
