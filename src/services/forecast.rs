use std::io;
use std::path::Path;

use rand::Rng;
use thiserror::Error;

use crate::domain::task::Task;
use crate::services::histogram::build_histogram;
use crate::services::percentiles::locate_percentile;
use crate::services::settings::{SettingsError, SimulationSettings};
use crate::services::simulation::run_simulation_with_rng;
use crate::services::simulation_types::{ForecastOutput, ForecastReport};
use crate::services::task_yaml::{TaskFileError, load_tasks_from_file};

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("failed to load tasks: {0}")]
    LoadTasks(#[from] TaskFileError),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("task list is empty")]
    EmptyTasks,
    #[error("failed to write forecast output: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize forecast as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize forecast as json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads tasks from `path` and forecasts them with the thread-local rng.
///
/// An empty task list is rejected here; the engine itself would return all
/// zero totals.
pub fn forecast_from_task_file(
    path: &str,
    settings: &SimulationSettings,
) -> Result<ForecastOutput, ForecastError> {
    settings.validate()?;
    let tasks = load_tasks_from_file(path)?;
    if tasks.is_empty() {
        return Err(ForecastError::EmptyTasks);
    }

    let mut rng = rand::thread_rng();
    let mut output = forecast_tasks_with_rng(&tasks, settings, &mut rng);
    output.report.data_source = data_source_name(path);
    Ok(output)
}

pub fn forecast_tasks_with_rng<R: Rng + ?Sized>(
    tasks: &[Task],
    settings: &SimulationSettings,
    rng: &mut R,
) -> ForecastOutput {
    let totals = run_simulation_with_rng(tasks, settings.iterations, rng);
    let histogram = build_histogram(&totals, settings.bins);
    let percentile = locate_percentile(&totals, &histogram, settings.confidence);
    tracing::info!(
        tasks = tasks.len(),
        iterations = settings.iterations,
        confidence = settings.confidence,
        value = percentile.value,
        "forecast complete"
    );

    let report = ForecastReport {
        data_source: String::new(),
        tasks: tasks.len(),
        iterations: settings.iterations,
        mean: mean(&totals),
        min_value: histogram.min_value,
        max_value: histogram.max_value,
        percentile,
    };

    ForecastOutput {
        report,
        histogram,
        results: Some(totals),
    }
}

/// Writes `output` as pretty json when `path` ends in `.json`, yaml otherwise.
pub fn write_forecast_output(path: &str, output: &ForecastOutput) -> Result<(), ForecastError> {
    let is_json = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let contents = if is_json {
        serde_json::to_string_pretty(output)?
    } else {
        serde_yaml::to_string(output)?
    };
    std::fs::write(path, contents)?;
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn data_source_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::task;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn settings(iterations: usize, bins: usize, confidence: f64) -> SimulationSettings {
        SimulationSettings {
            iterations,
            bins,
            confidence,
        }
    }

    #[test]
    fn degenerate_tasks_forecast_a_single_value() {
        let tasks = vec![task("A", "uniform", 1.0, 1.0), task("B", "uniform", 2.0, 2.0)];
        let mut rng = StdRng::seed_from_u64(42);
        let output = forecast_tasks_with_rng(&tasks, &settings(100, 7, 50.0), &mut rng);

        let results = output.results.unwrap();
        assert_eq!(results.len(), 100);
        assert!(results.iter().all(|total| *total == 3.0));
        assert_eq!(output.histogram.counts[0], 100);
        assert_eq!(output.histogram.total(), 100);
        assert_eq!(output.report.percentile.value, 3.0);
        assert_eq!(output.report.percentile.bin, Some(0));
        assert_eq!(output.report.mean, 3.0);
        assert_eq!(output.report.tasks, 2);
        assert_eq!(output.report.data_source, "");
    }

    #[test]
    fn report_range_matches_histogram() {
        let tasks = vec![task("A", "triangular", 0.0, 10.0), task("B", "uniform", 5.0, 6.0)];
        let mut rng = StdRng::seed_from_u64(8);
        let output = forecast_tasks_with_rng(&tasks, &settings(2_000, 20, 95.0), &mut rng);

        assert_eq!(output.report.min_value, output.histogram.min_value);
        assert_eq!(output.report.max_value, output.histogram.max_value);
        assert!(output.report.percentile.value > output.report.mean);
        assert!(output.report.percentile.bin.is_some());
    }

    #[test]
    fn forecast_from_task_file_sets_data_source_and_rejects_empty_lists() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir();
        let tasks_path = dir.join(format!("tasks-{nanos}.yaml"));
        std::fs::write(&tasks_path, "- name: A\n  min: 1\n  max: 2\n").unwrap();

        let output =
            forecast_from_task_file(tasks_path.to_str().unwrap(), &settings(10, 5, 50.0)).unwrap();
        assert_eq!(
            output.report.data_source,
            tasks_path.file_name().unwrap().to_str().unwrap()
        );
        assert_eq!(output.report.iterations, 10);

        let empty_path = dir.join(format!("empty-{nanos}.yaml"));
        std::fs::write(&empty_path, "[]\n").unwrap();
        let err = forecast_from_task_file(empty_path.to_str().unwrap(), &settings(10, 5, 50.0))
            .unwrap_err();
        assert!(matches!(err, ForecastError::EmptyTasks));

        let _ = std::fs::remove_file(tasks_path);
        let _ = std::fs::remove_file(empty_path);
    }

    #[test]
    fn write_forecast_output_picks_format_from_extension() {
        let tasks = vec![task("A", "uniform", 1.0, 1.0)];
        let mut rng = StdRng::seed_from_u64(1);
        let mut output = forecast_tasks_with_rng(&tasks, &settings(4, 2, 50.0), &mut rng);
        output.results = None;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir();
        let json_path = dir.join(format!("forecast-{nanos}.json"));
        let yaml_path = dir.join(format!("forecast-{nanos}.yaml"));

        write_forecast_output(json_path.to_str().unwrap(), &output).unwrap();
        write_forecast_output(yaml_path.to_str().unwrap(), &output).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["report"]["iterations"], 4);
        assert_eq!(json["histogram"]["counts"][0], 4);
        assert!(json.get("results").is_none());

        let yaml = std::fs::read_to_string(&yaml_path).unwrap();
        assert!(yaml.contains("report:"));
        assert!(yaml.contains("histogram:"));

        let _ = std::fs::remove_file(json_path);
        let _ = std::fs::remove_file(yaml_path);
    }
}
