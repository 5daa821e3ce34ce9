use std::io;
use std::path::Path;

use thiserror::Error;

use crate::domain::task::{DistributionKind, Task};

#[derive(Error, Debug)]
pub enum CsvImportError {
    #[error("failed to read csv file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse csv: {0}")]
    Parse(#[from] csv::Error),
}

/// A row of an imported task sheet. Carries no distribution; see [`ImportedTask::into_task`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedTask {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

impl ImportedTask {
    pub fn into_task(self) -> Task {
        Task {
            name: self.name,
            distribution: DistributionKind::Uniform,
            min: self.min,
            max: self.max,
        }
    }
}

pub fn import_tasks_from_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, CsvImportError> {
    let contents = std::fs::read_to_string(path)?;
    let imported = parse_imported_tasks(&contents)?;
    Ok(imported.into_iter().map(ImportedTask::into_task).collect())
}

/// Parses comma separated rows into tasks.
///
/// The first row is a header and is skipped. Columns 0 and 1 form the name
/// (`"<col0>: <col1>"`), columns 2 and 3 are the integer bounds. Bounds that
/// do not start with a number become NaN.
pub fn parse_imported_tasks(input: &str) -> Result<Vec<ImportedTask>, CsvImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let mut tasks = Vec::new();
    for result in reader.records() {
        let record = result?;
        let field = |index: usize| record.get(index).unwrap_or("");
        let task = ImportedTask {
            name: format!("{}: {}", field(0), field(1)),
            min: parse_integer_prefix(field(2)),
            max: parse_integer_prefix(field(3)),
        };
        if task.min.is_nan() || task.max.is_nan() {
            tracing::warn!(name = %task.name, "imported task has non-numeric bounds");
        }
        tasks.push(task);
    }
    tracing::debug!(rows = tasks.len(), "imported tasks from csv");
    Ok(tasks)
}

/// Reads the leading integer of `value`: optional whitespace and sign, then
/// digits. Anything after the digits is ignored; no digits gives NaN.
fn parse_integer_prefix(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return f64::NAN;
    }
    rest[..digits_len]
        .parse::<f64>()
        .map(|number| sign * number)
        .unwrap_or(f64::NAN)
}
