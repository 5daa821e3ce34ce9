use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::domain::task::Task;
use crate::services::csv_import::{CsvImportError, import_tasks_from_csv_file};

#[derive(Error, Debug)]
pub enum TaskFileError {
    #[error("failed to read task file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse task yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to import task csv: {0}")]
    Import(#[from] CsvImportError),
    #[error("missing task name at position {0}")]
    MissingName(usize),
}

/// Loads tasks from `path`: `.csv` files go through the csv importer,
/// everything else is read as a yaml task list.
pub fn load_tasks_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, TaskFileError> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Ok(import_tasks_from_csv_file(path)?)
    } else {
        load_tasks_from_yaml_file(path)
    }
}

pub fn load_tasks_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, TaskFileError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_tasks_from_yaml_str(&contents)
}

pub fn deserialize_tasks_from_yaml_str(input: &str) -> Result<Vec<Task>, TaskFileError> {
    let tasks: Vec<Task> = serde_yaml::from_str(input)?;
    if let Some(position) = tasks.iter().position(|task| task.name.trim().is_empty()) {
        return Err(TaskFileError::MissingName(position));
    }
    Ok(tasks)
}

pub fn serialize_tasks_to_yaml<W: Write>(writer: &mut W, tasks: &[Task]) -> io::Result<()> {
    let yaml = serde_yaml::to_string(tasks).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
