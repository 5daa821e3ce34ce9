use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::csv_import::import_tasks_from_csv_file;
use crate::services::task_yaml::serialize_tasks_to_yaml;

pub fn import_command(cmd: Commands) -> ExitCode {
    let Commands::Import { input, output } = cmd else {
        return ExitCode::FAILURE;
    };

    let tasks = match import_tasks_from_csv_file(&input) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("Failed to import tasks: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let mut buffer = Vec::new();
    if let Err(e) = serialize_tasks_to_yaml(&mut buffer, &tasks) {
        eprintln!("Failed to serialize tasks to YAML: {e:?}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = std::fs::write(&output, buffer) {
        eprintln!("Failed to write output file: {e:?}");
        return ExitCode::FAILURE;
    }

    println!("Imported {} tasks to {output}", tasks.len());
    ExitCode::SUCCESS
}
