use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_forecast_report;
use crate::services::forecast::{forecast_from_task_file, write_forecast_output};
use crate::services::settings::SimulationSettings;

pub fn simulate_command(cmd: Commands) -> ExitCode {
    let Commands::Simulate {
        input,
        output,
        iterations,
        bins,
        confidence,
        config,
        include_results,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let settings = match config.as_deref().map(SimulationSettings::from_yaml_file) {
        Some(Ok(settings)) => settings,
        Some(Err(e)) => {
            eprintln!("Failed to load settings: {e:?}");
            return ExitCode::FAILURE;
        }
        None => SimulationSettings::default(),
    }
    .with_overrides(iterations, bins, confidence);

    let mut forecast = match forecast_from_task_file(&input, &settings) {
        Ok(forecast) => forecast,
        Err(e) => {
            eprintln!("Failed to forecast tasks: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    if !include_results {
        forecast.results = None;
    }

    println!("{}", format_forecast_report(&forecast));

    if let Some(output) = output {
        if let Err(e) = write_forecast_output(&output, &forecast) {
            eprintln!("Failed to write forecast output: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("Forecast written to {output}");
    }
    ExitCode::SUCCESS
}
