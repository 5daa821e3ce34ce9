pub mod csv_import;
pub mod forecast;
pub mod histogram;
pub mod percentiles;
pub mod sampler;
pub mod settings;
pub mod simulation;
pub mod simulation_types;
pub mod task_yaml;
