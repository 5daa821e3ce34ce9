pub mod base_commands;
pub mod import_cmd;
pub mod report_format;
pub mod simulate_cmd;
