use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast total completion time of a task list with Monte Carlo sampling
    Simulate {
        /// Task file (YAML list, or CSV with a header row)
        #[arg(short, long)]
        input: String,
        /// Optional output file (.json for JSON, YAML otherwise)
        #[arg(short, long)]
        output: Option<String>,
        /// Number of simulation iterations [default: 50000]
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Number of histogram bins [default: 20]
        #[arg(short, long)]
        bins: Option<usize>,
        /// Confidence level in percent [default: 95]
        #[arg(short, long)]
        confidence: Option<f64>,
        /// Optional YAML settings file; flags take precedence
        #[arg(long)]
        config: Option<String>,
        /// Include every trial total in the output file
        #[arg(long, default_value_t = false)]
        include_results: bool,
    },
    /// Convert a CSV task sheet into a YAML task file
    Import {
        /// CSV file (Name, Description, Min, Max)
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
