use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::histogram::DEFAULT_NUMBER_OF_BINS;
use crate::services::percentiles::DEFAULT_CONFIDENCE;
use crate::services::simulation::{DEFAULT_ITERATIONS, MAX_ITERATIONS};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse settings yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("iterations must be at most {MAX_ITERATIONS}, got {0}")]
    InvalidIterations(usize),
    #[error("number of bins must be greater than zero")]
    InvalidBins,
    #[error("confidence must be between 0 and 100, got {0}")]
    InvalidConfidence(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub iterations: usize,
    pub bins: usize,
    pub confidence: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            bins: DEFAULT_NUMBER_OF_BINS,
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

impl SimulationSettings {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Applies command line overrides on top of these settings.
    pub fn with_overrides(
        mut self,
        iterations: Option<usize>,
        bins: Option<usize>,
        confidence: Option<f64>,
    ) -> Self {
        if let Some(iterations) = iterations {
            self.iterations = iterations;
        }
        if let Some(bins) = bins {
            self.bins = bins;
        }
        if let Some(confidence) = confidence {
            self.confidence = confidence;
        }
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.iterations > MAX_ITERATIONS {
            return Err(SettingsError::InvalidIterations(self.iterations));
        }
        if self.bins == 0 {
            return Err(SettingsError::InvalidBins);
        }
        if !(0.0..=100.0).contains(&self.confidence) {
            return Err(SettingsError::InvalidConfidence(self.confidence));
        }
        Ok(())
    }
}
