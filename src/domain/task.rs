use serde::{Deserialize, Serialize};

/// Sampling rule of a task. Tags match exactly; anything else falls back to
/// [`DistributionKind::Uniform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DistributionKind {
    #[default]
    Uniform,
    Triangular,
}

impl DistributionKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "uniform" => DistributionKind::Uniform,
            "triangular" => DistributionKind::Triangular,
            other => {
                tracing::warn!(tag = other, "unknown distribution, using uniform");
                DistributionKind::Uniform
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "uniform",
            DistributionKind::Triangular => "triangular",
        }
    }
}

impl From<String> for DistributionKind {
    fn from(value: String) -> Self {
        DistributionKind::from_tag(&value)
    }
}

impl From<DistributionKind> for String {
    fn from(value: DistributionKind) -> Self {
        value.tag().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub distribution: DistributionKind,
    pub min: f64,
    pub max: f64,
}

impl Task {
    pub fn new(name: &str, distribution: DistributionKind, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            distribution,
            min,
            max,
        }
    }

    /// Bounds in ascending order. Inverted bounds are swapped; NaN passes through.
    pub fn bounds(&self) -> (f64, f64) {
        if self.min > self.max {
            (self.max, self.min)
        } else {
            (self.min, self.max)
        }
    }

    /// Mode used by the triangular rule: the midpoint of the bounds.
    pub fn mode(&self) -> f64 {
        let (low, high) = self.bounds();
        (low + high) / 2.0
    }
}
