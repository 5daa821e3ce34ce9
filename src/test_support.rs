use rand::rngs::mock::StepRng;

use crate::domain::task::{DistributionKind, Task};
use crate::services::sampler::TaskSampler;

// A mock TaskSampler that always returns the lower bound
pub struct LowerBoundSampler;
impl TaskSampler for LowerBoundSampler {
    fn sample(&mut self, task: &Task) -> f64 {
        task.bounds().0
    }
}

// Returns the tasks' upper bounds in turn and counts the calls
pub struct CountingSampler {
    pub calls: usize,
}
impl TaskSampler for CountingSampler {
    fn sample(&mut self, task: &Task) -> f64 {
        self.calls += 1;
        task.bounds().1
    }
}

pub fn task(name: &str, distribution: &str, min: f64, max: f64) -> Task {
    Task::new(name, DistributionKind::from_tag(distribution), min, max)
}

/// An rng whose every `gen::<f64>()` yields `unit` (must be a multiple of 2^-53).
pub fn step_rng_at(unit: f64) -> StepRng {
    let mantissa = (unit * (1u64 << 53) as f64) as u64;
    StepRng::new(mantissa << 11, 0)
}
