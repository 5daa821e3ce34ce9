use rand::Rng;
use rand_distr::{Distribution, Triangular};

use crate::domain::task::{DistributionKind, Task};

pub trait TaskSampler {
    fn sample(&mut self, task: &Task) -> f64;
}

pub struct RandomTaskSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomTaskSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TaskSampler for RandomTaskSampler<R> {
    fn sample(&mut self, task: &Task) -> f64 {
        sample_task(task, &mut self.rng)
    }
}

/// Draws one duration for `task` from `rng`.
///
/// Never fails: NaN bounds come back as NaN.
pub fn sample_task<R: Rng + ?Sized>(task: &Task, rng: &mut R) -> f64 {
    let (low, high) = task.bounds();
    match task.distribution {
        DistributionKind::Uniform => sample_uniform(low, high, rng),
        DistributionKind::Triangular => sample_triangular(low, high, task.mode(), rng),
    }
}

fn sample_uniform<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.r#gen();
    low + u * (high - low)
}

fn sample_triangular<R: Rng + ?Sized>(low: f64, high: f64, mode: f64, rng: &mut R) -> f64 {
    if low == high {
        return low;
    }
    match Triangular::new(low, high, mode) {
        Ok(triangular) => triangular.sample(rng),
        Err(_) => f64::NAN,
    }
}
