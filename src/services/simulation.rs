use rand::Rng;

use crate::domain::task::Task;
use crate::services::sampler::{RandomTaskSampler, TaskSampler};

pub const DEFAULT_ITERATIONS: usize = 50_000;
/// Upper bound accepted from settings; also caps the up-front allocation.
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Runs `iterations` trials with the thread-local rng. Each trial total is the
/// sum of one sample per task, in task order.
pub fn run_simulation(tasks: &[Task], iterations: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    run_simulation_with_rng(tasks, iterations, &mut rng)
}

pub fn run_simulation_with_rng<R: Rng + ?Sized>(
    tasks: &[Task],
    iterations: usize,
    rng: &mut R,
) -> Vec<f64> {
    let mut sampler = RandomTaskSampler::new(rng);
    run_simulation_with_sampler(tasks, iterations, &mut sampler)
}

pub fn run_simulation_with_sampler<S: TaskSampler + ?Sized>(
    tasks: &[Task],
    iterations: usize,
    sampler: &mut S,
) -> Vec<f64> {
    tracing::debug!(tasks = tasks.len(), iterations, "running simulation");

    let mut totals = Vec::with_capacity(iterations.min(MAX_ITERATIONS));
    for _ in 0..iterations {
        totals.push(simulate_single_trial(tasks, sampler));
    }
    totals
}

fn simulate_single_trial<S: TaskSampler + ?Sized>(tasks: &[Task], sampler: &mut S) -> f64 {
    tasks
        .iter()
        .fold(0.0_f64, |total, task| total + sampler.sample(task))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingSampler, LowerBoundSampler, task};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn returns_one_total_per_iteration() {
        let tasks = vec![task("A", "uniform", 1.0, 3.0), task("B", "triangular", 2.0, 8.0)];
        let mut rng = StdRng::seed_from_u64(42);
        let totals = run_simulation_with_rng(&tasks, 1_234, &mut rng);
        assert_eq!(totals.len(), 1_234);
        assert!(totals.iter().all(|total| (3.0..=11.0).contains(total)));
    }

    #[test]
    fn zero_iterations_yield_empty_results() {
        let tasks = vec![task("A", "uniform", 1.0, 3.0)];
        assert!(run_simulation(&tasks, 0).is_empty());
    }

    #[test]
    fn empty_task_list_yields_zero_totals() {
        let totals = run_simulation(&[], 25);
        assert_eq!(totals, vec![0.0; 25]);
    }

    #[test]
    fn degenerate_tasks_sum_exactly() {
        let tasks = vec![task("A", "uniform", 1.0, 1.0), task("B", "uniform", 2.0, 2.0)];
        let totals = run_simulation(&tasks, 100);
        assert_eq!(totals.len(), 100);
        assert!(totals.iter().all(|total| *total == 3.0));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let tasks = vec![task("A", "uniform", 0.0, 5.0), task("B", "triangular", 1.0, 9.0)];
        let first = run_simulation_with_rng(&tasks, 500, &mut StdRng::seed_from_u64(5));
        let second = run_simulation_with_rng(&tasks, 500, &mut StdRng::seed_from_u64(5));
        assert_eq!(first, second);
    }

    #[test]
    fn sampler_is_called_once_per_task_and_trial() {
        let tasks = vec![task("A", "uniform", 0.0, 2.0), task("B", "uniform", 0.0, 3.0)];
        let mut sampler = CountingSampler { calls: 0 };
        let totals = run_simulation_with_sampler(&tasks, 10, &mut sampler);
        assert_eq!(sampler.calls, 20);
        assert_eq!(totals, vec![5.0; 10]);
    }

    #[test]
    fn injected_sampler_replaces_randomness() {
        let tasks = vec![task("A", "triangular", 4.0, 9.0), task("B", "uniform", 6.0, 1.0)];
        let totals = run_simulation_with_sampler(&tasks, 3, &mut LowerBoundSampler);
        assert_eq!(totals, vec![5.0, 5.0, 5.0]);
    }
}
