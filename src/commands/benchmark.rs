//! Benchmark command
//!
//! Generates many puzzles in parallel and reports how hard the table made it.

use crate::associations::AssociationSource;
use crate::generator::{Generator, StartWord};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub steps: u32,
    pub total_runs: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    /// Attempts needed per successful run
    pub distribution: FxHashMap<usize, usize>,
    pub slowest: Duration,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

struct RunOutcome {
    attempts: Option<usize>,
    duration: Duration,
}

/// Generate `runs` puzzles of depth `steps`
///
/// Run `i` uses its own generator seeded with `seed + i`, so a benchmark is
/// reproducible regardless of thread scheduling.
pub fn run_benchmark<A>(
    generator: &Generator<'_, A>,
    steps: u32,
    runs: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult
where
    A: AssociationSource + Sync,
{
    let pb = if show_progress {
        let pb = ProgressBar::new(runs as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<RunOutcome> = (0..runs)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let run_start = Instant::now();
            let attempts = generator
                .generate(steps, &StartWord::Random, &mut rng)
                .map(|generated| generated.attempts)
                .ok();
            pb.inc(1);
            RunOutcome {
                attempts,
                duration: run_start.elapsed(),
            }
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_attempts = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut succeeded = 0;

    for attempts in outcomes.iter().filter_map(|o| o.attempts) {
        succeeded += 1;
        total_attempts += attempts;
        min_attempts = min_attempts.min(attempts);
        max_attempts = max_attempts.max(attempts);
        *distribution.entry(attempts).or_insert(0) += 1;
    }

    BenchmarkResult {
        steps,
        total_runs: runs,
        succeeded,
        failed: runs - succeeded,
        total_attempts,
        average_attempts: if succeeded == 0 {
            0.0
        } else {
            total_attempts as f64 / succeeded as f64
        },
        min_attempts: if succeeded == 0 { 0 } else { min_attempts },
        max_attempts,
        distribution,
        slowest: outcomes
            .iter()
            .map(|o| o.duration)
            .max()
            .unwrap_or_default(),
        duration,
        puzzles_per_second: if duration.is_zero() {
            0.0
        } else {
            succeeded as f64 / duration.as_secs_f64()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::associations::PairTable;
    use crate::generator::GeneratorConfig;

    #[test]
    fn benchmark_runs() {
        let table = PairTable::embedded();
        let generator = Generator::new(&table, GeneratorConfig::default());
        let result = run_benchmark(&generator, 2, 8, 42, false);

        assert_eq!(result.total_runs, 8);
        assert_eq!(result.succeeded + result.failed, 8);
        assert!(result.succeeded > 0);
        assert!(result.min_attempts >= 1);
        assert!(result.average_attempts >= result.min_attempts as f64);
        assert!(result.average_attempts <= result.max_attempts as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let table = PairTable::embedded();
        let generator = Generator::new(&table, GeneratorConfig::default());
        let result = run_benchmark(&generator, 1, 10, 7, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.succeeded);
        let attempts_sum: usize = result.distribution.iter().map(|(a, n)| a * n).sum();
        assert_eq!(attempts_sum, result.total_attempts);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let table = PairTable::embedded();
        let generator = Generator::new(&table, GeneratorConfig::default());
        let a = run_benchmark(&generator, 2, 6, 3, false);
        let b = run_benchmark(&generator, 2, 6, 3, false);

        assert_eq!(a.total_attempts, b.total_attempts);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_counts_failures() {
        let table = PairTable::new([("море", "волна")]);
        let config = GeneratorConfig::default().with_max_attempts(Some(3));
        let generator = Generator::new(&table, config);
        let result = run_benchmark(&generator, 1, 4, 0, false);

        assert_eq!(result.succeeded, 0);
        assert_eq!(result.failed, 4);
        assert_eq!(result.min_attempts, 0);
        assert!(result.average_attempts.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_zero_runs() {
        let table = PairTable::embedded();
        let generator = Generator::new(&table, GeneratorConfig::default());
        let result = run_benchmark(&generator, 1, 0, 0, false);

        assert_eq!(result.total_runs, 0);
        assert_eq!(result.total_attempts, 0);
    }
}
