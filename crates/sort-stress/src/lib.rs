//! Sort Stress Test
//!
//! Repeatedly fills large arrays with random values, times the cutoff
//! quicksort against the standard library sort and checks the output.

mod settings;

pub use settings::StressConfig;

use quick_sort::{check_sorted, quick_sort};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Timing and verification result of one run
#[derive(Debug, Clone)]
pub struct RunTiming {
    /// Number of elements sorted
    pub size: usize,
    /// Iteration index within this size
    pub iteration: usize,
    /// Time taken by `slice::sort_unstable`
    pub std_sort: Duration,
    /// Time taken by `quick_sort`
    pub quick_sort: Duration,
    /// Whether the quicksort output was ordered
    pub verified: bool,
}

/// All runs of a stress test
#[derive(Debug, Clone, Default)]
pub struct StressReport {
    pub runs: Vec<RunTiming>,
}

impl StressReport {
    /// Number of runs that failed verification
    pub fn failures(&self) -> usize {
        self.runs.iter().filter(|run| !run.verified).count()
    }
}

/// Initialize logging
pub fn init_logging() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Overwrite every element with a uniform random value in `[min, max]`
pub fn fill_with_random<R: Rng>(values: &mut [i32], min: i32, max: i32, rng: &mut R) {
    for value in values.iter_mut() {
        *value = rng.gen_range(min..=max);
    }
}

/// Run every configured size and iteration, after validating `config`
pub fn run_stress_test<R: Rng>(config: &StressConfig, rng: &mut R) -> anyhow::Result<StressReport> {
    config.validate()?;
    let mut report = StressReport::default();

    for &size in &config.sizes {
        info!("Testing with {} random elements", size);
        let mut values = vec![0i32; size];

        for iteration in 0..config.iterations {
            fill_with_random(&mut values, config.min_value, config.max_value, rng);
            let started = Instant::now();
            values.sort_unstable();
            let std_sort = started.elapsed();
            info!("sort_unstable(): {:.6} seconds", std_sort.as_secs_f64());

            fill_with_random(&mut values, config.min_value, config.max_value, rng);
            let started = Instant::now();
            quick_sort(&mut values);
            let quick = started.elapsed();
            info!("quick_sort(): {:.6} seconds", quick.as_secs_f64());

            let verified = match check_sorted(&values) {
                Ok(()) => true,
                Err(err) => {
                    error!(size, iteration, "Verification failed: {}", err);
                    false
                }
            };

            report.runs.push(RunTiming {
                size,
                iteration,
                std_sort,
                quick_sort: quick,
                verified,
            });
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_smoke_run_verifies() {
        let config = StressConfig::smoke();
        let mut rng = StdRng::seed_from_u64(42);

        let report = run_stress_test(&config, &mut rng).unwrap();

        assert_eq!(report.runs.len(), config.sizes.len() * config.iterations);
        assert_eq!(report.failures(), 0);
        assert_eq!(report.runs[0].size, 10);
        assert_eq!(report.runs[1].iteration, 1);
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let config = StressConfig {
            min_value: 10,
            max_value: 5,
            ..StressConfig::smoke()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(run_stress_test(&config, &mut rng).is_err());

        let config = StressConfig {
            iterations: 0,
            ..StressConfig::smoke()
        };
        assert!(run_stress_test(&config, &mut rng).is_err());
    }

    #[test]
    fn test_fill_respects_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut values = vec![0; 1000];
        fill_with_random(&mut values, -5, 5, &mut rng);
        assert!(values.iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn test_failures_counted() {
        let run = |verified| RunTiming {
            size: 1,
            iteration: 0,
            std_sort: Duration::ZERO,
            quick_sort: Duration::ZERO,
            verified,
        };
        let report = StressReport {
            runs: vec![run(true), run(false), run(false)],
        };
        assert_eq!(report.failures(), 2);
    }
}
