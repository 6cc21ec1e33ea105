use std::{ops::RangeInclusive, path::PathBuf};

/// Name of the optimizer executable under test. Resolved via `PATH`.
pub const PROGRAM: &str = "oxipng";

/// Image the benchmark runs against when no input is given.
pub const DEFAULT_INPUT: &str = "bench.png";

/// Lowest optimization level the benchmark will pass to the optimizer.
pub const MIN_OPT_LEVEL: u8 = 1;

/// Highest optimization level the benchmark will pass to the optimizer.
pub const MAX_OPT_LEVEL: u8 = 6;

/// The benchmark configuration.
///
/// With no overrides this benchmarks `bench.png` across the full level
/// range, which is also what the CLI does when invoked with no arguments.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Optimizer executable to invoke. Always `oxipng` when run from the
    /// CLI; callers may point it at another binary.
    pub program: String,
    /// Image passed to the optimizer on every trial.
    pub input: PathBuf,
    /// Lowest optimization level to run. Default to 1
    pub min_level: u8,
    /// Highest optimization level to run. Default to 6
    pub max_level: u8,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            program: PROGRAM.to_owned(),
            input: PathBuf::from(DEFAULT_INPUT),
            min_level: MIN_OPT_LEVEL,
            max_level: MAX_OPT_LEVEL,
        }
    }
}

impl BenchConfig {
    /// Optimization levels to benchmark, in ascending order.
    pub fn levels(&self) -> RangeInclusive<u8> {
        self.min_level..=self.max_level
    }

    /// Reject level ranges the optimizer presets do not cover.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.min_level < MIN_OPT_LEVEL || self.max_level > MAX_OPT_LEVEL {
            anyhow::bail!(
                "Optimization levels must be within {}..={}",
                MIN_OPT_LEVEL,
                MAX_OPT_LEVEL
            );
        }
        if self.min_level > self.max_level {
            anyhow::bail!(
                "min-level ({}) cannot be greater than max-level ({})",
                self.min_level,
                self.max_level
            );
        }
        Ok(())
    }
}
