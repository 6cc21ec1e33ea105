//! Wall-clock benchmarking for the `oxipng` PNG optimizer.
//!
//! `oxibench` runs the optimizer once per optimization level against a
//! sample image, captures the optimized bytes from a pipe instead of a
//! file, and reports how long each level took and how many bytes it
//! produced. The optimizer is a black box found on `PATH`; the only
//! contract is that `oxipng -o <level> -q --stdout <file>` writes the
//! optimized image to standard output.
//!
//! Trials run strictly one after another, and every level is reported
//! exactly as observed: a failing or silent optimizer run is recorded with
//! whatever output it produced, never retried.

use std::path::PathBuf;

use clap::Parser;

pub mod config;
pub mod report;
pub mod runner;
mod sys;
pub mod trial;

pub use config::BenchConfig;
pub use runner::BenchRunner;
pub use trial::TrialResult;

/// Benchmark every oxipng optimization level against one image
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Image to benchmark against. Default to `bench.png`
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
    /// Lowest optimization level to run. Default to 1
    #[arg(long)]
    pub min_level: Option<u8>,
    /// Highest optimization level to run. Default to 6
    #[arg(long)]
    pub max_level: Option<u8>,
}

impl Cli {
    pub fn run(&self) -> anyhow::Result<()> {
        // Overwrite the default benchmark parameters
        let mut config = BenchConfig::default();
        if let Some(file) = &self.file {
            config.input = file.clone();
        }
        if let Some(min_level) = self.min_level {
            config.min_level = min_level;
        }
        if let Some(max_level) = self.max_level {
            config.max_level = max_level;
        }
        let mut runner = BenchRunner::new(config);
        runner.run()
    }
}
