use colored::Colorize;

use crate::{
    config::BenchConfig,
    report, sys,
    trial::{self, TrialResult},
};

/// Benchmark running info
#[derive(Debug)]
pub struct BenchRunner {
    /// Benchmark parameters
    config: BenchConfig,
    /// Completed trials, one per level, in run order
    results: Vec<TrialResult>,
}

impl BenchRunner {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            results: Vec::new(),
        }
    }

    /// Completed trials so far, in run order.
    pub fn results(&self) -> &[TrialResult] {
        &self.results
    }

    /// Checks performed before any trial runs. The optimizer is never
    /// launched when these fail.
    fn pre_run_checks(&self) -> anyhow::Result<()> {
        self.config.validate()?;
        if !self.config.input.is_file() {
            anyhow::bail!("Invalid file: {}", self.config.input.display());
        }
        Ok(())
    }

    fn print_before_run(&self) {
        eprintln!(
            "{}",
            format!(
                "Benchmarking {} against {} (levels {}-{})",
                self.config.program,
                self.config.input.display(),
                self.config.min_level,
                self.config.max_level
            )
            .blue()
        );
        eprintln!();
    }

    fn print_after_run(&self) {
        eprintln!("\n{}\n", "✔ Benchmarking Finished.".green());
    }

    /// Run one trial per optimization level in ascending order, then print
    /// the per-trial report to standard output.
    ///
    /// Progress goes to standard error; standard output carries nothing but
    /// the report.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.pre_run_checks()?;
        sys::log_platform_info();
        let input_size = std::fs::metadata(&self.config.input)?.len();
        self.print_before_run();
        for opt_level in self.config.levels() {
            eprint!("{} ", format!("-o{}", opt_level).blue().bold());
            let result = trial::run_trial(&self.config.program, &self.config.input, opt_level)?;
            eprint!(
                "{} {:.3}s, {} bytes",
                "✔".green(),
                result.time.as_secs_f64(),
                result.size
            );
            if input_size > 0 {
                eprint!(" ({})", report::size_delta(input_size, result.size));
            }
            eprintln!();
            self.results.push(result);
        }
        self.print_after_run();
        report::print_report(&self.results);
        Ok(())
    }
}
