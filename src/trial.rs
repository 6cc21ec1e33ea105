use std::{
    path::Path,
    process::{Command, Stdio},
    time::{Duration, Instant},
};

use log::warn;

/// One timed run of the optimizer at a single optimization level.
#[derive(Debug, Clone)]
pub struct TrialResult {
    /// Program the trial ran.
    pub program: String,
    /// Optimization level passed via `-o`.
    pub opt_level: u8,
    /// Wall-clock time of the whole child-process call.
    pub time: Duration,
    /// Byte length of the captured standard output.
    pub size: usize,
}

/// Build the optimizer invocation for one trial: quiet, with the optimized
/// bytes directed to standard output instead of a file.
pub fn optimizer_command(program: &str, input: &Path, opt_level: u8) -> Command {
    let mut cmd = Command::new(program);
    cmd.arg("-o")
        .arg(opt_level.to_string())
        .arg("-q")
        .arg("--stdout")
        .arg(input)
        .stdout(Stdio::piped());
    cmd
}

/// Launch the optimizer, block until it exits, and record the elapsed
/// wall-clock time together with the size of whatever it wrote to standard
/// output.
///
/// A non-zero exit is not a trial failure: the captured output (possibly
/// empty) is still measured and recorded.
pub fn run_trial(program: &str, input: &Path, opt_level: u8) -> anyhow::Result<TrialResult> {
    let mut cmd = optimizer_command(program, input, opt_level);
    let start = Instant::now();
    let child = cmd.spawn()?;
    let output = child.wait_with_output()?;
    let time = start.elapsed();
    if !output.status.success() {
        warn!("{} -o{} exited with {}", program, opt_level, output.status);
    }
    Ok(TrialResult {
        program: program.to_owned(),
        opt_level,
        time,
        size: output.stdout.len(),
    })
}
