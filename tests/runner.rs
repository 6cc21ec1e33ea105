#![cfg(unix)]

use std::time::Duration;

use crate::helper::TestBench;
use oxibench::{report, BenchRunner};


// Writes `level` bytes to stdout, so every level has a distinct size.
const STUB_LEVEL_SIZED: &str = r#"#!/bin/sh
# args: -o <level> -q --stdout <file>
level="$2"
i=0
while [ "$i" -lt "$level" ]; do
    printf x
    i=$((i+1))
done
"#;

// Echoes the input file back unchanged.
const STUB_CAT: &str = r#"#!/bin/sh
cat "$5"
"#;

#[test]
fn test_runs_every_level_in_ascending_order() -> anyhow::Result<()> {
    let bench = TestBench::new()?;
    let input = bench.input("bench.png", &[0u8; 1024])?;
    let program = bench.stub_optimizer(STUB_LEVEL_SIZED)?;
    let mut runner = BenchRunner::new(helper::config(&program, &input));
    runner.run()?;
    let results = runner.results();
    assert_eq!(results.len(), 6);
    let levels = results.iter().map(|r| r.opt_level).collect::<Vec<_>>();
    assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
    // Sizes are recorded exactly as the optimizer produced them
    let sizes = results.iter().map(|r| r.size).collect::<Vec<_>>();
    assert_eq!(sizes, vec![1, 2, 3, 4, 5, 6]);
    assert!(results.iter().all(|r| r.time > Duration::ZERO));
    Ok(())
}

#[test]
fn test_custom_level_range() -> anyhow::Result<()> {
    let bench = TestBench::new()?;
    let input = bench.input("bench.png", &[0u8; 64])?;
    let program = bench.stub_optimizer(STUB_LEVEL_SIZED)?;
    let mut config = helper::config(&program, &input);
    config.min_level = 2;
    config.max_level = 4;
    let mut runner = BenchRunner::new(config);
    runner.run()?;
    let levels = runner.results().iter().map(|r| r.opt_level).collect::<Vec<_>>();
    assert_eq!(levels, vec![2, 3, 4]);
    Ok(())
}

#[test]
fn test_identical_sizes_across_runs() -> anyhow::Result<()> {
    let bench = TestBench::new()?;
    let input = bench.input("bench.png", b"not really a png, but stable")?;
    let program = bench.stub_optimizer(STUB_CAT)?;
    let mut first = BenchRunner::new(helper::config(&program, &input));
    first.run()?;
    let mut second = BenchRunner::new(helper::config(&program, &input));
    second.run()?;
    let sizes = |runner: &BenchRunner| {
        runner
            .results()
            .iter()
            .map(|r| (r.opt_level, r.size))
            .collect::<Vec<_>>()
    };
    assert_eq!(sizes(&first), sizes(&second));
    for result in first.results() {
        assert_eq!(result.size, 28);
    }
    Ok(())
}

#[test]
fn test_report_covers_every_trial() -> anyhow::Result<()> {
    let bench = TestBench::new()?;
    let input = bench.input("bench.png", &[0u8; 1024])?;
    let program = bench.stub_optimizer(STUB_LEVEL_SIZED)?;
    let mut runner = BenchRunner::new(helper::config(&program, &input));
    runner.run()?;
    let report = report::render_report(runner.results());
    // Three lines per trial, six trials
    assert_eq!(report.lines().count(), 18);
    for opt_level in 1..=6u8 {
        assert!(report.contains(&format!("-o{}:\n Time: ", opt_level)));
        assert!(report.contains(&format!(" Size: {} bytes", opt_level)));
    }
    Ok(())
}
