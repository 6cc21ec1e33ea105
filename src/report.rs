use crate::trial::TrialResult;

/// Render the report block for one trial: program and level on the first
/// line, elapsed seconds and output size on the two indented lines below.
pub fn format_trial(result: &TrialResult) -> String {
    format!(
        "{} -o{}:\n Time: {}s\n Size: {} bytes",
        result.program,
        result.opt_level,
        result.time.as_secs_f64(),
        result.size
    )
}

/// Render the whole report, one block per trial, in sequence order.
pub fn render_report(results: &[TrialResult]) -> String {
    let mut report = String::new();
    for result in results {
        report.push_str(&format_trial(result));
        report.push('\n');
    }
    report
}

/// Print the report for all completed trials to standard output.
pub fn print_report(results: &[TrialResult]) {
    print!("{}", render_report(results));
}

/// Describe an output size relative to the input size, e.g. `12.30% decrease`.
pub fn size_delta(input_size: u64, output_size: usize) -> String {
    let output_size = output_size as u64;
    if input_size >= output_size {
        format!(
            "{:.2}% decrease",
            (input_size - output_size) as f64 / input_size as f64 * 100f64
        )
    } else {
        format!(
            "{:.2}% increase",
            (output_size - input_size) as f64 / input_size as f64 * 100f64
        )
    }
}
