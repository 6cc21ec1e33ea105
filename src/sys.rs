use sysinfo::{CpuExt, System, SystemExt};

/// Log the platform the benchmark runs on, as context for the timings.
/// Debug level only, and the system scan is skipped entirely when debug
/// logging is off.
pub(crate) fn log_platform_info() {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let mut sys = System::new_all();
    sys.refresh_all();
    const UNKNOWN: &str = "<unknown>";
    log::debug!(
        "platform: {} on {} (kernel {}), {}, {} cpus, {} GB memory",
        sys.host_name().unwrap_or(UNKNOWN.to_string()),
        sys.long_os_version().unwrap_or(UNKNOWN.to_string()),
        sys.kernel_version().unwrap_or(UNKNOWN.to_string()),
        sys.global_cpu_info().brand(),
        sys.cpus().len(),
        sys.total_memory() >> 30,
    );
}
