//! Resident-memory probe used to report peak memory around a search.
//!
//! Reads `/proc/self/status`; on platforms without procfs every reading is
//! `None` and the reported delta is zero.

use std::fs;

const STATUS_PATH: &str = "/proc/self/status";

/// Records resident memory at construction and reports the peak growth since.
#[derive(Debug, Clone, Copy)]
pub struct MemoryProbe {
    baseline: Option<u64>,
}

impl MemoryProbe {
    pub fn start() -> Self {
        Self {
            baseline: read_status_field("VmRSS:"),
        }
    }

    /// Peak resident bytes above the baseline, zero when unavailable.
    pub fn peak_delta_bytes(&self) -> u64 {
        match (self.baseline, read_status_field("VmHWM:")) {
            (Some(baseline), Some(peak)) => peak.saturating_sub(baseline),
            _ => 0,
        }
    }
}

fn read_status_field(field: &str) -> Option<u64> {
    let status = fs::read_to_string(STATUS_PATH).ok()?;
    parse_status_field(&status, field)
}

/// Parse a `Field:   1234 kB` line into bytes.
fn parse_status_field(status: &str, field: &str) -> Option<u64> {
    let value = status.lines().find_map(|line| line.strip_prefix(field))?;
    let kib = value.trim().strip_suffix("kB")?.trim().parse::<u64>().ok()?;
    Some(kib * 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Name:\tslider-solver\nVmHWM:\t    5120 kB\nVmRSS:\t    4096 kB\n";

    #[test]
    fn test_parse_status_fields() {
        assert_eq!(parse_status_field(SAMPLE, "VmHWM:"), Some(5120 * 1024));
        assert_eq!(parse_status_field(SAMPLE, "VmRSS:"), Some(4096 * 1024));
        assert_eq!(parse_status_field(SAMPLE, "VmSwap:"), None);
        assert_eq!(parse_status_field("VmHWM:\tlots", "VmHWM:"), None);
    }
}
