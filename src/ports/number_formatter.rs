//! Number Formatter Port - Display formatting for rates and totals.

/// Port for turning statistics into display strings.
///
/// # Contract
///
/// Implementations must be deterministic: the same number always formats to
/// the same string, so generated markup is stable across renders.
pub trait NumberFormatter: Send + Sync {
    /// Formats a per-100,000 rate.
    fn format_rate(&self, rate: f64) -> String;

    /// Formats an integer total (incident count or population).
    fn format_count(&self, count: u64) -> String;
}
