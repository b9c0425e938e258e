//! Grouped decimal formatting for rates and totals.

use crate::ports::NumberFormatter;

/// Shown for rates that are not finite numbers.
const NOT_AVAILABLE: &str = "N/A";

/// Formats rates to at most one decimal and totals with thousands separators.
///
/// `50.0` renders as `50`, `1234.56` as `1,234.6`, `11594163` as `11,594,163`.
#[derive(Debug, Clone, Default)]
pub struct GroupedNumberFormatter;

impl GroupedNumberFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl NumberFormatter for GroupedNumberFormatter {
    fn format_rate(&self, rate: f64) -> String {
        if !rate.is_finite() {
            return NOT_AVAILABLE.to_string();
        }

        // Round ties away from zero before formatting; `{:.1}` alone rounds
        // 12.25 to even.
        let tenths = (rate.abs() * 10.0).round() / 10.0;
        let fixed = format!("{:.1}", tenths);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
        let mut out = group_thousands(int_part);
        if frac_part != "0" {
            out.push('.');
            out.push_str(frac_part);
        }

        if rate < 0.0 && out != "0" {
            format!("-{}", out)
        } else {
            out
        }
    }

    fn format_count(&self, count: u64) -> String {
        group_thousands(&count.to_string())
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
