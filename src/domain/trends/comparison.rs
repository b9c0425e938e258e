//! Place versus national rate comparison.

use serde::Serialize;

/// Percent band inside which a place counts as "about the same" as the nation.
pub const DEFAULT_COMPARISON_THRESHOLD: f64 = 3.0;

/// How a place's rate relates to the national rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NationalComparison {
    AboutTheSame { threshold: f64 },
    Higher,
    Lower,
}

impl NationalComparison {
    /// Classifies `place_rate` against `national_rate`.
    ///
    /// A zero national rate yields an infinite or NaN difference; infinity
    /// classifies as higher and NaN as lower.
    pub fn between(place_rate: f64, national_rate: f64, threshold: f64) -> Self {
        let diff = percent_difference(place_rate, national_rate);
        if diff.abs() < threshold {
            NationalComparison::AboutTheSame { threshold }
        } else if diff > 0.0 {
            NationalComparison::Higher
        } else {
            NationalComparison::Lower
        }
    }

    /// The emphasized word, if any.
    pub fn direction(&self) -> Option<&'static str> {
        match self {
            NationalComparison::AboutTheSame { .. } => None,
            NationalComparison::Higher => Some("higher"),
            NationalComparison::Lower => Some("lower"),
        }
    }

    /// Plain-text phrase completing "The rate for that year was ... that of".
    pub fn phrase(&self) -> String {
        match self {
            NationalComparison::AboutTheSame { threshold } => {
                format!("about the same (within {}%) as", threshold)
            }
            NationalComparison::Higher => "higher than".to_string(),
            NationalComparison::Lower => "lower than".to_string(),
        }
    }
}

/// `(place / national - 1) * 100`.
pub fn percent_difference(place_rate: f64, national_rate: f64) -> f64 {
    (place_rate / national_rate - 1.0) * 100.0
}

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;
