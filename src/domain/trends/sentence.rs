//! Selection of the narrative sentence template.

use crate::domain::foundation::{CrimeCategory, PlaceKey};

use super::comparison::NationalComparison;
use super::record::TrendRecord;

/// Whether the widget narrates the nation or a single place against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonMode {
    National,
    Place,
}

/// The sentence template chosen for one render, carrying the raw values it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum SentenceKind {
    /// "In {year}, there were {rate} incidents of {crime} per 100,000 people."
    National { year: i32, rate: f64 },
    /// Legacy and revised rape definitions side by side.
    RapeDual {
        year: i32,
        legacy_rate: f64,
        revised_rate: f64,
    },
    /// Place rate plus its comparison with the national rate.
    Default {
        year: i32,
        rate: f64,
        comparison: NationalComparison,
    },
    /// A record required by the template is missing for the displayed year.
    NoData { place: PlaceKey, year: i32 },
}

/// Records a sentence is chosen from.
#[derive(Debug, Clone, Copy)]
pub struct SentenceInputs<'a> {
    pub mode: ComparisonMode,
    pub crime: &'a CrimeCategory,
    pub subject_key: &'a PlaceKey,
    pub subject: Option<&'a TrendRecord>,
    pub national: Option<&'a TrendRecord>,
    pub revised: Option<&'a TrendRecord>,
    /// Year currently displayed, named when the subject record is missing.
    pub displayed_year: i32,
}

impl SentenceKind {
    pub fn select(inputs: SentenceInputs<'_>, threshold: f64) -> Self {
        let Some(subject) = inputs.subject else {
            return SentenceKind::NoData {
                place: inputs.subject_key.clone(),
                year: inputs.displayed_year,
            };
        };

        if inputs.mode == ComparisonMode::National {
            return SentenceKind::National {
                year: subject.year,
                rate: subject.rate,
            };
        }

        // NaN and zero revised rates fall through to the default sentence.
        let revised_rate = inputs
            .revised
            .map(|r| r.rate)
            .filter(|rate| *rate != 0.0 && !rate.is_nan());
        if inputs.crime.is_rape() {
            if let Some(revised_rate) = revised_rate {
                return SentenceKind::RapeDual {
                    year: subject.year,
                    legacy_rate: subject.rate,
                    revised_rate,
                };
            }
        }

        match inputs.national {
            Some(national) => SentenceKind::Default {
                year: subject.year,
                rate: subject.rate,
                comparison: NationalComparison::between(subject.rate, national.rate, threshold),
            },
            None => SentenceKind::NoData {
                place: PlaceKey::national(),
                year: subject.year,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SentenceKind::National { .. } => "national",
            SentenceKind::RapeDual { .. } => "rape_dual",
            SentenceKind::Default { .. } => "default",
            SentenceKind::NoData { .. } => "no_data",
        }
    }
}
