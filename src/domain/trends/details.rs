//! TrendChartDetails - the narrative and table shown beneath a trend chart.
//!
//! The component is controlled: the displayed year arrives as `year` and is
//! never changed here. `active` holds the records of that year, and a change on
//! the year selector is reported through `on_change_year` to whoever owns it.

use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::{CrimeCategory, PlaceKey, YearRange};

use super::errors::TrendDetailsError;
use super::record::{find_place, TrendRecord};
use super::sentence::{ComparisonMode, SentenceInputs, SentenceKind};

/// Receives the year picked on the selector.
pub type YearChangeCallback = Arc<dyn Fn(i32) + Send + Sync>;

/// Inputs for one render of the trend details.
#[derive(Clone)]
pub struct TrendChartDetails {
    /// Records for the displayed year, one per place and crime.
    pub active: Vec<TrendRecord>,
    /// Swatch colors, matched to table rows by position.
    pub colors: Vec<String>,
    pub crime: CrimeCategory,
    /// Places selected for comparison. A single key means national mode.
    pub keys: Vec<PlaceKey>,
    pub years: YearRange,
    /// Year currently displayed, owned by the caller.
    pub year: i32,
    pub on_change_year: YearChangeCallback,
    /// Display name of the subject place, used in the default sentence.
    pub place_name: String,
    /// Kind of place (`state`, `agency`, ...), forwarded to name resolution.
    pub place_type: String,
}

/// Everything derived from the inputs before formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendDetailsAnalysis {
    pub mode: ComparisonMode,
    pub subject: PlaceKey,
    pub sentence: SentenceKind,
    /// Year bound to the selector: the subject's year when it has a record,
    /// the displayed year otherwise.
    pub selected_year: i32,
    pub year_options: Vec<i32>,
    /// Table rows in input order, revised rape records excluded.
    pub rows: Vec<TrendRecord>,
}

impl TrendChartDetails {
    /// Resolves the comparison mode and subject place from `keys`.
    pub fn subject(&self) -> Result<(ComparisonMode, PlaceKey), TrendDetailsError> {
        if self.keys.len() == 1 {
            return Ok((ComparisonMode::National, PlaceKey::national()));
        }
        self.keys
            .iter()
            .find(|k| !k.is_national())
            .map(|k| (ComparisonMode::Place, k.clone()))
            .ok_or(TrendDetailsError::NoPlaceSelected)
    }

    /// Active records minus revised rape records.
    pub fn working_records(&self) -> Vec<TrendRecord> {
        self.active
            .iter()
            .filter(|r| !r.is_revised_rape())
            .cloned()
            .collect()
    }

    pub fn year_options(&self) -> Vec<i32> {
        self.years.years()
    }

    /// Swatch color for a table row, if one was supplied.
    pub fn color_for(&self, row: usize) -> Option<&str> {
        self.colors.get(row).map(String::as_str)
    }

    /// Derives the sentence, selector state and rows for this render.
    pub fn analyze(&self, threshold: f64) -> Result<TrendDetailsAnalysis, TrendDetailsError> {
        let (mode, subject_key) = self.subject()?;
        let rows = self.working_records();

        let subject = find_place(&rows, &subject_key);
        let national = find_place(&rows, &PlaceKey::national());
        let revised = self
            .active
            .iter()
            .find(|r| r.is_revised_rape() && r.place == subject_key);

        let sentence = SentenceKind::select(
            SentenceInputs {
                mode,
                crime: &self.crime,
                subject_key: &subject_key,
                subject,
                national,
                revised,
                displayed_year: self.year,
            },
            threshold,
        );
        let selected_year = subject.map_or(self.year, |r| r.year);

        Ok(TrendDetailsAnalysis {
            mode,
            subject: subject_key,
            sentence,
            selected_year,
            year_options: self.year_options(),
            rows,
        })
    }

    /// Handles a value emitted by the year selector.
    ///
    /// The value is parsed as a number, checked against the selectable range
    /// and passed to `on_change_year`.
    pub fn change_year(&self, raw: &str) -> Result<i32, TrendDetailsError> {
        let year = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| TrendDetailsError::InvalidYear(raw.to_string()))?;
        let year = self.years.check(year)?;
        (self.on_change_year)(year);
        Ok(year)
    }
}

impl fmt::Debug for TrendChartDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrendChartDetails")
            .field("active", &self.active)
            .field("colors", &self.colors)
            .field("crime", &self.crime)
            .field("keys", &self.keys)
            .field("years", &self.years)
            .field("year", &self.year)
            .field("place_name", &self.place_name)
            .field("place_type", &self.place_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;
