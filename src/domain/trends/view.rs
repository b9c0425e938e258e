//! Formatted view model of the trend details, ready for rendering.

use serde::Serialize;

use crate::domain::foundation::{CrimeCategory, PlaceKey};

use super::comparison::NationalComparison;

/// Id of the year selector.
pub const YEAR_SELECT_ID: &str = "year-selected";

/// Id wrapping the highlighted year in the default sentence.
pub const SELECTED_YEAR_TEXT_ID: &str = "selected-year-text";

/// Container id for a crime's details table.
pub fn container_id(crime: &CrimeCategory) -> String {
    format!("{}-trend-chart-details", crime)
}

/// Seed for the id of a table row, before id generation.
pub fn row_id_seed(place: &PlaceKey) -> String {
    format!("{}-trend-chart-details-row", place)
}

/// Seed for the id of a table cell, before id generation.
pub fn cell_id_seed(place: &PlaceKey, column: Column) -> String {
    format!("{}-{}", row_id_seed(place), column.as_str())
}

/// Data columns of the details table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Rate,
    Count,
    Population,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Rate => "rate",
            Column::Count => "count",
            Column::Population => "population",
        }
    }
}

/// A crime term linked to its glossary entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTerm {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SentenceView {
    #[serde(rename_all = "camelCase")]
    National {
        year: i32,
        rate: String,
        term: GlossaryTerm,
    },
    #[serde(rename_all = "camelCase")]
    RapeDual {
        year: i32,
        legacy_rate: String,
        revised_rate: String,
        legacy_term: GlossaryTerm,
        revised_term: GlossaryTerm,
    },
    #[serde(rename_all = "camelCase")]
    Default {
        year: i32,
        place_name: String,
        rate: String,
        term: GlossaryTerm,
        comparison: NationalComparison,
    },
    #[serde(rename_all = "camelCase")]
    NoData {
        place_name: String,
        year: i32,
        term: GlossaryTerm,
    },
}

impl SentenceView {
    pub fn kind(&self) -> &'static str {
        match self {
            SentenceView::National { .. } => "national",
            SentenceView::RapeDual { .. } => "rape_dual",
            SentenceView::Default { .. } => "default",
            SentenceView::NoData { .. } => "no_data",
        }
    }

    /// The sentence as plain text.
    pub fn text(&self) -> String {
        match self {
            SentenceView::National { year, rate, term } => format!(
                "In {}, there were {} incidents of {} per 100,000 people.",
                year, rate, term.label
            ),
            SentenceView::RapeDual {
                year,
                legacy_rate,
                revised_rate,
                legacy_term,
                revised_term,
            } => format!(
                "In {}, the rate at which rape was reported using the {} definition was {} per 100,000. \
                 Rape was reported using the {} definition at a rate of {} per 100,000 people.",
                year, legacy_term.label, legacy_rate, revised_term.label, revised_rate
            ),
            SentenceView::Default {
                year,
                place_name,
                rate,
                term,
                comparison,
            } => format!(
                "In {}, {}’s {} rate was {} incidents per 100,000 people. \
                 The rate for that year was {} that of the United States.",
                year,
                place_name,
                term.label,
                rate,
                comparison.phrase()
            ),
            SentenceView::NoData {
                place_name,
                year,
                term,
            } => format!(
                "No {} data is available for {} in {}.",
                term.label, place_name, year
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSelectView {
    pub id: String,
    pub label: String,
    pub options: Vec<i32>,
    pub selected: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRowView {
    pub place: PlaceKey,
    pub row_id: String,
    pub display_name: String,
    pub color: String,
    pub rate: CellView,
    pub count: CellView,
    pub population: CellView,
}

/// The complete trend details widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDetailsView {
    pub container_id: String,
    pub crime: CrimeCategory,
    pub sentence: SentenceView,
    pub year_select: YearSelectView,
    pub rows: Vec<TrendRowView>,
}
