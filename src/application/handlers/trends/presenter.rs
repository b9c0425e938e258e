//! TrendDetailsPresenter - turns widget inputs into a formatted view.
//!
//! Formatting, glossary lookup, naming and id generation are delegated to the
//! injected ports so the derivation stays testable in isolation.

use std::sync::Arc;

use crate::config::RenderConfig;
use crate::domain::foundation::{CrimeCategory, PlaceKey};
use crate::domain::trends::{
    cell_id_seed, container_id, row_id_seed, CellView, Column, ComparisonMode, GlossaryTerm,
    SentenceKind, SentenceView, TrendChartDetails, TrendDetailsAnalysis, TrendDetailsError,
    TrendDetailsView, TrendRecord, TrendRowView, YearSelectView, DEFAULT_COMPARISON_THRESHOLD,
    YEAR_SELECT_ID,
};
use crate::ports::{DisplayNameResolver, GlossaryLookup, IdGenerator, NumberFormatter};

const YEAR_SELECT_LABEL: &str = "Year selected";

/// Presentation settings applied to every render.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationSettings {
    pub comparison_threshold: f64,
    pub fallback_color: String,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            comparison_threshold: DEFAULT_COMPARISON_THRESHOLD,
            fallback_color: "#000".to_string(),
        }
    }
}

impl From<&RenderConfig> for PresentationSettings {
    fn from(config: &RenderConfig) -> Self {
        Self {
            comparison_threshold: config.comparison_threshold_pct,
            fallback_color: config.fallback_color.clone(),
        }
    }
}

/// Builds `TrendDetailsView`s from `TrendChartDetails`.
#[derive(Clone)]
pub struct TrendDetailsPresenter {
    formatter: Arc<dyn NumberFormatter>,
    glossary: Arc<dyn GlossaryLookup>,
    names: Arc<dyn DisplayNameResolver>,
    ids: Arc<dyn IdGenerator>,
    settings: PresentationSettings,
}

impl TrendDetailsPresenter {
    pub fn new(
        formatter: Arc<dyn NumberFormatter>,
        glossary: Arc<dyn GlossaryLookup>,
        names: Arc<dyn DisplayNameResolver>,
        ids: Arc<dyn IdGenerator>,
        settings: PresentationSettings,
    ) -> Self {
        Self {
            formatter,
            glossary,
            names,
            ids,
            settings,
        }
    }

    pub fn settings(&self) -> &PresentationSettings {
        &self.settings
    }

    pub fn present(&self, details: &TrendChartDetails) -> Result<TrendDetailsView, TrendDetailsError> {
        let analysis = details.analyze(self.settings.comparison_threshold)?;
        let sentence = self.sentence(details, &analysis);
        let rows = analysis
            .rows
            .iter()
            .enumerate()
            .map(|(index, record)| self.row(details, index, record))
            .collect();

        Ok(TrendDetailsView {
            container_id: container_id(&details.crime),
            crime: details.crime.clone(),
            sentence,
            year_select: YearSelectView {
                id: YEAR_SELECT_ID.to_string(),
                label: YEAR_SELECT_LABEL.to_string(),
                options: analysis.year_options,
                selected: analysis.selected_year,
            },
            rows,
        })
    }

    fn term(&self, crime: &CrimeCategory, label: impl Into<String>) -> GlossaryTerm {
        GlossaryTerm {
            id: self.glossary.term_id(crime),
            label: label.into(),
        }
    }

    fn sentence(&self, details: &TrendChartDetails, analysis: &TrendDetailsAnalysis) -> SentenceView {
        let crime_term = || self.term(&details.crime, details.crime.label());

        match &analysis.sentence {
            SentenceKind::National { year, rate } => SentenceView::National {
                year: *year,
                rate: self.formatter.format_rate(*rate),
                term: crime_term(),
            },
            SentenceKind::RapeDual {
                year,
                legacy_rate,
                revised_rate,
            } => SentenceView::RapeDual {
                year: *year,
                legacy_rate: self.formatter.format_rate(*legacy_rate),
                revised_rate: self.formatter.format_rate(*revised_rate),
                legacy_term: self.term(&CrimeCategory::rape(), "legacy"),
                revised_term: self.term(&CrimeCategory::rape_revised(), "revised"),
            },
            SentenceKind::Default {
                year,
                rate,
                comparison,
            } => SentenceView::Default {
                year: *year,
                place_name: details.place_name.clone(),
                rate: self.formatter.format_rate(*rate),
                term: crime_term(),
                comparison: *comparison,
            },
            SentenceKind::NoData { place, year } => SentenceView::NoData {
                place_name: self.place_name(details, analysis, place),
                year: *year,
                term: crime_term(),
            },
        }
    }

    fn place_name(
        &self,
        details: &TrendChartDetails,
        analysis: &TrendDetailsAnalysis,
        place: &PlaceKey,
    ) -> String {
        if analysis.mode == ComparisonMode::Place && place == &analysis.subject {
            details.place_name.clone()
        } else {
            self.names.display_name(place, &details.place_type)
        }
    }

    fn row(&self, details: &TrendChartDetails, index: usize, record: &TrendRecord) -> TrendRowView {
        let cell = |column: Column, text: String| CellView {
            id: self.ids.generate(&cell_id_seed(&record.place, column)),
            text,
        };

        TrendRowView {
            place: record.place.clone(),
            row_id: self.ids.generate(&row_id_seed(&record.place)),
            display_name: self.names.display_name(&record.place, &details.place_type),
            color: details
                .color_for(index)
                .unwrap_or(self.settings.fallback_color.as_str())
                .to_string(),
            rate: cell(Column::Rate, self.formatter.format_rate(record.rate)),
            count: cell(Column::Count, self.formatter.format_count(record.count)),
            population: cell(Column::Population, self.formatter.format_count(record.population)),
        }
    }
}

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;
