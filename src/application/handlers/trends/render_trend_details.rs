//! RenderTrendDetailsHandler - Query handler rendering the trend details widget.
//!
//! Acts as the owner of the displayed year: a requested year is routed through
//! the widget's year selector, and the dataset is sliced to the resulting year
//! before the view is built and rendered.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{CrimeCategory, PlaceKey, YearRange};
use crate::domain::trends::{
    TrendChartDetails, TrendDetailsError, TrendDetailsView, TrendRecord, YearChangeCallback,
};
use crate::ports::TrendDetailsRenderer;

use super::presenter::TrendDetailsPresenter;

/// Query to render trend details.
#[derive(Debug, Clone)]
pub struct RenderTrendDetailsQuery {
    /// Records for every year in the range.
    pub records: Vec<TrendRecord>,
    pub colors: Vec<String>,
    pub crime: CrimeCategory,
    pub keys: Vec<PlaceKey>,
    pub since: i32,
    pub until: i32,
    pub place_name: String,
    pub place_type: String,
    /// Raw value from the year selector. Defaults to `until`.
    pub year: Option<String>,
}

/// Result of successful trend details rendering.
#[derive(Debug, Clone)]
pub struct RenderedTrendDetails {
    /// The year displayed.
    pub year: i32,
    pub view: TrendDetailsView,
    pub html: String,
}

/// Handler for rendering trend details.
#[derive(Clone)]
pub struct RenderTrendDetailsHandler {
    presenter: TrendDetailsPresenter,
    renderer: Arc<dyn TrendDetailsRenderer>,
}

impl RenderTrendDetailsHandler {
    pub fn new(presenter: TrendDetailsPresenter, renderer: Arc<dyn TrendDetailsRenderer>) -> Self {
        Self {
            presenter,
            renderer,
        }
    }

    pub fn handle(
        &self,
        query: RenderTrendDetailsQuery,
    ) -> Result<RenderedTrendDetails, TrendDetailsError> {
        let years = YearRange::new(query.since, query.until).map_err(|_| {
            TrendDetailsError::InvalidYearRange {
                since: query.since,
                until: query.until,
            }
        })?;
        if query.keys.is_empty() {
            return Err(TrendDetailsError::NoPlaceSelected);
        }

        let current_year = Arc::new(AtomicI32::new(years.until()));
        let on_change_year: YearChangeCallback = {
            let current_year = Arc::clone(&current_year);
            Arc::new(move |year| current_year.store(year, Ordering::SeqCst))
        };

        let mut details = TrendChartDetails {
            active: Vec::new(),
            colors: query.colors,
            crime: query.crime,
            keys: query.keys,
            years,
            year: years.until(),
            on_change_year,
            place_name: query.place_name,
            place_type: query.place_type,
        };

        if let Some(raw) = query.year.as_deref() {
            details.change_year(raw)?;
        }
        let year = current_year.load(Ordering::SeqCst);
        details.year = year;

        details.active = query
            .records
            .into_iter()
            .filter(|r| r.year == year)
            .collect();

        let view = self.presenter.present(&details)?;
        let html = self.renderer.render(&view);

        if view.sentence.kind() == "no_data" {
            warn!(
                crime = %details.crime,
                year,
                records = details.active.len(),
                "No trend data for the selected place and year"
            );
        }
        debug!(
            crime = %details.crime,
            year,
            sentence = view.sentence.kind(),
            rows = view.rows.len(),
            "Rendered trend details"
        );

        Ok(RenderedTrendDetails { year, view, html })
    }
}
