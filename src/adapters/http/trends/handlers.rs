//! HTTP handlers for trend details endpoints.
//!
//! These handlers connect Axum routes to the application layer handler.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::adapters::presentation::{
    GroupedNumberFormatter, SlugDisplayNames, SlugIdGenerator, UcrGlossary,
};
use crate::adapters::render::MaudTrendDetailsRenderer;
use crate::application::handlers::{
    PresentationSettings, RenderTrendDetailsHandler, TrendDetailsPresenter,
};
use crate::domain::trends::TrendDetailsError;

use super::dto::{ErrorResponse, TrendDetailsRequest, TrendDetailsView, YearParams};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Trend details API error that implements IntoResponse.
#[derive(Debug)]
pub struct TrendsApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl IntoResponse for TrendsApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<TrendDetailsError> for TrendsApiError {
    fn from(error: TrendDetailsError) -> Self {
        let status = match error {
            TrendDetailsError::NoPlaceSelected => StatusCode::UNPROCESSABLE_ENTITY,
            TrendDetailsError::InvalidYearRange { .. }
            | TrendDetailsError::InvalidYear(_)
            | TrendDetailsError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        tracing::warn!(code = %error.code(), "Trend details request rejected: {}", error);
        Self {
            status,
            body: ErrorResponse::new(error.code().to_string(), error.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing trend details dependencies.
#[derive(Clone)]
pub struct TrendsAppState {
    pub handler: RenderTrendDetailsHandler,
}

impl TrendsAppState {
    pub fn new(handler: RenderTrendDetailsHandler) -> Self {
        Self { handler }
    }

    /// State wired with the bundled presentation adapters and maud renderer.
    pub fn with_default_adapters(settings: PresentationSettings) -> Self {
        let presenter = TrendDetailsPresenter::new(
            Arc::new(GroupedNumberFormatter::new()),
            Arc::new(UcrGlossary::new()),
            Arc::new(SlugDisplayNames::new()),
            Arc::new(SlugIdGenerator::new()),
            settings,
        );
        let renderer = Arc::new(MaudTrendDetailsRenderer::new());
        Self::new(RenderTrendDetailsHandler::new(presenter, renderer))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/trends/details?year=2015
///
/// Returns the rendered trend details as an HTML fragment.
pub async fn render_trend_details(
    State(state): State<TrendsAppState>,
    Query(params): Query<YearParams>,
    Json(request): Json<TrendDetailsRequest>,
) -> Result<Html<String>, TrendsApiError> {
    let rendered = state.handler.handle(request.into_query(params.year))?;
    Ok(Html(rendered.html))
}

/// POST /api/trends/details/view?year=2015
///
/// Returns the trend details view model as JSON.
pub async fn get_trend_details_view(
    State(state): State<TrendsAppState>,
    Query(params): Query<YearParams>,
    Json(request): Json<TrendDetailsRequest>,
) -> Result<Json<TrendDetailsView>, TrendsApiError> {
    let rendered = state.handler.handle(request.into_query(params.year))?;
    Ok(Json(rendered.view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn no_place_selected_is_unprocessable() {
        let error = TrendsApiError::from(TrendDetailsError::NoPlaceSelected);
        assert_eq!(error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.body.code, "NO_PLACE_SELECTED");
    }

    #[test]
    fn invalid_year_is_bad_request() {
        let error = TrendsApiError::from(TrendDetailsError::InvalidYear("x".to_string()));
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.body.code, "INVALID_YEAR");

        let error = TrendsApiError::from(TrendDetailsError::from(ValidationError::out_of_range(
            "year", 2010, 2016, 2019,
        )));
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.body.code, "OUT_OF_RANGE");
    }
}
