//! HTTP DTOs for trend details endpoints.
//!
//! The domain view model is already designed for serialization, so it is
//! re-exported directly as the JSON response.

pub use crate::domain::trends::{
    CellView, GlossaryTerm, SentenceView, TrendDetailsView, TrendRowView, YearSelectView,
};

use serde::{Deserialize, Serialize};

use crate::application::handlers::RenderTrendDetailsQuery;
use crate::domain::foundation::{CrimeCategory, PlaceKey};
use crate::domain::trends::TrendRecord;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of a trend details request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDetailsRequest {
    /// Records for every year between `since` and `until`.
    pub records: Vec<TrendRecord>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub crime: CrimeCategory,
    pub keys: Vec<PlaceKey>,
    pub since: i32,
    pub until: i32,
    pub place_name: String,
    #[serde(default = "default_place_type")]
    pub place_type: String,
}

fn default_place_type() -> String {
    "state".to_string()
}

impl TrendDetailsRequest {
    pub fn into_query(self, year: Option<String>) -> RenderTrendDetailsQuery {
        RenderTrendDetailsQuery {
            records: self.records,
            colors: self.colors,
            crime: self.crime,
            keys: self.keys,
            since: self.since,
            until: self.until,
            place_name: self.place_name,
            place_type: self.place_type,
            year,
        }
    }
}

/// Query parameters shared by trend details endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct YearParams {
    /// Year picked on the selector, as submitted.
    pub year: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_camel_case_with_defaults() {
        let json = r#"{
            "records": [
                {"place": "ohio", "crime": "robbery", "year": 2016, "rate": 187.8, "count": 21805, "population": 11613423}
            ],
            "crime": "robbery",
            "keys": ["ohio", "national"],
            "since": 2010,
            "until": 2016,
            "placeName": "Ohio"
        }"#;

        let request: TrendDetailsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.place_type, "state");
        assert!(request.colors.is_empty());

        let query = request.into_query(Some("2014".to_string()));
        assert_eq!(query.keys.len(), 2);
        assert_eq!(query.year.as_deref(), Some("2014"));
    }

    #[test]
    fn request_rejects_blank_place_keys() {
        let json = r#"{
            "records": [],
            "crime": "robbery",
            "keys": [""],
            "since": 2010,
            "until": 2016,
            "placeName": "Ohio"
        }"#;

        assert!(serde_json::from_str::<TrendDetailsRequest>(json).is_err());
    }
}
