//! Rendering configuration for the trend details widget

use serde::Deserialize;

use super::error::ValidationError;

/// Rendering knobs for trend details
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Percent difference below which a place is "about the same" as the nation
    #[serde(default = "default_comparison_threshold")]
    pub comparison_threshold_pct: f64,

    /// Swatch color for rows without a supplied color
    #[serde(default = "default_fallback_color")]
    pub fallback_color: String,
}

impl RenderConfig {
    /// Validate render configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.comparison_threshold_pct.is_finite()
            || self.comparison_threshold_pct < 0.0
            || self.comparison_threshold_pct > 100.0
        {
            return Err(ValidationError::InvalidComparisonThreshold);
        }
        let color = self.fallback_color.trim();
        if color.is_empty()
            || !color
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | ' ' | '%'))
        {
            return Err(ValidationError::InvalidFallbackColor);
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            comparison_threshold_pct: default_comparison_threshold(),
            fallback_color: default_fallback_color(),
        }
    }
}

fn default_comparison_threshold() -> f64 {
    3.0
}

fn default_fallback_color() -> String {
    "#000".to_string()
}
