//! Trend Details Renderer Port - Markup generation for the details widget.

use crate::domain::trends::TrendDetailsView;

/// Port for rendering a trend details view to markup.
///
/// # Contract
///
/// Implementations must keep the DOM ids carried by the view unchanged:
/// downstream tests and analytics select elements by them.
pub trait TrendDetailsRenderer: Send + Sync {
    fn render(&self, view: &TrendDetailsView) -> String;
}
