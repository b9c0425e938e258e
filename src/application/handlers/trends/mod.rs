//! Trend details handlers.
//!
//! Read-only handlers that turn trend statistics into the rendered widget.

mod presenter;
mod render_trend_details;

pub use presenter::{PresentationSettings, TrendDetailsPresenter};
pub use render_trend_details::{
    RenderTrendDetailsHandler, RenderTrendDetailsQuery, RenderedTrendDetails,
};
