//! Trend details HTTP adapter module.
//!
//! Provides endpoints serving the rendered widget and its view model.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::TrendsAppState;
pub use routes::trends_routes;
