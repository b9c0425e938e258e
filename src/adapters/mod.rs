//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `presentation` - Number formatting, glossary, display names, DOM ids
//! - `render` - Maud HTML renderer
//! - `http` - Axum endpoints serving the rendered widget

pub mod http;
pub mod presentation;
pub mod render;

pub use http::{trends_routes, TrendsAppState};
pub use presentation::{GroupedNumberFormatter, SlugDisplayNames, SlugIdGenerator, UcrGlossary};
pub use render::MaudTrendDetailsRenderer;
