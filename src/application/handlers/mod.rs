//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod trends;

pub use trends::{
    PresentationSettings, RenderTrendDetailsHandler, RenderTrendDetailsQuery,
    RenderedTrendDetails, TrendDetailsPresenter,
};
