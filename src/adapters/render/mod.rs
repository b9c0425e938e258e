//! Markup renderers for trend details.

mod maud_renderer;

pub use maud_renderer::MaudTrendDetailsRenderer;
