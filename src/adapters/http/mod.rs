//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod trends;

// Re-export key types for convenience
pub use trends::trends_routes;
pub use trends::TrendsAppState;
