//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `trends` - Trend details derivation and view models

pub mod foundation;
pub mod trends;
