//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! crime trends domain.

mod crime;
mod errors;
mod place;
mod slug;
mod year_range;

pub use crime::CrimeCategory;
pub use errors::{ErrorCode, ValidationError};
pub use place::PlaceKey;
pub use slug::slugify;
pub use year_range::YearRange;
