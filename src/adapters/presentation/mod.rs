//! Presentation adapters - default implementations of the formatting,
//! glossary, naming and id ports.

mod display_name;
mod dom_id;
mod glossary;
mod number_format;

pub use display_name::{SlugDisplayNames, NATIONAL_DISPLAY_NAME};
pub use dom_id::SlugIdGenerator;
pub use glossary::UcrGlossary;
pub use number_format::GroupedNumberFormatter;
