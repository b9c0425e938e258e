//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Presentation Ports
//!
//! - `NumberFormatter` - Rate and total formatting
//! - `GlossaryLookup` - Crime category to glossary term
//! - `DisplayNameResolver` - Place key to display name
//! - `IdGenerator` - DOM id generation
//! - `TrendDetailsRenderer` - View model to markup

mod display_name_resolver;
mod glossary_lookup;
mod id_generator;
mod number_formatter;
mod trend_details_renderer;

pub use display_name_resolver::DisplayNameResolver;
pub use glossary_lookup::GlossaryLookup;
pub use id_generator::IdGenerator;
pub use number_formatter::NumberFormatter;
pub use trend_details_renderer::TrendDetailsRenderer;
