//! Crime rate trend details: narrative sentence, comparison and table rows.
//!
//! # Module Organization
//!
//! - `record` - Per place, per year statistics
//! - `comparison` - Place versus national rate classification
//! - `sentence` - Sentence template selection
//! - `details` - The controlled widget inputs and their analysis
//! - `view` - Formatted view model handed to renderers

mod comparison;
mod details;
mod errors;
mod record;
mod sentence;
mod view;

pub use comparison::{percent_difference, NationalComparison, DEFAULT_COMPARISON_THRESHOLD};
pub use details::{TrendChartDetails, TrendDetailsAnalysis, YearChangeCallback};
pub use errors::TrendDetailsError;
pub use record::{find_place, TrendRecord};
pub use sentence::{ComparisonMode, SentenceInputs, SentenceKind};
pub use view::{
    cell_id_seed, container_id, row_id_seed, CellView, Column, GlossaryTerm, SentenceView,
    TrendDetailsView, TrendRowView, YearSelectView, SELECTED_YEAR_TEXT_ID, YEAR_SELECT_ID,
};
