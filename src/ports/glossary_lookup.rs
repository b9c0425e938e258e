//! Glossary Lookup Port - Maps crime categories to glossary entries.

use crate::domain::foundation::CrimeCategory;

/// Port resolving the glossary term id a crime label links to.
pub trait GlossaryLookup: Send + Sync {
    /// Glossary id for `crime`. Unknown categories resolve to their own slug.
    fn term_id(&self, crime: &CrimeCategory) -> String;
}
