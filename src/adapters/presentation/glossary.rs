//! Static UCR glossary mapping.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::foundation::CrimeCategory;
use crate::ports::GlossaryLookup;

/// Glossary ids for crime slugs whose entry is not named after the slug.
static TERMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("aggravated-assault", "aggravated assault"),
        ("arson", "arson"),
        ("burglary", "burglary"),
        ("homicide", "murder and nonnegligent homicide"),
        ("larceny", "larceny-theft"),
        ("motor-vehicle-theft", "motor vehicle theft"),
        ("property-crime", "property crime"),
        ("rape", "rape (legacy definition)"),
        ("rape-revised", "rape (revised definition)"),
        ("robbery", "robbery"),
        ("violent-crime", "violent crime"),
    ])
});

/// Glossary lookup backed by the UCR offense definitions.
#[derive(Debug, Clone, Default)]
pub struct UcrGlossary;

impl UcrGlossary {
    pub fn new() -> Self {
        Self
    }
}

impl GlossaryLookup for UcrGlossary {
    fn term_id(&self, crime: &CrimeCategory) -> String {
        TERMS
            .get(crime.slug())
            .map(|term| term.to_string())
            .unwrap_or_else(|| crime.slug().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_crimes_map_to_glossary_terms() {
        let glossary = UcrGlossary::new();
        assert_eq!(
            glossary.term_id(&CrimeCategory::rape()),
            "rape (legacy definition)"
        );
        assert_eq!(
            glossary.term_id(&CrimeCategory::rape_revised()),
            "rape (revised definition)"
        );
        assert_eq!(
            glossary.term_id(&CrimeCategory::new("homicide").unwrap()),
            "murder and nonnegligent homicide"
        );
    }

    #[test]
    fn unknown_crimes_map_to_their_slug() {
        let glossary = UcrGlossary::new();
        assert_eq!(
            glossary.term_id(&CrimeCategory::new("human-trafficking").unwrap()),
            "human-trafficking"
        );
    }
}
