//! Place display names derived from place keys.

use crate::domain::foundation::PlaceKey;
use crate::ports::DisplayNameResolver;

/// Name shown for the national aggregate.
pub const NATIONAL_DISPLAY_NAME: &str = "United States";

/// Place type whose keys are ORI codes.
const AGENCY: &str = "agency";

/// Resolves names from the key itself: agency ORIs are upper-cased, other
/// slugs are title-cased (`new-york` -> `New York`).
#[derive(Debug, Clone, Default)]
pub struct SlugDisplayNames;

impl SlugDisplayNames {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayNameResolver for SlugDisplayNames {
    fn display_name(&self, place: &PlaceKey, place_type: &str) -> String {
        if place.is_national() {
            return NATIONAL_DISPLAY_NAME.to_string();
        }
        if place_type.eq_ignore_ascii_case(AGENCY) {
            return place.as_str().to_uppercase();
        }

        place
            .as_str()
            .split('-')
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
