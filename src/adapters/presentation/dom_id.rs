//! Slug-based DOM id generation.

use crate::domain::foundation::slugify;
use crate::ports::IdGenerator;

/// Generates DOM ids by slugifying the seed.
#[derive(Debug, Clone, Default)]
pub struct SlugIdGenerator;

impl SlugIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for SlugIdGenerator {
    fn generate(&self, seed: &str) -> String {
        slugify(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_seeds_are_unchanged() {
        let ids = SlugIdGenerator::new();
        assert_eq!(
            ids.generate("ohio-trend-chart-details-row-rate"),
            "ohio-trend-chart-details-row-rate"
        );
    }

    #[test]
    fn spaces_and_case_are_normalised() {
        let ids = SlugIdGenerator::new();
        assert_eq!(
            ids.generate("New York--trend chart details row"),
            "new-york-trend-chart-details-row"
        );
        assert_eq!(ids.generate("  (Agency) OH001  "), "agency-oh001");
    }

    #[test]
    fn generation_is_deterministic() {
        let ids = SlugIdGenerator::new();
        assert_eq!(ids.generate("Texas row"), ids.generate("Texas row"));
    }

    #[test]
    fn row_ids_follow_canonical_place_keys() {
        use crate::domain::foundation::PlaceKey;
        use crate::domain::trends::row_id_seed;

        let ids = SlugIdGenerator::new();
        let spellings = ["new-york", "New York", "new_york"];
        let rows: Vec<String> = spellings
            .iter()
            .map(|k| ids.generate(&row_id_seed(&PlaceKey::new(*k).unwrap())))
            .collect();
        assert!(rows.iter().all(|id| id == "new-york-trend-chart-details-row"));

        let york = ids.generate(&row_id_seed(&PlaceKey::new("york").unwrap()));
        let new_york_city = ids.generate(&row_id_seed(&PlaceKey::new("new-york-city").unwrap()));
        assert_ne!(york, rows[0]);
        assert_ne!(new_york_city, rows[0]);
    }
}
