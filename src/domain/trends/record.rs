//! Per place, per year crime statistics.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CrimeCategory, PlaceKey};

/// One `(place, crime, year)` observation, already aggregated upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    pub place: PlaceKey,
    pub crime: CrimeCategory,
    pub year: i32,
    /// Incidents per 100,000 people.
    pub rate: f64,
    pub count: u64,
    pub population: u64,
}

impl TrendRecord {
    pub fn new(
        place: PlaceKey,
        crime: CrimeCategory,
        year: i32,
        rate: f64,
        count: u64,
        population: u64,
    ) -> Self {
        Self {
            place,
            crime,
            year,
            rate,
            count,
            population,
        }
    }

    /// Whether this record counts rape under the revised definition.
    pub fn is_revised_rape(&self) -> bool {
        self.crime.is_rape_revised()
    }
}

/// First record reported for `place`.
pub fn find_place<'a>(records: &'a [TrendRecord], place: &PlaceKey) -> Option<&'a TrendRecord> {
    records.iter().find(|r| &r.place == place)
}
