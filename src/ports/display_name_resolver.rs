//! Display Name Resolver Port - Human names for place keys.

use crate::domain::foundation::PlaceKey;

/// Port resolving the name shown for a place in the details table.
pub trait DisplayNameResolver: Send + Sync {
    /// Display name of `place`, given the kind of place being viewed
    /// (`state`, `agency`, ...).
    fn display_name(&self, place: &PlaceKey, place_type: &str) -> String;
}
