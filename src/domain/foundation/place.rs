//! Place identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::slug::slugify;
use super::ValidationError;

/// Identifier of a place whose statistics are reported (state, agency, or the
/// national aggregate). Always a lower-case slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceKey(String);

impl PlaceKey {
    /// Reserved key for nationwide statistics.
    pub const NATIONAL: &'static str = "national";

    /// Creates a place key in slug form, so `New York`, `new_york` and
    /// `new-york` name the same place.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("place"));
        }
        let slug = slugify(&value);
        if slug.is_empty() {
            return Err(ValidationError::invalid_format(
                "place",
                "must contain a letter or digit",
            ));
        }
        Ok(Self(slug))
    }

    /// The national aggregate key.
    pub fn national() -> Self {
        Self(Self::NATIONAL.to_string())
    }

    /// Whether this key is the national aggregate.
    pub fn is_national(&self) -> bool {
        self.0 == Self::NATIONAL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlaceKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlaceKey> for String {
    fn from(key: PlaceKey) -> Self {
        key.0
    }
}

impl fmt::Display for PlaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_key_is_recognised() {
        assert!(PlaceKey::national().is_national());
        assert!(PlaceKey::new("national").unwrap().is_national());
        assert!(!PlaceKey::new("ohio").unwrap().is_national());
    }

    #[test]
    fn blank_key_is_rejected() {
        assert_eq!(
            PlaceKey::new("  ").unwrap_err(),
            ValidationError::empty_field("place")
        );
    }

    #[test]
    fn spellings_of_one_place_are_equal() {
        let key = PlaceKey::new("new-york").unwrap();
        assert_eq!(PlaceKey::new("New York").unwrap(), key);
        assert_eq!(PlaceKey::new("new_york").unwrap(), key);
        assert_eq!(PlaceKey::new("National").unwrap(), PlaceKey::national());
    }

    #[test]
    fn key_without_letters_or_digits_is_rejected() {
        assert!(matches!(
            PlaceKey::new("--"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn deserialization_validates() {
        let key: PlaceKey = serde_json::from_str("\"new-york\"").unwrap();
        assert_eq!(key.as_str(), "new-york");
        let key: PlaceKey = serde_json::from_str("\"OH0010100\"").unwrap();
        assert_eq!(key.as_str(), "oh0010100");
        assert!(serde_json::from_str::<PlaceKey>("\"\"").is_err());
    }
}
