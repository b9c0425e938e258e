//! Crime category value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Slug identifying an offense category, e.g. `violent-crime` or `rape-revised`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CrimeCategory(String);

impl CrimeCategory {
    /// Rape under the legacy UCR definition.
    pub const RAPE: &'static str = "rape";

    /// Rape under the revised UCR definition.
    pub const RAPE_REVISED: &'static str = "rape-revised";

    /// Creates a category from its slug.
    pub fn new(slug: impl Into<String>) -> Result<Self, ValidationError> {
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err(ValidationError::empty_field("crime"));
        }
        if slug.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format("crime", "contains whitespace"));
        }
        Ok(Self(slug))
    }

    pub fn rape() -> Self {
        Self(Self::RAPE.to_string())
    }

    pub fn rape_revised() -> Self {
        Self(Self::RAPE_REVISED.to_string())
    }

    pub fn is_rape(&self) -> bool {
        self.0 == Self::RAPE
    }

    pub fn is_rape_revised(&self) -> bool {
        self.0 == Self::RAPE_REVISED
    }

    pub fn slug(&self) -> &str {
        &self.0
    }

    /// Human label: words split on separators and case changes, lower-cased
    /// and joined by single spaces (`motor-vehicle-theft` -> `motor vehicle theft`).
    pub fn label(&self) -> String {
        let mut words: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut prev_lower = false;

        for c in self.0.chars() {
            if !c.is_alphanumeric() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                prev_lower = false;
                continue;
            }
            if c.is_uppercase() && prev_lower && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
            current.extend(c.to_lowercase());
        }
        if !current.is_empty() {
            words.push(current);
        }

        words.join(" ")
    }
}

impl TryFrom<String> for CrimeCategory {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CrimeCategory> for String {
    fn from(crime: CrimeCategory) -> Self {
        crime.0
    }
}

impl fmt::Display for CrimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
