//! Inclusive range of selectable years.

use serde::Serialize;

use super::ValidationError;

/// Inclusive `[since, until]` span of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    since: i32,
    until: i32,
}

impl YearRange {
    /// Creates a range, requiring `since <= until`.
    pub fn new(since: i32, until: i32) -> Result<Self, ValidationError> {
        if since > until {
            return Err(ValidationError::out_of_range("since", i32::MIN, until, since));
        }
        Ok(Self { since, until })
    }

    pub fn since(&self) -> i32 {
        self.since
    }

    pub fn until(&self) -> i32 {
        self.until
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.since..=self.until).contains(&year)
    }

    /// Every year in the range, ascending.
    pub fn years(&self) -> Vec<i32> {
        (self.since..=self.until).collect()
    }

    /// Validates that `year` lies in the range.
    pub fn check(&self, year: i32) -> Result<i32, ValidationError> {
        if self.contains(year) {
            Ok(year)
        } else {
            Err(ValidationError::out_of_range("year", self.since, self.until, year))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_are_inclusive_and_ascending() {
        let range = YearRange::new(2012, 2016).unwrap();
        assert_eq!(range.years(), vec![2012, 2013, 2014, 2015, 2016]);
    }

    #[test]
    fn single_year_range_is_allowed() {
        let range = YearRange::new(2016, 2016).unwrap();
        assert_eq!(range.years(), vec![2016]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(YearRange::new(2016, 2012).is_err());
    }

    #[test]
    fn check_rejects_years_outside_range() {
        let range = YearRange::new(2012, 2016).unwrap();
        assert_eq!(range.check(2014), Ok(2014));
        assert_eq!(
            range.check(2017),
            Err(ValidationError::out_of_range("year", 2012, 2016, 2017))
        );
    }
}
