use crate::error::{BuildToolsError, Result};
use chrono::{Days, NaiveDate};
use std::fmt;

/// Returns the zero point for build-day offsets (2000-01-01).
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("2000-01-01 is a valid calendar date")
}

/// Number of days elapsed since the epoch
///
/// Offsets are expected to be non-negative but negative values are accepted and
/// render dates before the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildDay(pub i64);

impl BuildDay {
    /// Create a build day from a raw offset
    pub fn new(offset: i64) -> Self {
        BuildDay(offset)
    }

    /// Offset of a calendar date from the epoch
    pub fn from_date(date: NaiveDate) -> Self {
        BuildDay(date.signed_duration_since(epoch()).num_days())
    }

    /// Raw day count
    pub fn offset(&self) -> i64 {
        self.0
    }

    /// Calendar date `epoch + offset`
    ///
    /// # Returns
    /// * `Ok(NaiveDate)` - The corresponding date
    /// * `Err` - If the offset falls outside the representable calendar
    pub fn to_date(&self) -> Result<NaiveDate> {
        let epoch = epoch();
        let date = if self.0 >= 0 {
            epoch.checked_add_days(Days::new(self.0 as u64))
        } else {
            epoch.checked_sub_days(Days::new(self.0.unsigned_abs()))
        };

        date.ok_or_else(|| {
            BuildToolsError::date_range(format!("{} days from {} is not a valid date", self.0, epoch))
        })
    }
}

impl fmt::Display for BuildDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
