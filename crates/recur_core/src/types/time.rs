//! Calendar date type and month-length arithmetic.
//!
//! This module provides:
//! - `Date`: Immutable date wrapper around chrono::NaiveDate
//! - Month-length helpers (`days_in_month`, `is_leap_year`)
//! - Clamped month stepping that never carries into the following month
//!
//! # Examples
//!
//! ```
//! use recur_core::types::time::Date;
//!
//! let start = Date::from_ymd(2025, 1, 31).unwrap();
//!
//! // Month arithmetic clamps to the real length of the target month
//! let next = start.add_months_clamped(1).unwrap();
//! assert_eq!(next.to_string(), "2025-02-28");
//! ```

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2025));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month (1-12).
///
/// # Panics
/// Panics if `month` is outside 1-12.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2025, 2), 28);
/// assert_eq!(days_in_month(2025, 4), 30);
/// assert_eq!(days_in_month(2025, 12), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("month must be in 1..=12, got {}", month),
    }
}

/// Maps a Sunday-based weekday index (0 = Sunday ... 6 = Saturday) to a
/// chrono [`Weekday`].
///
/// Returns `None` for indices above 6.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::weekday_from_index;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_from_index(0), Some(Weekday::Sun));
/// assert_eq!(weekday_from_index(5), Some(Weekday::Fri));
/// assert_eq!(weekday_from_index(7), None);
/// ```
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Immutable calendar date (year, month, day) with no time or zone.
///
/// Every arithmetic operation returns a new value; a date is never
/// modified in place. Month stepping computes the target year and month
/// first and only then fixes the day, so the result never carries into
/// the month after the target.
///
/// # Examples
///
/// ```
/// use recur_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2025, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the Sunday-based weekday index (0 = Sunday ... 6 = Saturday).
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// // 2024-01-15 is a Monday
    /// assert_eq!(Date::from_ymd(2024, 1, 15).unwrap().day_of_week(), 1);
    /// // 2024-01-14 is a Sunday
    /// assert_eq!(Date::from_ymd(2024, 1, 14).unwrap().day_of_week(), 0);
    /// ```
    pub fn day_of_week(&self) -> u8 {
        // Always 0..=6
        self.0.weekday().num_days_from_sunday() as u8
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the last day of this date's month.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 10).unwrap();
    /// assert_eq!(date.last_day_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn last_day_of_month(&self) -> Date {
        self.with_day_clamped(self.days_in_month())
    }

    /// Returns the date in the same month with its day pinned to
    /// `min(day, last day of month)`.
    ///
    /// A `day` of zero is treated as the first of the month.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2025, 4, 3).unwrap();
    /// assert_eq!(date.with_day_clamped(31), Date::from_ymd(2025, 4, 30).unwrap());
    /// assert_eq!(date.with_day_clamped(12), Date::from_ymd(2025, 4, 12).unwrap());
    /// ```
    pub fn with_day_clamped(&self, day: u32) -> Date {
        let day = day.clamp(1, self.days_in_month());
        self.0.with_day(day).map_or(*self, Date)
    }

    /// Adds a number of days.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(date.add_days(2).unwrap(), Date::from_ymd(2024, 3, 1).unwrap());
    /// ```
    pub fn add_days(&self, days: u64) -> Result<Date, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Date)
            .ok_or_else(|| DateError::Overflow {
                reason: format!("adding {} days to {}", days, self),
            })
    }

    /// Adds calendar months, clamping the day to the target month's length.
    ///
    /// The target year and month are computed first; the day becomes
    /// `min(self.day(), last day of target month)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let jan_31 = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(jan_31.add_months_clamped(1).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(jan_31.add_months_clamped(3).unwrap(), Date::from_ymd(2024, 4, 30).unwrap());
    /// assert_eq!(jan_31.add_months_clamped(12).unwrap(), Date::from_ymd(2025, 1, 31).unwrap());
    /// ```
    pub fn add_months_clamped(&self, months: u32) -> Result<Date, DateError> {
        let (year, month) = self.target_month(months)?;
        Date::checked_clamped(year, month, self.day())
    }

    /// Adds calendar years keeping month and day.
    ///
    /// February 29th landing in a non-leap year rolls forward to March 1st:
    /// the surplus day carries into the next month.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let leap_day = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap_day.add_years_rolling(1).unwrap(), Date::from_ymd(2025, 3, 1).unwrap());
    /// assert_eq!(leap_day.add_years_rolling(4).unwrap(), Date::from_ymd(2028, 2, 29).unwrap());
    /// ```
    pub fn add_years_rolling(&self, years: u32) -> Result<Date, DateError> {
        let year = self.target_year(years)?;
        if self.month() == 2 && self.day() == 29 && !is_leap_year(year) {
            return Date::from_ymd(year, 3, 1).map_err(|_| self.overflow_years(years));
        }
        Date::from_ymd(year, self.month(), self.day()).map_err(|_| self.overflow_years(years))
    }

    /// Adds calendar years keeping month, clamping February 29th to the 28th
    /// in a non-leap target year.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    ///
    /// let leap_day = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap_day.add_years_clamped(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
    /// ```
    pub fn add_years_clamped(&self, years: u32) -> Result<Date, DateError> {
        let year = self.target_year(years)?;
        Date::checked_clamped(year, self.month(), self.day())
    }

    /// Returns the first date on or after `self` falling on `weekday`.
    ///
    /// Moves forward between zero and six days; a date already on
    /// `weekday` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_core::types::time::Date;
    /// use chrono::Weekday;
    ///
    /// let monday = Date::from_ymd(2024, 1, 15).unwrap();
    /// assert_eq!(monday.next_on_or_after(Weekday::Fri).unwrap(), Date::from_ymd(2024, 1, 19).unwrap());
    /// assert_eq!(monday.next_on_or_after(Weekday::Mon).unwrap(), monday);
    /// ```
    pub fn next_on_or_after(&self, weekday: Weekday) -> Result<Date, DateError> {
        let current = self.weekday().num_days_from_sunday();
        let target = weekday.num_days_from_sunday();
        let offset = (target + 7 - current) % 7;
        self.add_days(u64::from(offset))
    }

    fn target_month(&self, months: u32) -> Result<(i32, u32), DateError> {
        let zero_based = i64::from(self.year()) * 12 + i64::from(self.month() - 1) + i64::from(months);
        let year = i32::try_from(zero_based.div_euclid(12)).map_err(|_| DateError::Overflow {
            reason: format!("adding {} months to {}", months, self),
        })?;
        // rem_euclid(12) is always 0..=11
        let month = zero_based.rem_euclid(12) as u32 + 1;
        Ok((year, month))
    }

    fn target_year(&self, years: u32) -> Result<i32, DateError> {
        i32::try_from(years)
            .ok()
            .and_then(|years| self.year().checked_add(years))
            .ok_or_else(|| self.overflow_years(years))
    }

    fn overflow_years(&self, years: u32) -> DateError {
        DateError::Overflow {
            reason: format!("adding {} years to {}", years, self),
        }
    }

    fn checked_clamped(year: i32, month: u32, day: u32) -> Result<Date, DateError> {
        let last = days_in_month(year, month);
        let day = day.clamp(1, last);
        Date::from_ymd(year, month, day).map_err(|_| DateError::Overflow {
            reason: format!("{}-{:02}-{:02} is outside the supported range", year, month, day),
        })
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
