//! Recurrence frequency enumeration.

use std::fmt;
use std::str::FromStr;

use super::error::RecurrenceError;

/// Recurrence family determining the base step of a rule.
///
/// The base step is multiplied by the rule's interval: `Daily` with an
/// interval of 3 recurs every three days, `Quarterly` with an interval
/// of 2 every six months.
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::Frequency;
///
/// let freq = Frequency::Quarterly;
/// assert_eq!(freq.months_per_step(), 3);
/// assert_eq!(freq.days_per_step(), 0);
/// assert_eq!(freq.code(), "QUARTERLY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every two weeks.
    Biweekly,
    /// Every calendar month.
    Monthly,
    /// Every three calendar months.
    Quarterly,
    /// Every calendar year.
    Yearly,
}

impl Frequency {
    /// All frequencies, in ascending step size.
    pub const ALL: [Frequency; 6] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Yearly,
    ];

    /// Returns the number of days in one base step.
    ///
    /// Returns 0 for calendar-month based frequencies (use `months_per_step` instead).
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_models::recurrence::Frequency;
    ///
    /// assert_eq!(Frequency::Daily.days_per_step(), 1);
    /// assert_eq!(Frequency::Weekly.days_per_step(), 7);
    /// assert_eq!(Frequency::Biweekly.days_per_step(), 14);
    /// assert_eq!(Frequency::Monthly.days_per_step(), 0);
    /// ```
    #[inline]
    pub fn days_per_step(&self) -> u32 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Biweekly => 14,
            Frequency::Monthly | Frequency::Quarterly | Frequency::Yearly => 0,
        }
    }

    /// Returns the number of calendar months in one base step.
    ///
    /// Returns 0 for day based frequencies.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_models::recurrence::Frequency;
    ///
    /// assert_eq!(Frequency::Monthly.months_per_step(), 1);
    /// assert_eq!(Frequency::Quarterly.months_per_step(), 3);
    /// assert_eq!(Frequency::Yearly.months_per_step(), 12);
    /// assert_eq!(Frequency::Weekly.months_per_step(), 0);
    /// ```
    #[inline]
    pub fn months_per_step(&self) -> u32 {
        match self {
            Frequency::Daily | Frequency::Weekly | Frequency::Biweekly => 0,
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
            Frequency::Yearly => 12,
        }
    }

    /// Returns whether a day-of-week anchor applies to this frequency.
    #[inline]
    pub fn uses_day_of_week(&self) -> bool {
        matches!(self, Frequency::Weekly | Frequency::Biweekly)
    }

    /// Returns whether a day-of-month anchor applies to this frequency.
    #[inline]
    pub fn uses_day_of_month(&self) -> bool {
        matches!(
            self,
            Frequency::Monthly | Frequency::Quarterly | Frequency::Yearly
        )
    }

    /// Returns the upper-case code used in persisted rules.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Biweekly => "BIWEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Quarterly => "QUARTERLY",
            Frequency::Yearly => "YEARLY",
        }
    }

    /// Returns the display name for this frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_models::recurrence::Frequency;
    ///
    /// assert_eq!(Frequency::Biweekly.name(), "Biweekly");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Biweekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = RecurrenceError;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported formats:
    /// - Daily: "daily", "1d"
    /// - Weekly: "weekly", "1w"
    /// - Biweekly: "biweekly", "bi-weekly", "fortnightly", "2w"
    /// - Monthly: "monthly", "1m"
    /// - Quarterly: "quarterly", "3m"
    /// - Yearly: "yearly", "annual", "annually", "1y", "12m"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "daily" | "1d" => Ok(Frequency::Daily),
            "weekly" | "1w" => Ok(Frequency::Weekly),
            "biweekly" | "fortnightly" | "2w" => Ok(Frequency::Biweekly),
            "monthly" | "1m" => Ok(Frequency::Monthly),
            "quarterly" | "3m" => Ok(Frequency::Quarterly),
            "yearly" | "annual" | "annually" | "1y" | "12m" => Ok(Frequency::Yearly),
            _ => Err(RecurrenceError::UnknownFrequency(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Frequency;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Frequency {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.code())
        }
    }

    impl<'de> Deserialize<'de> for Frequency {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Frequency::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_units_are_exclusive() {
        for freq in Frequency::ALL {
            let day_based = freq.days_per_step() > 0;
            let month_based = freq.months_per_step() > 0;
            assert!(day_based ^ month_based, "{} must have one step unit", freq);
        }
    }

    #[test]
    fn test_anchor_families_are_disjoint() {
        for freq in Frequency::ALL {
            assert!(!(freq.uses_day_of_week() && freq.uses_day_of_month()));
        }
        assert!(Frequency::Biweekly.uses_day_of_week());
        assert!(Frequency::Yearly.uses_day_of_month());
        assert!(!Frequency::Daily.uses_day_of_week());
        assert!(!Frequency::Daily.uses_day_of_month());
    }

    #[test]
    fn test_code_and_name() {
        assert_eq!(Frequency::Daily.code(), "DAILY");
        assert_eq!(Frequency::Biweekly.code(), "BIWEEKLY");
        assert_eq!(Frequency::Yearly.name(), "Yearly");
        assert_eq!(format!("{}", Frequency::Quarterly), "Quarterly");
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("DAILY".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("Bi-Weekly".parse::<Frequency>().unwrap(), Frequency::Biweekly);
        assert_eq!(
            "fortnightly".parse::<Frequency>().unwrap(),
            Frequency::Biweekly
        );
        assert_eq!("1m".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("3M".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("annual".parse::<Frequency>().unwrap(), Frequency::Yearly);
    }

    #[test]
    fn test_from_str_round_trips_code() {
        for freq in Frequency::ALL {
            assert_eq!(freq.code().parse::<Frequency>().unwrap(), freq);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "hourly".parse::<Frequency>(),
            Err(RecurrenceError::UnknownFrequency("hourly".to_string()))
        );
        assert!("".parse::<Frequency>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Frequency::Quarterly).unwrap();
        assert_eq!(json, "\"QUARTERLY\"");
        let back: Frequency = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(back, Frequency::Monthly);
        assert!(serde_json::from_str::<Frequency>("\"hourly\"").is_err());
    }
}
