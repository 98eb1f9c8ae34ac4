use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar month carrying its English display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn from_name(name: &str) -> Option<Month> {
        Month::ALL.iter().copied().find(|m| m.name() == name)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One budgeted month. The rendered key (`"2024_March"`) doubles as the
/// document id for both the income and the expense document of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: Month,
}

impl Period {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The `"{year}_{month_name}"` key used as document id and period field.
    pub fn key(&self) -> String {
        format!("{}_{}", self.year, self.month.name())
    }

    /// Years offered by the entry form: the current and the previous one.
    pub fn selectable_years(today: NaiveDate) -> [i32; 2] {
        [today.year(), today.year() - 1]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month) = value
            .split_once('_')
            .ok_or_else(|| PeriodParseError(value.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError(value.to_string()))?;
        let month = Month::from_name(month).ok_or_else(|| PeriodParseError(value.to_string()))?;
        Ok(Period { year, month })
    }
}

/// Raised when a stored period key does not match `"{year}_{month_name}"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid period key `{0}`")]
pub struct PeriodParseError(pub String);
