/// Core type definitions for the work calendar
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{CalendarError, Result};

/// Canonical textual form of a calendar date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// A year/month/day triple with no time-of-day or timezone.
///
/// Years are limited to `1..=9999` so the canonical `YYYY-MM-DD` form is
/// always ten characters and chronological order matches string order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            CalendarError::InvalidDate(format!(
                "{:04}-{:02}-{:02} is not a calendar date",
                year, month, day
            ))
        })?;
        Self::from_naive(date)
    }

    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date.year()) {
            return Err(CalendarError::InvalidDate(format!(
                "year {} outside {}..={}",
                date.year(),
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        Ok(CalendarDate(date))
    }

    /// Parse the strict `YYYY-MM-DD` form
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });

        if !well_formed {
            return Err(CalendarError::InvalidDate(format!(
                "'{}' is not in YYYY-MM-DD form",
                s
            )));
        }

        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|e| CalendarError::InvalidDate(format!("'{}': {}", s, e)))?;

        Self::from_naive(date)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Saturday or Sunday
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Next calendar day, `None` past the supported range
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().and_then(|d| Self::from_naive(d).ok())
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(&self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            first: CalendarDate(self.0.with_day(1).unwrap_or(self.0)),
        }
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// Inclusive date window. `start > end` is allowed and covers no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        DateRange { start, end }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Inclusive day count, zero when inverted
    pub fn total_days(&self) -> u64 {
        if self.is_inverted() {
            0
        } else {
            self.start.days_until(self.end) as u64 + 1
        }
    }

    pub fn days(&self) -> Days {
        Days {
            next: if self.is_inverted() { None } else { Some(self.start) },
            end: self.end,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator over every day of a `DateRange`
pub struct Days {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        let current = self.next?;
        self.next = if current < self.end { current.succ() } else { None };
        Some(current)
    }
}

/// A calendar month, stored as its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: CalendarDate,
}

impl YearMonth {
    /// `month` is 1-based (1 = January)
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(format!(
                "month {} out of range 1..=12",
                month
            )));
        }
        Ok(YearMonth {
            first: CalendarDate::from_ymd(year, month, 1)?,
        })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> CalendarDate {
        self.first
    }

    pub fn last_day(&self) -> CalendarDate {
        let last = self.first.0.with_day(self.days_in_month()).unwrap_or(self.first.0);
        CalendarDate(last)
    }

    pub fn is_leap_year(&self) -> bool {
        let y = self.year();
        (y % 4 == 0 && y % 100 != 0) || y % 400 == 0
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Weekday of the 1st, Sunday = 0 .. Saturday = 6
    pub fn starting_day_of_week(&self) -> usize {
        self.first.weekday().num_days_from_sunday() as usize
    }

    pub fn succ(&self) -> Option<YearMonth> {
        self.last_day().succ().map(|first| YearMonth { first })
    }

    /// Long form as shown in month titles, e.g. "January 2026"
    pub fn long_name(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month() as usize - 1], self.year())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Classification of a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayClassification {
    Working,
    Rdo,
    Holiday,
    Closure,
    Weekend,
}

impl DayClassification {
    /// Legend order
    pub const ALL: [DayClassification; 5] = [
        DayClassification::Working,
        DayClassification::Rdo,
        DayClassification::Holiday,
        DayClassification::Closure,
        DayClassification::Weekend,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DayClassification::Working => "working",
            DayClassification::Rdo => "rdo",
            DayClassification::Holiday => "holiday",
            DayClassification::Closure => "closure",
            DayClassification::Weekend => "weekend",
        }
    }

    /// Legend label
    pub fn label(&self) -> &str {
        match self {
            DayClassification::Working => "Working Day",
            DayClassification::Rdo => "RDO",
            DayClassification::Holiday => "Public Holiday",
            DayClassification::Closure => "Xmas Closure",
            DayClassification::Weekend => "Weekend",
        }
    }

    /// Stats panel label
    pub fn stat_label(&self) -> &str {
        match self {
            DayClassification::Working => "Working Days",
            DayClassification::Rdo => "RDOs",
            DayClassification::Holiday => "Public Holidays",
            DayClassification::Closure => "Xmas Closure",
            DayClassification::Weekend => "Weekends",
        }
    }
}

impl fmt::Display for DayClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category day counts for a range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeStats {
    pub working_days: u64,
    pub rdo_count: u64,
    pub holiday_count: u64,
    pub weekend_count: u64,
    pub closure_count: u64,
}

impl RangeStats {
    pub fn record(&mut self, classification: DayClassification) {
        match classification {
            DayClassification::Working => self.working_days += 1,
            DayClassification::Rdo => self.rdo_count += 1,
            DayClassification::Holiday => self.holiday_count += 1,
            DayClassification::Closure => self.closure_count += 1,
            DayClassification::Weekend => self.weekend_count += 1,
        }
    }

    pub fn count(&self, classification: DayClassification) -> u64 {
        match classification {
            DayClassification::Working => self.working_days,
            DayClassification::Rdo => self.rdo_count,
            DayClassification::Holiday => self.holiday_count,
            DayClassification::Closure => self.closure_count,
            DayClassification::Weekend => self.weekend_count,
        }
    }

    pub fn total(&self) -> u64 {
        self.working_days + self.rdo_count + self.holiday_count + self.weekend_count + self.closure_count
    }
}

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CalendarError::ConfigError(format!("Unknown output format: {}", other))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub reference_data: Option<PathBuf>,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub open_print: bool,
    pub log_level: String,
}

impl AppConfig {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            title: "Construction Work Calendar".to_string(),
            start_date: literal_date(2026, 1, 1),
            end_date: literal_date(2026, 12, 31),
            reference_data: None,
            output: PathBuf::from("calendar.html"),
            format: OutputFormat::Html,
            open_print: false,
            log_level: "info".to_string(),
        }
    }
}

fn literal_date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
}
