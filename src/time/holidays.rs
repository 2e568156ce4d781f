/// Reference calendar data: public holidays, RDOs and closure days
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

use crate::types::CalendarDate;

/// Victorian public holidays 2026-2027 (update annually)
const VIC_HOLIDAYS: &[(&str, &str)] = &[
    ("2026-01-01", "New Year's Day"),
    ("2026-01-26", "Australia Day"),
    ("2026-03-09", "Labour Day"),
    ("2026-04-03", "Good Friday"),
    ("2026-04-04", "Saturday before Easter Sunday"),
    ("2026-04-06", "Easter Monday"),
    ("2026-04-25", "Anzac Day"),
    ("2026-06-08", "Queen's Birthday"),
    ("2026-11-03", "Melbourne Cup"),
    ("2026-12-25", "Christmas Day"),
    ("2026-12-26", "Boxing Day"),
    ("2026-12-28", "Boxing Day (observed)"),
    ("2027-01-01", "New Year's Day"),
    ("2027-01-26", "Australia Day"),
    ("2027-03-08", "Labour Day"),
    ("2027-03-26", "Good Friday"),
    ("2027-03-27", "Saturday before Easter Sunday"),
    ("2027-03-29", "Easter Monday"),
    ("2027-04-25", "Anzac Day"),
    ("2027-04-26", "Anzac Day (observed)"),
    ("2027-06-14", "Queen's Birthday"),
    ("2027-11-02", "Melbourne Cup"),
    ("2027-12-25", "Christmas Day"),
    ("2027-12-26", "Boxing Day"),
    ("2027-12-27", "Christmas Day (observed)"),
    ("2027-12-28", "Boxing Day (observed)"),
];

/// Rostered days off, usually one or two a month
const RDO_DAYS: &[&str] = &[
    // 2026
    "2026-01-16", "2026-02-13", "2026-02-27", "2026-03-20", "2026-04-17",
    "2026-05-15", "2026-05-29", "2026-06-19", "2026-07-17", "2026-07-31",
    "2026-08-14", "2026-09-18", "2026-10-16", "2026-10-30", "2026-11-13",
    "2026-11-27", "2026-12-11",
    // 2027
    "2027-01-15", "2027-01-29", "2027-02-12", "2027-03-12", "2027-03-26",
    "2027-04-16", "2027-04-30", "2027-05-14", "2027-05-28", "2027-06-11",
    "2027-06-25", "2027-07-09", "2027-07-23", "2027-08-06", "2027-08-20",
    "2027-09-03", "2027-09-17", "2027-10-01", "2027-10-15", "2027-10-29",
    "2027-11-12", "2027-11-26", "2027-12-10",
];

/// Christmas / New Year shutdown days
const CHRISTMAS_CLOSURES: &[&str] = &[
    // 2025-2026
    "2025-12-23", "2025-12-24", "2025-12-29", "2025-12-30", "2025-12-31",
    "2026-01-02",
    // 2026-2027
    "2026-12-23", "2026-12-24", "2026-12-29", "2026-12-30", "2026-12-31",
    "2027-01-04", "2027-01-05",
];

/// Immutable lookup tables consulted by the classifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    region: String,
    holidays: BTreeMap<CalendarDate, String>,
    rdos: BTreeSet<CalendarDate>,
    closures: BTreeSet<CalendarDate>,
}

impl ReferenceData {
    pub fn new(
        region: String,
        holidays: BTreeMap<CalendarDate, String>,
        rdos: BTreeSet<CalendarDate>,
        closures: BTreeSet<CalendarDate>,
    ) -> Self {
        ReferenceData {
            region,
            holidays,
            rdos,
            closures,
        }
    }

    /// Built-in Victorian tables for 2026-2027
    pub fn victoria() -> Self {
        ReferenceData {
            region: "Victoria".to_string(),
            holidays: VIC_HOLIDAYS
                .iter()
                .filter_map(|(date, name)| literal(date).map(|d| (d, name.to_string())))
                .collect(),
            rdos: RDO_DAYS.iter().filter_map(|date| literal(date)).collect(),
            closures: CHRISTMAS_CLOSURES.iter().filter_map(|date| literal(date)).collect(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn holiday_name(&self, date: CalendarDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    pub fn is_rdo(&self, date: CalendarDate) -> bool {
        self.rdos.contains(&date)
    }

    pub fn is_closure(&self, date: CalendarDate) -> bool {
        self.closures.contains(&date)
    }

    pub fn holidays(&self) -> &BTreeMap<CalendarDate, String> {
        &self.holidays
    }

    pub fn rdos(&self) -> &BTreeSet<CalendarDate> {
        &self.rdos
    }

    pub fn closures(&self) -> &BTreeSet<CalendarDate> {
        &self.closures
    }

    /// Earliest and latest date named in any table
    pub fn coverage(&self) -> Option<(CalendarDate, CalendarDate)> {
        let first = [
            self.holidays.keys().next(),
            self.rdos.first(),
            self.closures.first(),
        ]
        .into_iter()
        .flatten()
        .min()?;

        let last = [
            self.holidays.keys().next_back(),
            self.rdos.last(),
            self.closures.last(),
        ]
        .into_iter()
        .flatten()
        .max()?;

        Some((*first, *last))
    }
}

/// Unparseable literals are skipped and so never match a date
fn literal(date: &str) -> Option<CalendarDate> {
    match CalendarDate::parse(date) {
        Ok(d) => Some(d),
        Err(e) => {
            warn!("Skipping reference literal: {}", e);
            None
        }
    }
}
