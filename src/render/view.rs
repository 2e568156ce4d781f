/// View model: what each cell, stat card and legend entry shows
use crate::calendar::MonthGrid;
use crate::calendar::classify;
use crate::session::Snapshot;
use crate::time::ReferenceData;
use crate::types::{CalendarDate, DateRange, DayClassification, RangeStats};

pub const CLOSURE_TITLE: &str = "Christmas Closure";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub date: CalendarDate,
    pub in_range: bool,
    pub classification: DayClassification,
    /// First word of the holiday name
    pub label: Option<String>,
    /// Tooltip text
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    Empty,
    Day(DayView),
}

impl DayCell {
    /// Out-of-range days are styled by range membership only
    pub fn css_class(&self) -> String {
        match self {
            DayCell::Empty => "day-cell empty".to_string(),
            DayCell::Day(day) if !day.in_range => "day-cell day-out-of-range".to_string(),
            DayCell::Day(day) => format!("day-cell day-{}", day.classification.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub title: String,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatView {
    pub classification: DayClassification,
    pub count: u64,
}

impl StatView {
    pub fn label(&self) -> &str {
        self.classification.stat_label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub title: String,
    pub range: DateRange,
    pub total_days: u64,
    pub counts: RangeStats,
    pub stats: Vec<StatView>,
    pub months: Vec<MonthView>,
}

impl CalendarView {
    /// Legend entries never depend on the data
    pub fn legend(&self) -> [DayClassification; 5] {
        DayClassification::ALL
    }
}

pub fn build_view(title: &str, snapshot: &Snapshot, reference: &ReferenceData) -> CalendarView {
    let stats = DayClassification::ALL
        .iter()
        .map(|c| StatView {
            classification: *c,
            count: snapshot.stats.count(*c),
        })
        .collect();

    let months = snapshot
        .months
        .iter()
        .map(|grid| month_view(grid, &snapshot.range, reference))
        .collect();

    CalendarView {
        title: title.to_string(),
        range: snapshot.range,
        total_days: snapshot.range.total_days(),
        counts: snapshot.stats,
        stats,
        months,
    }
}

fn month_view(grid: &MonthGrid, range: &DateRange, reference: &ReferenceData) -> MonthView {
    let cells = grid
        .cells
        .iter()
        .map(|cell| match cell {
            None => DayCell::Empty,
            Some(date) => DayCell::Day(day_view(*date, range, reference)),
        })
        .collect();

    MonthView {
        title: grid.month.long_name(),
        cells,
    }
}

fn day_view(date: CalendarDate, range: &DateRange, reference: &ReferenceData) -> DayView {
    let classification = classify(date, reference);
    let holiday = reference.holiday_name(date);

    let label = holiday.and_then(|name| name.split(' ').next()).map(str::to_string);
    let title = match (holiday, classification) {
        (Some(name), _) => Some(name.to_string()),
        (None, DayClassification::Closure) => Some(CLOSURE_TITLE.to_string()),
        _ => None,
    };

    DayView {
        date,
        in_range: range.contains(date),
        classification,
        label,
        title,
    }
}
