/// Machine-readable JSON report of a range selection
use serde::Serialize;

use crate::error::Result;
use crate::render::view::{CalendarView, DayCell};
use crate::types::{CalendarDate, DayClassification, RangeStats};

#[derive(Debug, Serialize)]
pub struct RangeReport {
    pub title: String,
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub total_days: u64,
    pub stats: RangeStats,
    pub months: Vec<MonthSummary>,
}

#[derive(Debug, Serialize)]
pub struct MonthSummary {
    pub name: String,
    pub days_in_range: usize,
    pub non_working: Vec<NonWorkingDay>,
}

#[derive(Debug, Serialize)]
pub struct NonWorkingDay {
    pub date: CalendarDate,
    pub classification: DayClassification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RangeReport {
    pub fn from_view(view: &CalendarView) -> Self {
        let months = view
            .months
            .iter()
            .map(|month| {
                let in_range: Vec<_> = month
                    .cells
                    .iter()
                    .filter_map(|cell| match cell {
                        DayCell::Day(day) if day.in_range => Some(day),
                        _ => None,
                    })
                    .collect();

                MonthSummary {
                    name: month.title.clone(),
                    days_in_range: in_range.len(),
                    non_working: in_range
                        .iter()
                        .filter(|day| {
                            !matches!(day.classification, DayClassification::Working | DayClassification::Weekend)
                        })
                        .map(|day| NonWorkingDay {
                            date: day.date,
                            classification: day.classification,
                            name: day.title.clone(),
                        })
                        .collect(),
                }
            })
            .collect();

        RangeReport {
            title: view.title.clone(),
            start: view.range.start,
            end: view.range.end,
            total_days: view.total_days,
            stats: view.counts,
            months,
        }
    }
}

pub fn render_json(view: &CalendarView) -> Result<String> {
    Ok(serde_json::to_string_pretty(&RangeReport::from_view(view))?)
}
