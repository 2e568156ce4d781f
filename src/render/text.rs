/// Terminal rendering: one-letter markers next to each day number
use std::fmt::Write;

use crate::calendar::WEEKDAY_HEADERS;
use crate::render::view::{CalendarView, DayCell, DayView, MonthView};
use crate::types::DayClassification;

const OUT_OF_RANGE_MARKER: char = '-';

pub fn marker(classification: DayClassification) -> char {
    match classification {
        DayClassification::Working => ' ',
        DayClassification::Rdo => 'R',
        DayClassification::Holiday => 'H',
        DayClassification::Closure => 'C',
        DayClassification::Weekend => 'w',
    }
}

fn cell_marker(day: &DayView) -> char {
    if day.in_range {
        marker(day.classification)
    } else {
        OUT_OF_RANGE_MARKER
    }
}

pub fn render_text(view: &CalendarView) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &CalendarView) -> std::fmt::Result {
    writeln!(out, "{}", view.title)?;
    writeln!(out, "{}", "=".repeat(view.title.chars().count()))?;
    writeln!(out, "Range: {} ({} days)", view.range, view.total_days)?;
    writeln!(out)?;

    let stats: Vec<String> = view
        .stats
        .iter()
        .map(|s| format!("{}: {}", s.label(), s.count))
        .collect();
    writeln!(out, "{}", stats.join(" | "))?;

    let mut legend: Vec<String> = view
        .legend()
        .iter()
        .map(|c| format!("'{}' {}", marker(*c), c.label()))
        .collect();
    legend.push(format!("'{}' Out of range", OUT_OF_RANGE_MARKER));
    writeln!(out, "Legend: {}", legend.join("  "))?;

    for month in &view.months {
        writeln!(out)?;
        write_month(out, month)?;
    }

    Ok(())
}

fn write_month(out: &mut String, month: &MonthView) -> std::fmt::Result {
    writeln!(out, "{:^35}", month.title)?;

    let header: String = WEEKDAY_HEADERS.iter().map(|h| format!("{:>5}", h)).collect();
    writeln!(out, "{}", header)?;

    for week in month.cells.chunks(7) {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                DayCell::Empty => "     ".to_string(),
                DayCell::Day(day) => format!("{:>4}{}", day.date.day(), cell_marker(day)),
            })
            .collect();
        writeln!(out, "{}", line.trim_end())?;
    }

    for cell in &month.cells {
        if let DayCell::Day(day) = cell {
            if let Some(title) = &day.title {
                writeln!(out, "  {:>2}  {}", day.date.day(), title)?;
            }
        }
    }

    Ok(())
}
