/// Self-contained HTML document with an embedded print stylesheet
use std::fmt::Write;

use crate::calendar::WEEKDAY_HEADERS;
use crate::error::{CalendarError, Result};
use crate::render::print::MANUAL_PRINT_MESSAGE;
use crate::render::view::{CalendarView, DayCell, MonthView};

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: #f3f4f6; color: #1f2937; }
.app-container { padding: 2rem 1rem; }
.content-wrapper { max-width: 80rem; margin: 0 auto; }
.card { background: #fff; border-radius: 0.75rem; box-shadow: 0 4px 12px rgba(0,0,0,0.08); padding: 2rem; }
.header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
.header h1 { margin: 0; font-size: 1.875rem; }
.print-button { background: #2563eb; color: #fff; border: none; border-radius: 0.5rem; padding: 0.6rem 1.2rem; font-size: 1rem; cursor: pointer; }
.print-button:hover { background: #1d4ed8; }
.date-selector { display: flex; gap: 1.5rem; margin-bottom: 1.5rem; }
.input-group { display: flex; flex-direction: column; }
.input-group label { font-size: 0.875rem; font-weight: 600; margin-bottom: 0.25rem; }
.input-group input { padding: 0.4rem 0.6rem; border: 1px solid #d1d5db; border-radius: 0.375rem; }
.stats-grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; margin-bottom: 1.5rem; }
.stat-card { border-radius: 0.5rem; padding: 1rem; text-align: center; }
.stat-number { font-size: 1.875rem; font-weight: 700; }
.stat-label { font-size: 0.875rem; }
.stat-working, .legend-working, .day-working { background: #dcfce7; }
.stat-rdo, .legend-rdo, .day-rdo { background: #dbeafe; }
.stat-holiday, .legend-holiday, .day-holiday { background: #fee2e2; }
.stat-closure, .legend-closure, .day-closure { background: #fef3c7; }
.stat-weekend, .legend-weekend, .day-weekend { background: #e5e7eb; }
.legend { display: flex; flex-wrap: wrap; gap: 1.5rem; margin-bottom: 1.5rem; }
.legend-item { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; }
.legend-color { width: 1.25rem; height: 1.25rem; border-radius: 0.25rem; border: 1px solid #d1d5db; }
.calendar-months { display: grid; grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr)); gap: 1.5rem; }
.month-container { border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1rem; break-inside: avoid; }
.month-title { margin: 0 0 0.75rem; font-size: 1.125rem; text-align: center; }
.calendar-grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 2px; }
.day-header { font-size: 0.75rem; font-weight: 600; text-align: center; padding: 0.25rem 0; }
.day-cell { min-height: 2.75rem; border-radius: 0.25rem; padding: 0.2rem; display: flex; flex-direction: column; align-items: center; font-size: 0.8rem; }
.day-cell.empty { background: transparent; }
.day-out-of-range { background: #fafafa; color: #d1d5db; }
.day-number { font-weight: 600; }
.day-label { font-size: 0.6rem; line-height: 1; text-align: center; }
@media print {
  body { background: #fff; }
  .app-container { padding: 0; }
  .card { box-shadow: none; padding: 0; }
  .print-button, .date-selector { display: none; }
  * { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
}
"#;

/// Escape text for element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_html(view: &CalendarView) -> Result<String> {
    write_document(view).map_err(|e| CalendarError::RenderError(format!("Failed to render HTML: {}", e)))
}

fn write_document(view: &CalendarView) -> std::result::Result<String, std::fmt::Error> {
    let mut html = String::new();
    let title = escape(&view.title);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en-AU\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>{}</title>", title)?;
    writeln!(html, "<style>{}</style>", STYLESHEET)?;
    writeln!(html, "<script>")?;
    writeln!(html, "function printCalendar() {{")?;
    writeln!(html, "  try {{ window.print(); }} catch (error) {{ alert({}); }}", js_string(MANUAL_PRINT_MESSAGE))?;
    writeln!(html, "}}")?;
    writeln!(html, "</script>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<div class=\"app-container\"><div class=\"content-wrapper\"><div class=\"card\">")?;

    // Header
    writeln!(html, "<div class=\"header\">")?;
    writeln!(html, "<div class=\"header-title\"><h1>{}</h1></div>", title)?;
    writeln!(html, "<button class=\"print-button\" onclick=\"printCalendar()\">Print / Save PDF</button>")?;
    writeln!(html, "</div>")?;

    // Date range
    writeln!(html, "<div class=\"date-selector\">")?;
    for (label, value) in [("Project Start Date", view.range.start), ("Project End Date", view.range.end)] {
        writeln!(
            html,
            "<div class=\"input-group\"><label>{}</label><input type=\"date\" value=\"{}\" readonly></div>",
            label, value
        )?;
    }
    writeln!(html, "</div>")?;

    // Statistics
    writeln!(html, "<div class=\"stats-grid\">")?;
    for stat in &view.stats {
        writeln!(
            html,
            "<div class=\"stat-card stat-{}\"><div class=\"stat-number\">{}</div><div class=\"stat-label\">{}</div></div>",
            stat.classification.as_str(),
            stat.count,
            escape(stat.label())
        )?;
    }
    writeln!(html, "</div>")?;

    // Legend
    writeln!(html, "<div class=\"legend\">")?;
    for entry in view.legend() {
        writeln!(
            html,
            "<div class=\"legend-item\"><div class=\"legend-color legend-{}\"></div><span>{}</span></div>",
            entry.as_str(),
            escape(entry.label())
        )?;
    }
    writeln!(html, "</div>")?;

    writeln!(html, "<div class=\"calendar-months\">")?;
    for month in &view.months {
        write_month(&mut html, month)?;
    }
    writeln!(html, "</div>")?;

    writeln!(html, "</div></div></div>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
}

fn write_month(html: &mut String, month: &MonthView) -> std::fmt::Result {
    writeln!(html, "<div class=\"month-container\">")?;
    writeln!(html, "<h2 class=\"month-title\">{}</h2>", escape(&month.title))?;
    writeln!(html, "<div class=\"calendar-grid\">")?;

    for header in WEEKDAY_HEADERS {
        writeln!(html, "<div class=\"day-header\">{}</div>", header)?;
    }

    for cell in &month.cells {
        match cell {
            DayCell::Empty => writeln!(html, "<div class=\"{}\"></div>", cell.css_class())?,
            DayCell::Day(day) => {
                write!(html, "<div class=\"{}\"", cell.css_class())?;
                if let Some(title) = &day.title {
                    write!(html, " title=\"{}\"", escape(title))?;
                }
                write!(html, "><span class=\"day-number\">{}</span>", day.date.day())?;
                if let Some(label) = &day.label {
                    write!(html, "<span class=\"day-label\">{}</span>", escape(label))?;
                }
                writeln!(html, "</div>")?;
            }
        }
    }

    writeln!(html, "</div>")?;
    writeln!(html, "</div>")
}

/// Quote a string as a JavaScript literal inside an HTML attribute-free script block
fn js_string(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('<', "\\x3c");
    format!("'{}'", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::view::build_view;
    use crate::session::Snapshot;
    use crate::time::ReferenceData;
    use crate::types::{CalendarDate, DateRange};

    fn render(start: &str, end: &str) -> String {
        let reference = ReferenceData::victoria();
        let range = DateRange::new(CalendarDate::parse(start).unwrap(), CalendarDate::parse(end).unwrap());
        let snapshot = Snapshot::compute(range, &reference);
        render_html(&build_view("Construction Work Calendar", &snapshot, &reference)).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Queen's <b>\"Day\"</b> & co"), "Queen&#39;s &lt;b&gt;&quot;Day&quot;&lt;/b&gt; &amp; co");
    }

    #[test]
    fn test_document_sections() {
        let html = render("2026-12-01", "2026-12-31");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Construction Work Calendar</h1>"));
        assert!(html.contains("Print / Save PDF"));
        assert!(html.contains("value=\"2026-12-01\""));
        assert!(html.contains("<h2 class=\"month-title\">December 2026</h2>"));
        assert_eq!(html.matches("class=\"legend-item\"").count(), 5);
        assert_eq!(html.matches("class=\"stat-card").count(), 5);
        assert_eq!(html.matches("class=\"day-header\"").count(), 7);
    }

    #[test]
    fn test_holiday_and_closure_cells() {
        let html = render("2026-12-01", "2026-12-31");
        assert!(html.contains(
            "<div class=\"day-cell day-holiday\" title=\"Christmas Day\"><span class=\"day-number\">25</span><span class=\"day-label\">Christmas</span></div>"
        ));
        assert!(html.contains("<div class=\"day-cell day-closure\" title=\"Christmas Closure\"><span class=\"day-number\">29</span></div>"));
    }

    #[test]
    fn test_print_fallback_script() {
        let html = render("2026-01-01", "2026-01-31");
        assert!(html.contains("window.print()"));
        assert!(html.contains("Print function not available. Please use your browser\\'s print function"));
    }

    #[test]
    fn test_inverted_range_still_renders() {
        let html = render("2026-05-20", "2026-05-03");
        assert!(html.contains("May 2026"));
        assert!(!html.contains("day-cell day-working"));
        assert!(html.contains("<div class=\"stat-number\">0</div>"));
    }
}
