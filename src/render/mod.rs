pub mod view;
pub mod html;
pub mod text;
pub mod report;
pub mod print;

pub use view::{build_view, CalendarView, DayCell, DayView, MonthView, StatView, CLOSURE_TITLE};
pub use html::render_html;
pub use text::render_text;
pub use report::{render_json, RangeReport};
pub use print::{request_print, PrintFacility, PrintOutcome, SystemPrinter, MANUAL_PRINT_MESSAGE};

use crate::error::Result;
use crate::types::OutputFormat;

/// Render a view in the requested format
pub fn render(view: &CalendarView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Html => render_html(view),
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => render_json(view),
    }
}
