/// Month grid layout: Sunday-first, seven columns
use tracing::debug;

use crate::error::Result;
use crate::types::{CalendarDate, YearMonth};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Cells for one month. `None` is a leading placeholder; column is `index % 7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<Option<CalendarDate>>,
}

impl MonthGrid {
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_none()).count()
    }

    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Cells with trailing placeholders up to a whole number of weeks
    pub fn padded_cells(&self) -> Vec<Option<CalendarDate>> {
        let mut cells = self.cells.clone();
        let remainder = cells.len() % 7;
        if remainder != 0 {
            cells.resize(cells.len() + 7 - remainder, None);
        }
        cells
    }

    pub fn weeks(&self) -> Vec<Vec<Option<CalendarDate>>> {
        self.padded_cells().chunks(7).map(|w| w.to_vec()).collect()
    }
}

/// Build the grid for a month: leading blanks for the weekday offset, then days 1..=N
pub fn days_in_month(month: YearMonth) -> MonthGrid {
    let offset = month.starting_day_of_week();
    let mut cells = Vec::with_capacity(offset + month.days_in_month() as usize);
    cells.resize(offset, None);

    let last = month.last_day();
    let mut day = Some(month.first_day());
    while let Some(d) = day {
        if d > last {
            break;
        }
        cells.push(Some(d));
        day = d.succ();
    }

    debug!("Built grid for {}: {} blanks, {} days", month, offset, cells.len() - offset);

    MonthGrid { month, cells }
}

/// Same as `days_in_month` from a 1-based year/month pair
pub fn build_month(year: i32, month: u32) -> Result<MonthGrid> {
    Ok(days_in_month(YearMonth::new(year, month)?))
}
