pub mod classifier;
pub mod aggregator;
pub mod grid;

pub use classifier::classify;
pub use aggregator::{aggregate, months_in_range};
pub use grid::{build_month, days_in_month, MonthGrid, WEEKDAY_HEADERS};
