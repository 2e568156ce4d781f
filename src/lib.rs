pub mod types;
pub mod error;
pub mod time;
pub mod calendar;
pub mod session;
pub mod render;
pub mod config;

pub use types::*;
pub use error::{CalendarError, Result};
pub use session::{CalendarSession, Snapshot};
pub use time::ReferenceData;
