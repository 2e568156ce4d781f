/// Calendar session: the selected range is the only mutable input,
/// and every change recomputes stats and month grids in full.
use std::sync::Arc;
use tracing::{debug, warn};

use crate::calendar::{aggregate, days_in_month, months_in_range, MonthGrid};
use crate::time::ReferenceData;
use crate::types::{CalendarDate, DateRange, RangeStats};

/// Everything derived from one range selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub range: DateRange,
    pub stats: RangeStats,
    pub months: Vec<MonthGrid>,
}

impl Snapshot {
    pub fn compute(range: DateRange, reference: &ReferenceData) -> Self {
        if range.is_inverted() {
            warn!("Range {} is inverted - no days will be counted", range);
        }

        let stats = aggregate(&range, reference);
        let months: Vec<MonthGrid> = months_in_range(&range).into_iter().map(days_in_month).collect();

        debug!("Recomputed {}: {} days over {} months", range, stats.total(), months.len());

        Snapshot { range, stats, months }
    }
}

pub struct CalendarSession {
    reference: Arc<ReferenceData>,
    snapshot: Snapshot,
}

impl CalendarSession {
    pub fn new(reference: Arc<ReferenceData>, range: DateRange) -> Self {
        let snapshot = Snapshot::compute(range, &reference);
        CalendarSession { reference, snapshot }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn range(&self) -> DateRange {
        self.snapshot.range
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn set_start(&mut self, start: CalendarDate) {
        let end = self.snapshot.range.end;
        self.set_range(DateRange::new(start, end));
    }

    pub fn set_end(&mut self, end: CalendarDate) {
        let start = self.snapshot.range.start;
        self.set_range(DateRange::new(start, end));
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.snapshot = Snapshot::compute(range, &self.reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn session(start: &str, end: &str) -> CalendarSession {
        CalendarSession::new(
            Arc::new(ReferenceData::victoria()),
            DateRange::new(date(start), date(end)),
        )
    }

    #[test]
    fn test_initial_snapshot() {
        let s = session("2026-01-01", "2026-03-15");
        assert_eq!(s.snapshot().months.len(), 3);
        assert_eq!(s.snapshot().stats.total(), 74);
    }

    #[test]
    fn test_set_end_recomputes() {
        let mut s = session("2026-12-01", "2026-12-24");
        let before = s.snapshot().stats;
        s.set_end(date("2026-12-31"));
        let after = s.snapshot().stats;
        assert_eq!(after.total(), 31);
        assert!(after.holiday_count > before.holiday_count);
        assert_eq!(s.range().end, date("2026-12-31"));
    }

    #[test]
    fn test_set_start_recomputes_months() {
        let mut s = session("2026-12-01", "2026-12-31");
        s.set_start(date("2026-10-15"));
        let months: Vec<String> = s.snapshot().months.iter().map(|m| m.month.to_string()).collect();
        assert_eq!(months, vec!["2026-10", "2026-11", "2026-12"]);
    }

    #[test]
    fn test_inverted_selection_degrades() {
        let mut s = session("2026-01-01", "2026-01-31");
        s.set_start(date("2026-02-10"));
        assert_eq!(s.snapshot().stats, RangeStats::default());
        assert!(s.snapshot().months.is_empty());
    }

    #[test]
    fn test_same_input_same_snapshot() {
        let mut s = session("2026-04-01", "2026-04-30");
        let first = s.snapshot().clone();
        s.set_range(DateRange::new(date("2026-04-01"), date("2026-04-30")));
        assert_eq!(s.snapshot(), &first);
    }
}
