/// Range aggregation: per-category counts and the months a range touches
use tracing::debug;

use crate::calendar::classifier::classify;
use crate::time::ReferenceData;
use crate::types::{DateRange, RangeStats, YearMonth};

/// Count every day of the range by classification. Inverted ranges count nothing.
pub fn aggregate(range: &DateRange, data: &ReferenceData) -> RangeStats {
    let mut stats = RangeStats::default();

    for day in range.days() {
        stats.record(classify(day, data));
    }

    debug!(
        "Aggregated {}: {} working, {} RDO, {} holiday, {} closure, {} weekend",
        range,
        stats.working_days,
        stats.rdo_count,
        stats.holiday_count,
        stats.closure_count,
        stats.weekend_count
    );

    stats
}

/// Months from the start month through the end month, in order.
///
/// An inverted range within one month still yields that month; an inverted
/// range spanning months yields nothing.
pub fn months_in_range(range: &DateRange) -> Vec<YearMonth> {
    let last = range.end.year_month();
    let mut months = Vec::new();
    let mut current = Some(range.start.year_month());

    while let Some(month) = current {
        if month > last {
            break;
        }
        months.push(month);
        current = month.succ();
    }

    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CalendarDate, DayClassification};
    use proptest::prelude::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(date(start), date(end))
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_full_year_2026() {
        let stats = aggregate(&range("2026-01-01", "2026-12-31"), &ReferenceData::victoria());
        assert_eq!(stats.total(), 365);
        // 12 of the 26 holiday entries fall in 2026
        assert_eq!(stats.holiday_count, 12);
        assert_eq!(stats.rdo_count, 17);
        // 2026-01-02 plus 23, 24, 29, 30, 31 Dec
        assert_eq!(stats.closure_count, 6);
        // 104 weekend days less the Saturday/Sunday holidays (4 Apr, 25 Apr, 26 Dec)
        assert_eq!(stats.weekend_count, 101);
        assert_eq!(stats.working_days, 365 - 12 - 17 - 6 - 101);
    }

    #[test]
    fn test_single_day() {
        let stats = aggregate(&range("2026-12-25", "2026-12-25"), &ReferenceData::victoria());
        assert_eq!(stats.holiday_count, 1);
        assert_eq!(stats.total(), 1);
    }

    #[test]
    fn test_inverted_range_counts_nothing() {
        let stats = aggregate(&range("2026-03-01", "2026-02-01"), &ReferenceData::victoria());
        assert_eq!(stats, RangeStats::default());
    }

    #[test]
    fn test_leap_february() {
        let stats = aggregate(&range("2028-02-01", "2028-02-29"), &ReferenceData::default());
        assert_eq!(stats.total(), 29);
        assert_eq!(stats.count(DayClassification::Weekend), 8);
    }

    #[test]
    fn test_months_span() {
        assert_eq!(
            months_in_range(&range("2026-01-01", "2026-03-15")),
            vec![ym(2026, 1), ym(2026, 2), ym(2026, 3)]
        );
    }

    #[test]
    fn test_months_cross_year() {
        assert_eq!(
            months_in_range(&range("2026-11-20", "2027-01-05")),
            vec![ym(2026, 11), ym(2026, 12), ym(2027, 1)]
        );
    }

    #[test]
    fn test_months_same_month() {
        assert_eq!(months_in_range(&range("2026-05-03", "2026-05-20")), vec![ym(2026, 5)]);
    }

    #[test]
    fn test_months_inverted_same_month() {
        assert_eq!(months_in_range(&range("2026-05-20", "2026-05-03")), vec![ym(2026, 5)]);
    }

    #[test]
    fn test_months_inverted_across_months() {
        assert!(months_in_range(&range("2026-06-01", "2026-05-31")).is_empty());
    }

    fn any_date() -> impl Strategy<Value = CalendarDate> {
        (0i64..3000).prop_map(|offset| {
            let base = date("2025-01-01").as_naive();
            CalendarDate::from_naive(base + chrono::Duration::days(offset)).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_stats_sum_to_day_count(a in any_date(), b in any_date()) {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            let r = DateRange::new(start, end);
            let stats = aggregate(&r, &ReferenceData::victoria());
            prop_assert_eq!(stats.total() as i64, start.days_until(end) + 1);
        }

        #[test]
        fn prop_inverted_is_zero(a in any_date(), b in any_date()) {
            prop_assume!(a != b);
            let (start, end) = if a > b { (a, b) } else { (b, a) };
            let stats = aggregate(&DateRange::new(start, end), &ReferenceData::victoria());
            prop_assert_eq!(stats, RangeStats::default());
        }
    }
}
