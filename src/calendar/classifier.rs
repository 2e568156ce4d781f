/// Day classification with fixed precedence
use crate::time::ReferenceData;
use crate::types::{CalendarDate, DayClassification};

/// Classify a day. First match wins: holiday, closure, RDO, weekend, working.
pub fn classify(date: CalendarDate, data: &ReferenceData) -> DayClassification {
    if data.holiday_name(date).is_some() {
        return DayClassification::Holiday;
    }

    if data.is_closure(date) {
        return DayClassification::Closure;
    }

    if data.is_rdo(date) {
        return DayClassification::Rdo;
    }

    if date.is_weekend() {
        return DayClassification::Weekend;
    }

    DayClassification::Working
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn overlapping() -> ReferenceData {
        // Every table names the same Saturday and Monday
        let days = [date("2026-05-02"), date("2026-05-04")];
        let holidays: BTreeMap<_, _> = [(days[0], "Test Holiday".to_string())].into_iter().collect();
        let closures: BTreeSet<_> = days.iter().copied().collect();
        let rdos: BTreeSet<_> = days.iter().copied().collect();
        ReferenceData::new("Overlap".to_string(), holidays, rdos, closures)
    }

    #[test]
    fn test_holiday_beats_everything() {
        assert_eq!(classify(date("2026-05-02"), &overlapping()), DayClassification::Holiday);
    }

    #[test]
    fn test_closure_beats_rdo() {
        assert_eq!(classify(date("2026-05-04"), &overlapping()), DayClassification::Closure);
    }

    #[test]
    fn test_holiday_beats_rdo() {
        let data = ReferenceData::victoria();
        // Good Friday 2027 is also listed as an RDO
        assert_eq!(classify(date("2027-03-26"), &data), DayClassification::Holiday);
    }

    #[test]
    fn test_closure_on_weekend_is_closure() {
        let closures: BTreeSet<_> = [date("2026-01-03")].into_iter().collect();
        let data = ReferenceData::new(String::new(), BTreeMap::new(), BTreeSet::new(), closures);
        assert_eq!(classify(date("2026-01-03"), &data), DayClassification::Closure);
    }

    #[test]
    fn test_weekend_fallback() {
        let data = ReferenceData::default();
        let mut day = date("2026-06-01");
        for _ in 0..28 {
            let expected = if day.is_weekend() {
                DayClassification::Weekend
            } else {
                DayClassification::Working
            };
            assert_eq!(classify(day, &data), expected);
            day = day.succ().unwrap();
        }
    }

    #[test]
    fn test_builtin_scenario() {
        let data = ReferenceData::victoria();
        assert_eq!(classify(date("2026-12-25"), &data), DayClassification::Holiday);
        assert_eq!(data.holiday_name(date("2026-12-25")), Some("Christmas Day"));
        assert_eq!(classify(date("2026-12-26"), &data), DayClassification::Holiday);
        assert_eq!(data.holiday_name(date("2026-12-26")), Some("Boxing Day"));
        assert_eq!(classify(date("2026-12-29"), &data), DayClassification::Closure);
        assert_eq!(classify(date("2026-01-16"), &data), DayClassification::Rdo);
        assert_eq!(classify(date("2026-01-03"), &data), DayClassification::Weekend);
        assert_eq!(classify(date("2026-01-05"), &data), DayClassification::Working);
        assert_eq!(classify(date("2026-01-02"), &data), DayClassification::Closure);
    }
}
