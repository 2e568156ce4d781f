/// Show day counts for a range - working days, RDOs, holidays, closures, weekends
/// Usage: cargo run --release --bin show_range_stats [START] [END]
use std::sync::Arc;

use workcal::{CalendarDate, CalendarSession, DateRange, DayClassification, ReferenceData};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let start = match args.next() {
        Some(s) => CalendarDate::parse(&s)?,
        None => CalendarDate::parse("2026-01-01")?,
    };
    let end = match args.next() {
        Some(s) => CalendarDate::parse(&s)?,
        None => CalendarDate::parse("2026-12-31")?,
    };

    println!("📅 Range Stats: {} to {}", start, end);
    println!("==================================\n");

    let session = CalendarSession::new(Arc::new(ReferenceData::victoria()), DateRange::new(start, end));
    let snapshot = session.snapshot();
    let total = snapshot.range.total_days();

    if total == 0 {
        println!("⚠️  Start date is after end date - no days counted");
        return Ok(());
    }

    println!("📊 Summary:");
    println!("   Total Days: {}", total);
    for class in DayClassification::ALL {
        let count = snapshot.stats.count(class);
        println!(
            "   {}: {} ({:.1}%)",
            class.stat_label(),
            count,
            (count as f64 / total as f64) * 100.0
        );
    }

    let non_working = total - snapshot.stats.working_days;
    println!("\n🏗️  Lost to non-working days: {} of {}", non_working, total);
    println!("   Months shown: {}", snapshot.months.len());

    Ok(())
}
