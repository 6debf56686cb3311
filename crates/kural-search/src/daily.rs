//! Record-of-the-day selection.

use kural_corpus::Record;

/// Picks the record of the day from the flattened corpus.
///
/// A pure function of the calendar day of month (1–31, supplied by the
/// caller — the core never reads the clock) and the flattened list's order
/// and length: `records[day_of_month % len]`. Callers must recompute this
/// on date rollover rather than caching the pick. Returns `None` for an
/// empty list.
pub fn record_of_the_day<'a>(records: &[&'a Record], day_of_month: u32) -> Option<&'a Record> {
    if records.is_empty() {
        return None;
    }
    Some(records[day_of_month as usize % records.len()])
}
