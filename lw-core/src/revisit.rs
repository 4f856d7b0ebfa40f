//! Historical overpass dates derived from the fixed revisit cycle.

use lw_entities::date::parse_iso_date;
use time::{Date, Duration};

use crate::{Error, Result};

/// Days between two overpasses of the same WRS-2 ground track.
pub const DEFAULT_REVISIT_CYCLE_DAYS: i64 = 16;

/// All pass dates from `anchor` up to and including `today`.
///
/// The result is empty if `anchor` lies in the future.
pub fn generate(anchor: Date, today: Date, cycle_days: i64) -> Result<Vec<Date>> {
    if cycle_days <= 0 {
        return Err(Error::InvalidCycle(cycle_days));
    }
    if anchor > today {
        return Ok(Vec::new());
    }
    let span = (today - anchor).whole_days();
    let capacity = usize::try_from(span / cycle_days + 1).unwrap_or_default();
    let mut dates = Vec::with_capacity(capacity);
    let step = Duration::days(cycle_days);
    let mut next = Some(anchor);
    while let Some(date) = next.filter(|date| *date <= today) {
        dates.push(date);
        // Stops at the end of the supported calendar
        next = date.checked_add(step);
    }
    Ok(dates)
}

/// Same as [`generate`] for an anchor date in `YYYY-MM-DD` notation.
pub fn generate_from_str(anchor: &str, today: Date, cycle_days: i64) -> Result<Vec<Date>> {
    if anchor.trim().is_empty() {
        return Err(Error::InvalidAnchorDate(anchor.to_owned()));
    }
    let anchor = parse_iso_date(anchor)?;
    generate(anchor, today, cycle_days)
}
