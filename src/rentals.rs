//! Rental booking intervals and their conversion into the blocked-day
//! shapes a calendar widget consumes.

use crate::dates::{DayRange, days_in_range, parse_day};
use crate::marked::{DayMarking, MarkedDates};
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// A booking's calendar-day span. Both endpoints are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

impl Rental {
    /// Builds a rental from a pair of `YYYY-MM-DD` day strings.
    pub fn from_strs(start: &str, end: &str) -> Result<Self> {
        let start = parse_day(start).with_context(|| format!("invalid rental start {start:?}"))?;
        let end = parse_day(end).with_context(|| format!("invalid rental end {end:?}"))?;
        Ok(Self { start, end })
    }
}

/// Flattens rentals into one sequence of `YYYY-MM-DD` day strings.
///
/// Each rental contributes its full inclusive day sequence, concatenated in
/// input order. Overlapping rentals produce duplicate days on purpose: the
/// flat list reflects the source intervals exactly, and deduplication is
/// left to the map fold in [`blocked_day_markings`].
pub fn rental_day_strings(rentals: &[Rental]) -> Vec<String> {
    rentals
        .iter()
        .flat_map(|rental| days_in_range(DayRange::new(rental.start, rental.end)))
        .collect()
}

/// Converts rentals into the disabled-day map for the widget's `markedDates`
/// prop: every covered day maps to `{disabled: true, disableTouchEvent: true}`.
///
/// Empty input yields an empty map. Days covered by more than one rental
/// collapse to a single entry through last-write-wins insertion.
///
/// # Examples
///
/// ```
/// # use rental_dates::rentals::{Rental, blocked_day_markings};
/// let rental = Rental::from_strs("2020-06-21", "2020-06-22")?;
///
/// let marked = blocked_day_markings(&[rental]);
///
/// assert_eq!(marked.len(), 2);
/// assert!(marked["2020-06-21"].disabled.unwrap());
/// assert!(marked["2020-06-22"].disable_touch_event.unwrap());
/// # anyhow::Ok(())
/// ```
pub fn blocked_day_markings(rentals: &[Rental]) -> MarkedDates {
    if rentals.is_empty() {
        return MarkedDates::new();
    }
    let mut marked = MarkedDates::new();
    for day in rental_day_strings(rentals) {
        marked.insert(day, DayMarking::blocked());
    }
    debug!("marked {} days blocked across {} rentals", marked.len(), rentals.len());
    marked
}
