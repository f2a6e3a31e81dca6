use chrono::{Duration, NaiveDate};

/// Day strings exchanged with the calendar widget are always `YYYY-MM-DD`.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// A request for a sequence of calendar days.
///
/// `inclusive` defaults to `true`: the sequence contains both `start` and
/// `end`. An exclusive range drops the first and last day, but only when the
/// inclusive sequence is longer than two days; shorter ranges have no
/// interior and yield nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub inclusive: bool,
}

impl DayRange {
    /// Creates an inclusive range from `start` to `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            inclusive: true,
        }
    }

    /// Returns the same range with the endpoints excluded.
    pub fn exclusive(self) -> Self {
        Self {
            inclusive: false,
            ..self
        }
    }
}

/// Generates a vector of `NaiveDate`s, inclusive of the start and end dates.
/// If `start` is after `end`, the resulting vector will be empty.
///
/// # Arguments
///
/// * `start` - The `NaiveDate` to start the range from (inclusive).
/// * `end` - The `NaiveDate` to end the range at (inclusive).
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use rental_dates::dates::dates_in_range;
/// let start = NaiveDate::from_ymd_opt(2020, 6, 21).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 6, 23).unwrap();
///
/// let dates = dates_in_range(start, end);
///
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], start);
/// assert_eq!(dates[2], end);
/// ```
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}

/// Generates the day strings covered by `range`, one per calendar day.
///
/// The exclusive form trims the first and last day of the sequence. Ranges
/// spanning two days or fewer have no interior days, so their exclusive form
/// is empty rather than a partially trimmed sequence.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use rental_dates::dates::{days_in_range, DayRange};
/// let start = NaiveDate::from_ymd_opt(2020, 6, 21).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 6, 23).unwrap();
///
/// let days = days_in_range(DayRange::new(start, end));
/// assert_eq!(days, ["2020-06-21", "2020-06-22", "2020-06-23"]);
///
/// let interior = days_in_range(DayRange::new(start, end).exclusive());
/// assert_eq!(interior, ["2020-06-22"]);
/// ```
pub fn days_in_range(range: DayRange) -> Vec<String> {
    let days: Vec<String> = dates_in_range(range.start, range.end)
        .into_iter()
        .map(format_day)
        .collect();
    if range.inclusive {
        return days;
    }
    if days.len() > 2 {
        return days[1..days.len() - 1].to_vec();
    }
    Vec::new()
}

/// Formats a date as a `YYYY-MM-DD` day string.
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` day string. Returns `None` for anything else.
pub fn parse_day(day: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day, DAY_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_day_range_yields_that_day() {
        let days = days_in_range(DayRange::new(d(2020, 6, 21), d(2020, 6, 21)));
        assert_eq!(days, ["2020-06-21"]);
    }

    #[test]
    fn inclusive_range_contains_both_endpoints() {
        let days = days_in_range(DayRange::new(d(2020, 6, 21), d(2020, 6, 23)));
        assert_eq!(days, ["2020-06-21", "2020-06-22", "2020-06-23"]);
    }

    #[test]
    fn reversed_range_is_empty() {
        let days = days_in_range(DayRange::new(d(2020, 6, 23), d(2020, 6, 21)));
        assert!(days.is_empty());
    }

    #[test]
    fn exclusive_range_trims_both_endpoints() {
        let days = days_in_range(DayRange::new(d(2020, 6, 21), d(2020, 6, 23)).exclusive());
        assert_eq!(days, ["2020-06-22"]);
    }

    #[test]
    fn exclusive_single_day_is_empty() {
        let days = days_in_range(DayRange::new(d(2020, 6, 21), d(2020, 6, 21)).exclusive());
        assert!(days.is_empty());
    }

    #[test]
    fn exclusive_two_day_range_is_empty() {
        let days = days_in_range(DayRange::new(d(2020, 6, 21), d(2020, 6, 22)).exclusive());
        assert!(days.is_empty());
    }

    #[test]
    fn exclusive_length_is_inclusive_length_minus_two() {
        let start = d(2020, 6, 1);
        for span in 0..10 {
            let end = start + Duration::days(span);
            let inclusive = days_in_range(DayRange::new(start, end));
            let exclusive = days_in_range(DayRange::new(start, end).exclusive());
            if inclusive.len() > 2 {
                assert_eq!(exclusive.len(), inclusive.len() - 2);
            } else {
                assert!(exclusive.is_empty());
            }
        }
    }

    #[test]
    fn range_steps_across_month_boundary() {
        let days = days_in_range(DayRange::new(d(2020, 2, 28), d(2020, 3, 1)));
        assert_eq!(days, ["2020-02-28", "2020-02-29", "2020-03-01"]);
    }

    #[test]
    fn range_steps_across_year_boundary() {
        let days = days_in_range(DayRange::new(d(2019, 12, 31), d(2020, 1, 1)));
        assert_eq!(days, ["2019-12-31", "2020-01-01"]);
    }

    #[test]
    fn parse_day_round_trips_format_day() {
        let date = d(2020, 6, 21);
        assert_eq!(parse_day(&format_day(date)), Some(date));
    }

    #[test]
    fn parse_day_rejects_garbage() {
        assert_eq!(parse_day("not-a-date"), None);
        assert_eq!(parse_day("2020-13-40"), None);
        assert_eq!(parse_day(""), None);
    }
}
