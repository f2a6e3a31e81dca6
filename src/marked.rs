//! Marked-dates map types and queries, shaped after the `markedDates` prop
//! of react-native-calendars style widgets.

use crate::dates::parse_day;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A calendar-marking map keyed by `YYYY-MM-DD` day strings.
///
/// `IndexMap` keeps iteration in insertion order, so the "last entry wins"
/// overwrite rule of [`find_starting_and_ending_day`] is deterministic and
/// the serialized widget prop keeps a stable key order.
pub type MarkedDates = IndexMap<String, DayMarking>;

/// Styling and state for a single marked day.
///
/// The known widget fields are explicit optionals; anything else the caller
/// attaches (colors, custom styles) lands in the flattened `extra` map, so
/// the record round-trips through JSON without losing keys. Serialized field
/// names are camelCase to match the widget prop shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMarking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_touch_event: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl DayMarking {
    /// The fixed marking for a day inside an existing rental:
    /// `{disabled: true, disableTouchEvent: true}`.
    pub fn blocked() -> Self {
        Self {
            disabled: Some(true),
            disable_touch_event: Some(true),
            ..Self::default()
        }
    }

    /// Marks the first day of a selected stay.
    pub fn starting(color: &str) -> Self {
        Self {
            starting_day: Some(true),
            selected: Some(true),
            color: Some(color.to_string()),
            ..Self::default()
        }
    }

    /// Marks the last day of a selected stay.
    pub fn ending(color: &str) -> Self {
        Self {
            ending_day: Some(true),
            selected: Some(true),
            color: Some(color.to_string()),
            ..Self::default()
        }
    }
}

/// The starting/ending day keys extracted from a marked-dates map.
///
/// A field stays `None` when no entry carries the corresponding marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedStay {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Finds the day keys whose markings carry `startingDay` / `endingDay`.
///
/// The map is scanned in iteration order and the accumulator is overwritten
/// on every carrier, so when several entries carry the same marker the last
/// one encountered wins. Marker presence is what counts, not its boolean
/// value: `startingDay: false` still selects the day.
pub fn find_starting_and_ending_day(marked: &MarkedDates) -> SelectedStay {
    let mut stay = SelectedStay::default();
    for (day, marking) in marked {
        if marking.starting_day.is_some() {
            stay.start = Some(day.clone());
        }
        if marking.ending_day.is_some() {
            stay.end = Some(day.clone());
        }
    }
    stay
}

/// Reports whether any key of `blocked_days` falls strictly between `start`
/// and `end` (open interval, both endpoints excluded).
///
/// Only the keys matter, so the map's value type is free. Keys that do not
/// parse as `YYYY-MM-DD` never compare inside the interval and are skipped.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use indexmap::IndexMap;
/// # use rental_dates::marked::has_blocked_dates_between;
/// let mut blocked: IndexMap<String, ()> = IndexMap::new();
/// blocked.insert("2020-06-22".to_string(), ());
///
/// let start = NaiveDate::from_ymd_opt(2020, 6, 21).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 6, 23).unwrap();
/// assert!(has_blocked_dates_between(&blocked, start, end));
/// ```
pub fn has_blocked_dates_between<V>(
    blocked_days: &IndexMap<String, V>,
    start: NaiveDate,
    end: NaiveDate,
) -> bool {
    blocked_days
        .keys()
        .filter_map(|day| parse_day(day))
        .any(|day| start < day && day < end)
}
