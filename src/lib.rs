//! Pure date-range helpers for rental-booking calendar UIs.
//!
//! Day strings are `YYYY-MM-DD` throughout. All functions are synchronous,
//! side-effect-free transformations over their inputs.

pub mod dates;
pub mod marked;
pub mod rentals;

pub use dates::{DayRange, days_in_range};
pub use marked::{
    DayMarking, MarkedDates, SelectedStay, find_starting_and_ending_day,
    has_blocked_dates_between,
};
pub use rentals::{Rental, blocked_day_markings, rental_day_strings};
