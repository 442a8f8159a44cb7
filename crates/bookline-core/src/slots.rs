//! Candidate slot generation for a calendar day.
//!
//! Slot generation is a pure function of the date and the business-hours
//! configuration: one candidate start time per whole hour from the opening
//! hour (inclusive) to the closing hour (exclusive), anchored at that day's
//! midnight in the system's single reference zone (UTC). Availability is
//! layered on top by the scheduler, which removes slots held by confirmed
//! reservations.

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// Opening hours of the business, on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    /// First bookable hour of the day (inclusive)
    pub open_hour: i8,

    /// Hour the business closes (exclusive; the last slot starts one hour
    /// before this)
    pub close_hour: i8,
}

impl Default for BusinessHours {
    /// The original deployment's hours: 9 AM to 5 PM, eight hourly slots.
    fn default() -> Self {
        Self {
            open_hour: 9,
            close_hour: 17,
        }
    }
}

impl BusinessHours {
    /// Creates a validated business-hours configuration.
    ///
    /// Hours must fall on the 24-hour clock (`open_hour` in `0..=23`,
    /// `close_hour` in `0..=24`). An `open_hour >= close_hour` configuration
    /// is accepted and simply yields no slots.
    pub fn new(open_hour: i8, close_hour: i8) -> Result<Self> {
        if !(0..=23).contains(&open_hour) {
            return Err(SchedulerError::invalid_input("open_hour")
                .with_reason(format!("must be between 0 and 23, got {open_hour}")));
        }
        if !(0..=24).contains(&close_hour) {
            return Err(SchedulerError::invalid_input("close_hour")
                .with_reason(format!("must be between 0 and 24, got {close_hour}")));
        }
        Ok(Self {
            open_hour,
            close_hour,
        })
    }

    /// Whether an absolute start time falls inside these hours.
    ///
    /// The hour is taken in the system's reference zone (UTC); the closing
    /// hour is exclusive, matching slot generation.
    pub fn admits(&self, start_time: &Timestamp) -> bool {
        let hour = start_time.to_zoned(TimeZone::UTC).hour();
        self.open_hour <= hour && hour < self.close_hour
    }

    /// Number of hourly slots these hours produce.
    pub fn slot_count(&self) -> usize {
        if self.open_hour >= self.close_hour {
            0
        } else {
            (self.close_hour - self.open_hour) as usize
        }
    }
}

/// Generates the ordered candidate slot start times for one calendar day.
///
/// Returns exactly `close_hour - open_hour` timestamps, strictly ascending
/// and one hour apart. Inverted or empty hours produce an empty vector
/// rather than an error.
pub fn generate_slots(date: Date, hours: &BusinessHours) -> Vec<Timestamp> {
    let open = hours.open_hour.max(0);
    let close = hours.close_hour.min(24);

    let mut slots = Vec::with_capacity(hours.slot_count());
    for hour in open..close {
        // Hour 0-23 on a valid civil date always maps to a UTC instant.
        let Ok(zoned) = date.at(hour, 0, 0, 0).to_zoned(TimeZone::UTC) else {
            continue;
        };
        slots.push(zoned.timestamp());
    }
    slots
}

/// Bounds of one calendar day as half-open `[midnight, next midnight)` UTC
/// instants, used to scope availability queries.
pub fn day_bounds(date: Date) -> Result<(Timestamp, Timestamp)> {
    let start = date
        .at(0, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .map_err(|e| {
            SchedulerError::invalid_input("date").with_reason(format!("out of range: {e}"))
        })?
        .timestamp();
    let end = date
        .tomorrow()
        .and_then(|d| d.at(0, 0, 0, 0).to_zoned(TimeZone::UTC))
        .map_err(|e| {
            SchedulerError::invalid_input("date").with_reason(format!("out of range: {e}"))
        })?
        .timestamp();
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i16, month: i8, day: i8) -> Date {
        Date::new(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_default_hours_produce_eight_slots() {
        let slots = generate_slots(date(2024, 1, 10), &BusinessHours::default());
        assert_eq!(slots.len(), 8);
    }

    #[test]
    fn test_slots_are_ascending_one_hour_apart() {
        let hours = BusinessHours::new(9, 17).expect("valid hours");
        let slots = generate_slots(date(2024, 1, 10), &hours);

        for pair in slots.windows(2) {
            let gap = pair[1].as_second() - pair[0].as_second();
            assert_eq!(gap, 3600);
        }
        assert_eq!(slots[0].to_string(), "2024-01-10T09:00:00Z");
        assert_eq!(slots[7].to_string(), "2024-01-10T16:00:00Z");
    }

    #[test]
    fn test_slot_count_matches_hour_span() {
        for (open, close) in [(0, 24), (8, 12), (22, 23)] {
            let hours = BusinessHours::new(open, close).expect("valid hours");
            let slots = generate_slots(date(2024, 6, 1), &hours);
            assert_eq!(slots.len(), (close - open) as usize);
        }
    }

    #[test]
    fn test_inverted_hours_yield_empty() {
        let hours = BusinessHours {
            open_hour: 17,
            close_hour: 9,
        };
        assert!(generate_slots(date(2024, 1, 10), &hours).is_empty());
        assert_eq!(hours.slot_count(), 0);
    }

    #[test]
    fn test_equal_hours_yield_empty() {
        let hours = BusinessHours {
            open_hour: 9,
            close_hour: 9,
        };
        assert!(generate_slots(date(2024, 1, 10), &hours).is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let hours = BusinessHours::default();
        let first = generate_slots(date(2024, 3, 15), &hours);
        let second = generate_slots(date(2024, 3, 15), &hours);
        assert_eq!(first, second);
    }

    #[test]
    fn test_admits_open_inclusive_close_exclusive() {
        let hours = BusinessHours::default();
        let opening: Timestamp = "2024-01-10T09:00:00Z".parse().expect("valid timestamp");
        let closing: Timestamp = "2024-01-10T17:00:00Z".parse().expect("valid timestamp");
        let night: Timestamp = "2024-01-10T03:00:00Z".parse().expect("valid timestamp");

        assert!(hours.admits(&opening));
        assert!(!hours.admits(&closing));
        assert!(!hours.admits(&night));
    }

    #[test]
    fn test_new_rejects_out_of_range_hours() {
        assert!(BusinessHours::new(-1, 17).is_err());
        assert!(BusinessHours::new(9, 25).is_err());
        assert!(BusinessHours::new(24, 24).is_err());
    }

    #[test]
    fn test_day_bounds_cover_exactly_one_day() {
        let (start, end) = day_bounds(date(2024, 1, 10)).expect("valid bounds");
        assert_eq!(start.to_string(), "2024-01-10T00:00:00Z");
        assert_eq!(end.to_string(), "2024-01-11T00:00:00Z");
    }
}
