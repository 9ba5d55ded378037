//! Time interval decomposition.

use time::Duration;

use crate::DateTimeOf;

/// Signed time interval between two [`DateTime`]s.
///
/// Decomposes calendar-style: whole [`days()`], plus an hour-of-day and a
/// minute-of-hour component. Components truncate toward zero, so every
/// component of a negative [`Interval`] is negative or zero.
///
/// [`DateTime`]: crate::DateTime
/// [`days()`]: Interval::days
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Interval(Duration);

impl Interval {
    /// Returns the [`Interval`] elapsed from `start` to `end`.
    ///
    /// Negative if `end` is earlier than `start`.
    #[must_use]
    pub fn between<SOf, EOf>(
        start: DateTimeOf<SOf>,
        end: DateTimeOf<EOf>,
    ) -> Self
    where
        SOf: ?Sized,
        EOf: ?Sized,
    {
        Self(
            time::OffsetDateTime::from(end) - time::OffsetDateTime::from(start),
        )
    }

    /// Returns the number of whole days in this [`Interval`].
    #[must_use]
    pub fn days(self) -> i64 {
        self.0.whole_days()
    }

    /// Returns the hour-of-day component of this [`Interval`], in the
    /// `-23..=23` range.
    #[must_use]
    pub fn hours(self) -> i64 {
        self.0.whole_hours() - self.0.whole_days() * 24
    }

    /// Returns the minute-of-hour component of this [`Interval`], in the
    /// `-59..=59` range.
    #[must_use]
    pub fn minutes(self) -> i64 {
        self.0.whole_minutes() - self.0.whole_hours() * 60
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::DateTime;

    use super::Interval;

    fn datetime(s: &str) -> DateTime {
        DateTime::from_rfc3339(s).unwrap()
    }

    #[test]
    fn decomposes_into_components() {
        let start = datetime("2024-02-02T00:00:00Z");
        let end = datetime("2024-02-07T02:10:00Z");

        let interval = Interval::between(start, end);

        assert_eq!(interval.days(), 5);
        assert_eq!(interval.hours(), 2);
        assert_eq!(interval.minutes(), 10);
    }

    #[test]
    fn whole_hours_leave_zero_minutes() {
        let start = datetime("2024-02-02T10:00:00Z");
        let end = start + Duration::from_secs(2 * 60 * 60);

        let interval = Interval::between(start, end);

        assert_eq!(interval.days(), 0);
        assert_eq!(interval.hours(), 2);
        assert_eq!(interval.minutes(), 0);
    }

    #[test]
    fn negative_when_end_precedes_start() {
        let start = datetime("2024-02-02T10:00:00Z");
        let end = start - Duration::from_secs(90 * 60);

        let interval = Interval::between(start, end);

        assert_eq!(interval.days(), 0);
        assert_eq!(interval.hours(), -1);
        assert_eq!(interval.minutes(), -30);
    }
}
