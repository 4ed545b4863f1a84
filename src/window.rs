//! Digest-day computation in a fixed IANA time zone.
//!
//! The pipeline and the front end both answer the same question
//! independently: "what calendar date was yesterday, in the digest's time
//! zone?" Everything here is a pure function of an explicit instant and the
//! configured zone, so both sides agree without sharing state and nothing
//! depends on the host machine's local time.
//!
//! Intervals are resolved through the zone's offset rules
//! ([`TimeZone::from_local_datetime`]), not by shifting the UTC clock by a
//! fixed number of hours. On a day with a DST transition the window is
//! simply shorter or longer than 24 hours and membership stays an instant
//! comparison, so items near the transition are still classified correctly.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Zone the digest day is computed in unless overridden.
pub const DEFAULT_TIME_ZONE: &str = "America/Sao_Paulo";

/// The inclusive instant interval covering one zone-local calendar day,
/// `[00:00:00.000, 23:59:59.999]` in local wall-clock terms.
#[derive(Debug, Clone, Copy)]
pub struct DayWindow {
    /// The calendar date this window covers.
    pub date: NaiveDate,
    /// First instant of the local day.
    pub start: DateTime<Utc>,
    /// Last instant of the local day, millisecond precision.
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Inclusive interval membership. Both bounds count as inside.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Calendar-day resolution in a fixed named time zone.
#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    tz: Tz,
}

impl TimeWindow {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The zone-local calendar date of an instant.
    pub fn calendar_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// The full-day interval of one zone-local calendar date.
    pub fn day_window(&self, date: NaiveDate) -> DayWindow {
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();
        DayWindow {
            date,
            start: self.resolve_local(date, NaiveTime::MIN),
            end: self.resolve_local(date, end_of_day),
        }
    }

    /// The interval of the day before `now`'s zone-local date.
    pub fn yesterday_window(&self, now: DateTime<Utc>) -> DayWindow {
        self.day_window(self.calendar_date(now) - Duration::days(1))
    }

    /// Map a local wall time to a UTC instant using the zone's offset rules.
    ///
    /// Ambiguous wall times (DST fall-back) resolve to the earliest instant.
    /// Nonexistent wall times (spring-forward gap) probe forward in minute
    /// steps until a representable wall time is found.
    fn resolve_local(&self, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        let mut local = date.and_time(time);
        loop {
            match self.tz.from_local_datetime(&local) {
                LocalResult::Single(instant) => return instant.with_timezone(&Utc),
                LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
                LocalResult::None => local += Duration::minutes(1),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sao_paulo() -> TimeWindow {
        TimeWindow::new(DEFAULT_TIME_ZONE.parse().unwrap())
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_calendar_date_across_local_midnight() {
        let tw = sao_paulo();
        // Sao Paulo is UTC-3: local midnight falls at 03:00 UTC.
        let before = tw.calendar_date(utc(2025, 3, 10, 2, 59, 0));
        let after = tw.calendar_date(utc(2025, 3, 10, 3, 1, 0));

        assert_eq!(before, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(after, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_yesterday_window_bounds() {
        let tw = sao_paulo();
        let window = tw.yesterday_window(utc(2025, 3, 10, 15, 0, 0));

        assert_eq!(window.date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(window.start, utc(2025, 3, 9, 3, 0, 0));
        assert_eq!(
            window.end,
            utc(2025, 3, 10, 2, 59, 59) + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_window_membership_is_inclusive_at_both_bounds() {
        let tw = sao_paulo();
        let window = tw.yesterday_window(utc(2025, 3, 10, 15, 0, 0));

        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(!window.contains(window.start - Duration::milliseconds(1)));
        assert!(!window.contains(window.end + Duration::milliseconds(1)));
    }

    #[test]
    fn test_spring_forward_gap_shortens_the_day() {
        // Brazil's 2018 DST began on Nov 4: local midnight jumped straight
        // to 01:00, so that day had no 00:00 wall time and lasted 23 hours.
        let tw = sao_paulo();
        let window = tw.day_window(NaiveDate::from_ymd_opt(2018, 11, 4).unwrap());

        // 01:00 at UTC-2 is the first representable instant of the day.
        assert_eq!(window.start, utc(2018, 11, 4, 3, 0, 0));
        assert_eq!(
            window.end,
            utc(2018, 11, 5, 1, 59, 59) + Duration::milliseconds(999)
        );
        // Membership still works on the shortened interval.
        assert!(window.contains(utc(2018, 11, 4, 12, 0, 0)));
        assert!(!window.contains(utc(2018, 11, 5, 2, 0, 0)));
    }

    #[test]
    fn test_fall_back_overlap_resolves_to_earliest_instant() {
        // Brazil's 2018 DST ended on Feb 17 2019: midnight fell back to
        // 23:00, so Feb 16's final hour happened twice. Bounds resolve to
        // the first pass through the repeated hour.
        let tw = sao_paulo();
        let window = tw.day_window(NaiveDate::from_ymd_opt(2019, 2, 16).unwrap());

        // Still on DST (UTC-2) at local midnight.
        assert_eq!(window.start, utc(2019, 2, 16, 2, 0, 0));
        assert_eq!(
            window.end,
            utc(2019, 2, 17, 1, 59, 59) + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_day_window_in_utc_zone() {
        let tw = TimeWindow::new("UTC".parse().unwrap());
        let window = tw.day_window(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());

        assert_eq!(window.start, utc(2025, 1, 15, 0, 0, 0));
        assert_eq!(
            window.end,
            utc(2025, 1, 15, 23, 59, 59) + Duration::milliseconds(999)
        );
    }
}
