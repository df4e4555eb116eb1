//! Time/date range resolution for reports and history views.
//!
//! Two mutually exclusive modes: a static range the user supplied directly,
//! or a named relative bucket ("Today", "This Week", ...) resolved against an
//! anchor instant at evaluation time. Resolution is pure given the injected
//! anchor; [`resolve_date_range_now`] is the wall-clock convenience wrapper.
//! All arithmetic is on naive wall-clock datetimes in the caller's zone.

use chrono::{
    DateTime, Datelike, Days, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc,
    Weekday,
};
use serde::{Deserialize, Serialize};

/// An inclusive datetime range, day-granular at both ends
/// (`00:00:00.000` – `23:59:59.999`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant of the range
    pub start: NaiveDateTime,
    /// Last instant of the range
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Builds the inclusive range covering whole days `first ..= last`.
    #[must_use]
    pub fn covering_days(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: day_start(first),
            end: day_end(last),
        }
    }
}

/// Which of the two range sources is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFilterMode {
    /// The user supplied an explicit start/end pair
    StaticRange,
    /// A named relative bucket is resolved at evaluation time
    SingleBucket,
}

/// Named relative time buckets offered by the range picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterBucket {
    /// The anchor's calendar day
    Today,
    /// The day before the anchor
    Yesterday,
    /// Monday through Sunday of the anchor's week
    ThisWeek,
    /// The week before the anchor's week
    LastWeek,
    /// First through last day of the anchor's month
    ThisMonth,
    /// The month before the anchor's month
    LastMonth,
    /// January 1st through December 31st of the anchor's year
    ThisYear,
    /// The year before the anchor's year
    LastYear,
    /// Unix epoch through the anchor's day
    AllTime,
}

impl FilterBucket {
    /// Command-line / query key for this bucket.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "this-week",
            Self::LastWeek => "last-week",
            Self::ThisMonth => "this-month",
            Self::LastMonth => "last-month",
            Self::ThisYear => "this-year",
            Self::LastYear => "last-year",
            Self::AllTime => "all-time",
        }
    }

    /// Reverse of [`FilterBucket::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        [
            Self::Today,
            Self::Yesterday,
            Self::ThisWeek,
            Self::LastWeek,
            Self::ThisMonth,
            Self::LastMonth,
            Self::ThisYear,
            Self::LastYear,
            Self::AllTime,
        ]
        .into_iter()
        .find(|bucket| bucket.key() == key)
    }
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn day_end(date: NaiveDate) -> NaiveDateTime {
    day_start(date) + Duration::days(1) - Duration::milliseconds(1)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn year_start(date: NaiveDate) -> NaiveDate {
    month_start(date) - Months::new(date.month0())
}

/// Resolves a relative bucket against the anchor instant.
#[must_use]
pub fn resolve_bucket(bucket: FilterBucket, now: NaiveDateTime) -> DateRange {
    let today = now.date();
    match bucket {
        FilterBucket::Today => DateRange::covering_days(today, today),
        FilterBucket::Yesterday => {
            let yesterday = today - Days::new(1);
            DateRange::covering_days(yesterday, yesterday)
        }
        FilterBucket::ThisWeek => {
            let week = today.week(Weekday::Mon);
            DateRange::covering_days(week.first_day(), week.last_day())
        }
        FilterBucket::LastWeek => {
            let week = (today - Days::new(7)).week(Weekday::Mon);
            DateRange::covering_days(week.first_day(), week.last_day())
        }
        FilterBucket::ThisMonth => {
            let first = month_start(today);
            DateRange::covering_days(first, first + Months::new(1) - Days::new(1))
        }
        FilterBucket::LastMonth => {
            let first = month_start(today) - Months::new(1);
            DateRange::covering_days(first, first + Months::new(1) - Days::new(1))
        }
        FilterBucket::ThisYear => {
            let first = year_start(today);
            DateRange::covering_days(first, first + Months::new(12) - Days::new(1))
        }
        FilterBucket::LastYear => {
            let first = year_start(today) - Months::new(12);
            DateRange::covering_days(first, first + Months::new(12) - Days::new(1))
        }
        FilterBucket::AllTime => {
            DateRange::covering_days(DateTime::<Utc>::UNIX_EPOCH.naive_utc().date(), today)
        }
    }
}

/// Resolves the active date range from the picker state.
///
/// In [`TimeFilterMode::StaticRange`] the user-supplied pair is returned
/// unchanged; in [`TimeFilterMode::SingleBucket`] the bucket is resolved
/// against `now`. Any change to the mode, the bucket, or the static pair
/// must trigger a re-fetch in the caller.
#[must_use]
pub fn resolve_date_range(
    mode: TimeFilterMode,
    bucket: FilterBucket,
    static_range: &DateRange,
    now: NaiveDateTime,
) -> DateRange {
    match mode {
        TimeFilterMode::StaticRange => static_range.clone(),
        TimeFilterMode::SingleBucket => resolve_bucket(bucket, now),
    }
}

/// [`resolve_date_range`] anchored at the local wall clock.
#[must_use]
pub fn resolve_date_range_now(
    mode: TimeFilterMode,
    bucket: FilterBucket,
    static_range: &DateRange,
) -> DateRange {
    resolve_date_range(mode, bucket, static_range, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_spans_exactly_the_anchor_day() {
        let range = resolve_bucket(FilterBucket::Today, anchor(2024, 1, 5, 13, 45));
        assert_eq!(range.start, date(2024, 1, 5).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(
            range.end,
            date(2024, 1, 5).and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
    }

    #[test]
    fn test_yesterday_crosses_month_boundary() {
        let range = resolve_bucket(FilterBucket::Yesterday, anchor(2024, 3, 1, 8, 0));
        // 2024 is a leap year
        assert_eq!(range.start.date(), date(2024, 2, 29));
        assert_eq!(range.end.date(), date(2024, 2, 29));
    }

    #[test]
    fn test_this_week_starts_monday() {
        // 2024-01-05 is a Friday
        let range = resolve_bucket(FilterBucket::ThisWeek, anchor(2024, 1, 5, 13, 45));
        assert_eq!(range.start.date(), date(2024, 1, 1));
        assert_eq!(range.end.date(), date(2024, 1, 7));
    }

    #[test]
    fn test_last_week_is_the_preceding_monday_to_sunday() {
        let range = resolve_bucket(FilterBucket::LastWeek, anchor(2024, 1, 10, 0, 0));
        assert_eq!(range.start.date(), date(2024, 1, 1));
        assert_eq!(range.end.date(), date(2024, 1, 7));
    }

    #[test]
    fn test_this_month_covers_leap_february() {
        let range = resolve_bucket(FilterBucket::ThisMonth, anchor(2024, 2, 10, 12, 0));
        assert_eq!(range.start.date(), date(2024, 2, 1));
        assert_eq!(range.end.date(), date(2024, 2, 29));
    }

    #[test]
    fn test_last_month_across_january() {
        let range = resolve_bucket(FilterBucket::LastMonth, anchor(2024, 1, 15, 12, 0));
        assert_eq!(range.start.date(), date(2023, 12, 1));
        assert_eq!(range.end.date(), date(2023, 12, 31));
    }

    #[test]
    fn test_this_year_and_last_year() {
        let this_year = resolve_bucket(FilterBucket::ThisYear, anchor(2024, 6, 15, 12, 0));
        assert_eq!(this_year.start.date(), date(2024, 1, 1));
        assert_eq!(this_year.end.date(), date(2024, 12, 31));

        let last_year = resolve_bucket(FilterBucket::LastYear, anchor(2024, 6, 15, 12, 0));
        assert_eq!(last_year.start.date(), date(2023, 1, 1));
        assert_eq!(last_year.end.date(), date(2023, 12, 31));
    }

    #[test]
    fn test_all_time_starts_at_the_epoch() {
        let range = resolve_bucket(FilterBucket::AllTime, anchor(2024, 1, 5, 13, 45));
        assert_eq!(range.start.date(), date(1970, 1, 1));
        assert_eq!(range.end.date(), date(2024, 1, 5));
    }

    #[test]
    fn test_static_mode_returns_the_pair_unchanged() {
        let supplied = DateRange::covering_days(date(2023, 11, 1), date(2023, 11, 30));
        let resolved = resolve_date_range(
            TimeFilterMode::StaticRange,
            FilterBucket::Today,
            &supplied,
            anchor(2024, 1, 5, 13, 45),
        );
        assert_eq!(resolved, supplied);
    }

    #[test]
    fn test_single_mode_ignores_the_static_pair() {
        let supplied = DateRange::covering_days(date(2023, 11, 1), date(2023, 11, 30));
        let resolved = resolve_date_range(
            TimeFilterMode::SingleBucket,
            FilterBucket::Today,
            &supplied,
            anchor(2024, 1, 5, 13, 45),
        );
        assert_eq!(resolved.start.date(), date(2024, 1, 5));
    }

    #[test]
    fn test_bucket_keys_round_trip() {
        for bucket in [
            FilterBucket::Today,
            FilterBucket::ThisWeek,
            FilterBucket::LastMonth,
            FilterBucket::AllTime,
        ] {
            assert_eq!(FilterBucket::from_key(bucket.key()), Some(bucket));
        }
        assert_eq!(FilterBucket::from_key("fortnight"), None);
    }
}
