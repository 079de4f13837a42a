//! Rolling 24-hour window selection over 3-hour interval forecasts.

use chrono::{NaiveDateTime, Timelike};

use crate::models::forecast::BUCKET_HOURS;
use crate::models::{IntervalForecast, IntervalForecasts};

/// Select the 8 buckets covering the 24 hours from the most recently begun
/// 3-hour bucket of `reference_time`.
///
/// The bucket index is `hour / 3`, in `0..=7`; the result is today's
/// entries from that index onward, wrapping into the same number of
/// tomorrow's early entries. The reference time is an explicit parameter,
/// so callers control the clock and tests stay deterministic.
#[must_use]
pub fn select_next_24h(
    intervals: &IntervalForecasts,
    reference_time: NaiveDateTime,
) -> Vec<IntervalForecast> {
    let bucket = (reference_time.hour() / BUCKET_HOURS) as usize;
    intervals
        .today
        .iter()
        .skip(bucket)
        .chain(intervals.tomorrow.iter().take(bucket))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::placeholder_day;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn labeled_day(label: &str) -> Vec<IntervalForecast> {
        placeholder_day()
            .into_iter()
            .map(|mut entry| {
                entry.weather = label.to_string();
                entry
            })
            .collect()
    }

    fn sample_intervals() -> IntervalForecasts {
        IntervalForecasts {
            today: labeled_day("today"),
            tomorrow: labeled_day("tomorrow"),
        }
    }

    fn at_hour(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 8, 20)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap()
    }

    #[rstest]
    #[case(0, 8, 0)]
    #[case(2, 8, 0)]
    #[case(3, 7, 1)]
    #[case(10, 5, 3)]
    #[case(12, 4, 4)]
    #[case(23, 1, 7)]
    fn each_day_contributes_by_bucket_index(
        #[case] hour: u32,
        #[case] from_today: usize,
        #[case] from_tomorrow: usize,
    ) {
        let window = select_next_24h(&sample_intervals(), at_hour(hour));

        assert_eq!(window.len(), 8);
        assert_eq!(window.iter().filter(|f| f.weather == "today").count(), from_today);
        assert_eq!(
            window.iter().filter(|f| f.weather == "tomorrow").count(),
            from_tomorrow
        );
    }

    #[test]
    fn window_is_always_eight_entries() {
        for hour in 0..24 {
            assert_eq!(select_next_24h(&sample_intervals(), at_hour(hour)).len(), 8);
        }
    }

    #[test]
    fn mid_morning_window_starts_at_the_current_bucket() {
        let window = select_next_24h(&sample_intervals(), at_hour(10));

        let hours: Vec<&str> = window.iter().map(|f| f.hour.as_str()).collect();
        assert_eq!(hours, ["12", "15", "18", "21", "24", "03", "06", "09"]);
        assert_eq!(window[4].weather, "today");
        assert_eq!(window[5].weather, "tomorrow");
    }
}
