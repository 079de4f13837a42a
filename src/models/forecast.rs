//! Forecast models: two-day summaries and 3-hour interval readings

use serde::{Deserialize, Serialize};

/// Width of one interval-forecast bucket in hours
pub const BUCKET_HOURS: u32 = 3;

/// One day's entry in the two-day forecast summary.
///
/// Every field keeps the site's own text. Temperatures are the composite
/// "value [delta]" strings shown on the page; the delta is not decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Site-native date token, e.g. `08月20日(木)`
    pub date: String,
    /// Free-text condition, e.g. `晴`
    pub weather: String,
    /// High temperature with its day-over-day delta, e.g. `35℃ [+1]`
    pub temp_high: String,
    /// Low temperature with its day-over-day delta
    pub temp_low: String,
}

impl ForecastDay {
    /// Canonical empty shape used when a day's section is missing or malformed
    #[must_use]
    pub fn empty() -> Self {
        Self {
            date: String::new(),
            weather: String::new(),
            temp_high: String::new(),
            temp_low: String::new(),
        }
    }
}

/// Two-day forecast summary for one city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub city_name: String,
    /// Publication timestamp as shown in the page header, label suffix stripped
    pub updated_at: String,
    pub today: ForecastDay,
    pub tomorrow: ForecastDay,
}

impl ForecastSummary {
    /// Canonical empty shape used when the detail page cannot be read
    #[must_use]
    pub fn empty() -> Self {
        Self {
            city_name: String::new(),
            updated_at: String::new(),
            today: ForecastDay::empty(),
            tomorrow: ForecastDay::empty(),
        }
    }
}

/// Weather and temperature reading for one 3-hour bucket of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalForecast {
    /// Zero-padded end-of-bucket hour label, "03" through "24"
    pub hour: String,
    pub weather: String,
    pub temperature: String,
}

/// The 3-hour interval forecasts of today and tomorrow, 8 buckets each
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalForecasts {
    pub today: Vec<IntervalForecast>,
    pub tomorrow: Vec<IntervalForecast>,
}

impl IntervalForecasts {
    /// Both days replaced by placeholder buckets
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            today: placeholder_day(),
            tomorrow: placeholder_day(),
        }
    }
}

/// The canonical placeholder day: hour labels "03" through "24" with empty
/// weather and temperature, regardless of what the real table would have held.
#[must_use]
pub fn placeholder_day() -> Vec<IntervalForecast> {
    (1..=24 / BUCKET_HOURS)
        .map(|bucket| IntervalForecast {
            hour: format!("{:02}", bucket * BUCKET_HOURS),
            weather: String::new(),
            temperature: String::new(),
        })
        .collect()
}
