//! Data models for the scraped site, organized by concern:
//! - Location: the region / prefecture / subprefecture / city hierarchy
//! - Forecast: two-day summaries and 3-hour interval readings

pub mod forecast;
pub mod location;

// Re-export all public types for convenient access
pub use forecast::{
    ForecastDay, ForecastSummary, IntervalForecast, IntervalForecasts, placeholder_day,
};
pub use location::{
    City, CityId, LocationIds, Prefecture, PrefectureId, Region, RegionId, SubprefectureCities,
    SubprefectureId,
};
