//! Structured weather data extraction from the tenki.jp public forecast site.
//!
//! This library recovers the site's location hierarchy (regions,
//! prefectures, subprefectures, cities) and per-city forecasts (two-day
//! summaries and 3-hour interval tables) by walking the site's HTML.
//!
//! The scraped markup changes over time, so every operation degrades
//! instead of failing: location listings return `None` when a page's
//! expected structure is gone, and forecast extractors fall back to
//! well-defined empty shapes. Callers never see an error; failures are
//! logged through `tracing`.

pub mod error;
pub mod fetch;
pub mod forecast;
pub mod location;
pub mod models;
pub mod window;

mod dom;
mod site;

// Re-export core types and operations for public API
pub use error::ScrapeError;
pub use fetch::fetch_document;
pub use forecast::{fetch_forecast_summary, fetch_interval_forecasts, fetch_next_24h_forecasts};
pub use location::{list_prefectures, list_regions, list_subprefectures_and_cities};
pub use models::{
    City, CityId, ForecastDay, ForecastSummary, IntervalForecast, IntervalForecasts, LocationIds,
    Prefecture, PrefectureId, Region, RegionId, SubprefectureCities, SubprefectureId,
};
pub use window::select_next_24h;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
