//! Per-city forecast extraction: the two-day summary on the detail page and
//! the 3-hour interval tables on its `3hours.html` view.
//!
//! Unlike the location listings, these operations always return a value:
//! whatever cannot be read degrades to the type's canonical empty shape.

use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::dom;
use crate::error::ScrapeError;
use crate::fetch::fetch_document;
use crate::models::{
    ForecastDay, ForecastSummary, IntervalForecast, IntervalForecasts, LocationIds,
    placeholder_day,
};
use crate::site;
use crate::window;

/// Fetch the two-day forecast summary of a city.
///
/// On any fetch or markup failure the affected fields are empty strings;
/// a malformed header also empties both day entries.
pub fn fetch_forecast_summary(ids: &LocationIds) -> ForecastSummary {
    match fetch_document(&site::city_url(ids)) {
        Some(document) => parse_forecast_summary(&document),
        None => ForecastSummary::empty(),
    }
}

/// Fetch the 3-hour interval forecasts of a city for today and tomorrow.
///
/// A day whose table cannot be read becomes the canonical placeholder day;
/// the two days degrade independently.
pub fn fetch_interval_forecasts(ids: &LocationIds) -> IntervalForecasts {
    match fetch_document(&site::city_3h_url(ids)) {
        Some(document) => parse_interval_forecasts(&document),
        None => IntervalForecasts::placeholder(),
    }
}

/// Fetch the interval forecasts and select the rolling 24-hour window
/// starting at the bucket containing `reference_time`.
pub fn fetch_next_24h_forecasts(
    ids: &LocationIds,
    reference_time: NaiveDateTime,
) -> Vec<IntervalForecast> {
    let intervals = fetch_interval_forecasts(ids);
    window::select_next_24h(&intervals, reference_time)
}

/// Extract the two-day summary from a parsed detail page
pub fn parse_forecast_summary(document: &Html) -> ForecastSummary {
    let Some((city_name, updated_at)) = parse_header(document) else {
        warn!("{}", ScrapeError::MissingMarkup("forecast page header"));
        return ForecastSummary::empty();
    };

    ForecastSummary {
        city_name,
        updated_at,
        today: parse_day_section(document, &site::TODAY_SECTION),
        tomorrow: parse_day_section(document, &site::TOMORROW_SECTION),
    }
}

/// City name and publication timestamp from the page header.
///
/// The timestamp element is embedded in the heading, so the city name is
/// the heading text with that subtree skipped; both carry label suffixes
/// that are stripped off.
fn parse_header(document: &Html) -> Option<(String, String)> {
    let section = document.select(&site::HEADER_SECTION).next()?;
    let heading = section.select(&site::CITY_HEADING).next()?;
    let time = heading.select(&site::UPDATED_AT).next()?;

    let updated_at = dom::trimmed_text(time)
        .trim_end_matches(site::UPDATED_AT_SUFFIX)
        .to_string();
    let city_name = dom::text_without(heading, time)
        .trim_end_matches(site::CITY_NAME_SUFFIX)
        .to_string();
    Some((city_name, updated_at))
}

fn parse_day_section(document: &Html, section_selector: &Selector) -> ForecastDay {
    document
        .select(section_selector)
        .next()
        .and_then(parse_forecast_day)
        .unwrap_or_else(ForecastDay::empty)
}

/// One day section: date token, condition text, and the composite
/// temperature strings. Any missing piece empties the whole day.
fn parse_forecast_day(section: ElementRef<'_>) -> Option<ForecastDay> {
    let title = dom::trimmed_text(section.select(&site::DAY_TITLE).next()?);
    let date = site::DATE_TOKEN.find(&title)?.as_str().to_string();
    let weather = dom::trimmed_text(section.select(&site::WEATHER_TELOP).next()?);
    let temp_high = composite_temperature(section, &site::HIGH_TEMP, &site::HIGH_TEMP_DIFF)?;
    let temp_low = composite_temperature(section, &site::LOW_TEMP, &site::LOW_TEMP_DIFF)?;

    Some(ForecastDay {
        date,
        weather,
        temp_high,
        temp_low,
    })
}

/// Absolute value and delta are separate elements on the page; the output
/// keeps both, joined with a single space.
fn composite_temperature(
    section: ElementRef<'_>,
    value_selector: &Selector,
    diff_selector: &Selector,
) -> Option<String> {
    let value = dom::trimmed_text(section.select(value_selector).next()?);
    let diff = dom::trimmed_text(section.select(diff_selector).next()?);
    Some(format!("{value} {diff}"))
}

/// Extract today's and tomorrow's interval forecasts from a parsed
/// `3hours.html` page. Each day's table is looked up by its own id, so a
/// missing table only collapses that day to placeholders.
pub fn parse_interval_forecasts(document: &Html) -> IntervalForecasts {
    IntervalForecasts {
        today: parse_interval_day(document, &site::TODAY_3H_TABLE, "today 3-hour table"),
        tomorrow: parse_interval_day(document, &site::TOMORROW_3H_TABLE, "tomorrow 3-hour table"),
    }
}

fn parse_interval_day(
    document: &Html,
    table_selector: &Selector,
    what: &'static str,
) -> Vec<IntervalForecast> {
    match interval_entries(document, table_selector) {
        Some(entries) => entries,
        None => {
            warn!("{}", ScrapeError::MissingMarkup(what));
            placeholder_day()
        }
    }
}

/// Zip the three aligned rows of an interval table position-wise
fn interval_entries(document: &Html, table_selector: &Selector) -> Option<Vec<IntervalForecast>> {
    let table = document.select(table_selector).next()?;
    let hours = row_cells(table, &site::HOUR_ROW)?;
    let weathers = row_cells(table, &site::WEATHER_ROW)?;
    let temperatures = row_cells(table, &site::TEMPERATURE_ROW)?;

    let entries = hours
        .into_iter()
        .zip(weathers)
        .zip(temperatures)
        .map(|((hour, weather), temperature)| IntervalForecast {
            hour,
            weather,
            temperature,
        })
        .collect();
    Some(entries)
}

fn row_cells(table: ElementRef<'_>, row_selector: &Selector) -> Option<Vec<String>> {
    let row = table.select(row_selector).next()?;
    Some(row.select(&site::CELL).map(dom::trimmed_text).collect())
}
