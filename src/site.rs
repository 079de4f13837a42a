//! Every site-specific assumption in one place: page URLs, CSS selectors,
//! and the text patterns the extractors match against.
//!
//! The site's markup changes over time; when it does, this is the only
//! module that should need touching.

use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

use crate::models::{LocationIds, PrefectureId, RegionId};

pub(crate) const BASE_URL: &str = "https://tenki.jp";

/// Listing page of a region's prefectures
pub(crate) fn region_url(region_id: &RegionId) -> String {
    format!("{BASE_URL}/forecast/{region_id}/")
}

/// Listing page of a prefecture's subprefectures and cities
pub(crate) fn prefecture_url(region_id: &RegionId, prefecture_id: &PrefectureId) -> String {
    format!("{BASE_URL}/forecast/{region_id}/{prefecture_id}/")
}

/// Detail page carrying the two-day forecast summary of a city
pub(crate) fn city_url(ids: &LocationIds) -> String {
    format!(
        "{BASE_URL}/forecast/{}/{}/{}/{}/",
        ids.region_id, ids.prefecture_id, ids.subprefecture_id, ids.city_id
    )
}

/// 3-hour interval table view of a city's detail page
pub(crate) fn city_3h_url(ids: &LocationIds) -> String {
    format!("{}3hours.html", city_url(ids))
}

// Location listing pages
pub(crate) static LIST_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.common-list-entries").unwrap());
pub(crate) static HEADER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").unwrap());
pub(crate) static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
pub(crate) static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());
pub(crate) static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
pub(crate) static PREF_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.pref-link").unwrap());
pub(crate) static SUBPREF_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h4.forecast-point-city-name").unwrap());

// City detail page, header and day sections
pub(crate) static HEADER_SECTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.section-wrap").unwrap());
pub(crate) static CITY_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").unwrap());
pub(crate) static UPDATED_AT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("time.date-time").unwrap());
pub(crate) static TODAY_SECTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.today-weather").unwrap());
pub(crate) static TOMORROW_SECTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.tomorrow-weather").unwrap());
pub(crate) static DAY_TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
pub(crate) static WEATHER_TELOP: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.weather-telop").unwrap());
pub(crate) static HIGH_TEMP: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("dd.high-temp.temp").unwrap());
pub(crate) static HIGH_TEMP_DIFF: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("dd.high-temp.tempdiff").unwrap());
pub(crate) static LOW_TEMP: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("dd.low-temp.temp").unwrap());
pub(crate) static LOW_TEMP_DIFF: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("dd.low-temp.tempdiff").unwrap());

// 3-hour interval page
pub(crate) static TODAY_3H_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table#forecast-point-3h-today").unwrap());
pub(crate) static TOMORROW_3H_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table#forecast-point-3h-tomorrow").unwrap());
pub(crate) static HOUR_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr.hour").unwrap());
pub(crate) static WEATHER_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr.weather").unwrap());
pub(crate) static TEMPERATURE_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr.temperature").unwrap());
pub(crate) static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Localized date token as printed in the day section titles, e.g. `08月20日(木)`
pub(crate) static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+月\d+日\([月火水木金土日]\)").unwrap());

/// Label suffix trailing the publication timestamp in the page header
pub(crate) const UPDATED_AT_SUFFIX: &str = "発表";

/// Suffix trailing the city name in the page header
pub(crate) const CITY_NAME_SUFFIX: &str = "の天気";
