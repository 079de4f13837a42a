//! Location hierarchy extraction: regions, prefectures, and the
//! subprefecture/city groups of a prefecture page.
//!
//! Each operation comes in two layers: a `list_*` wrapper that fetches the
//! live page, and a pure `parse_*` function over an already-parsed document.
//! A structural mismatch anywhere in a page yields `None` for the whole
//! call, never a partial collection, so "source schema changed" stays
//! distinguishable from "zero entries found".

use std::collections::BTreeMap;

use scraper::Html;
use tracing::warn;

use crate::dom;
use crate::error::ScrapeError;
use crate::fetch::fetch_document;
use crate::models::{
    City, Prefecture, PrefectureId, Region, RegionId, SubprefectureCities, SubprefectureId,
};
use crate::site;

/// List the top-level regions from the site's root page
pub fn list_regions() -> Option<Vec<Region>> {
    let document = fetch_document(site::BASE_URL)?;
    parse_regions(&document)
}

/// List the prefectures of a region
pub fn list_prefectures(region_id: &RegionId) -> Option<Vec<Prefecture>> {
    let document = fetch_document(&site::region_url(region_id))?;
    parse_prefectures(&document)
}

/// List a prefecture's cities grouped by subprefecture display name
pub fn list_subprefectures_and_cities(
    region_id: &RegionId,
    prefecture_id: &PrefectureId,
) -> Option<SubprefectureCities> {
    let document = fetch_document(&site::prefecture_url(region_id, prefecture_id))?;
    parse_subprefectures_and_cities(&document)
}

/// Extract the region entries of the root listing page, in document order.
///
/// Region ids come from the trailing path segment of each entry's link;
/// names are the entries' visible text.
pub fn parse_regions(document: &Html) -> Option<Vec<Region>> {
    let Some(table) = document.select(&site::LIST_TABLE).next() else {
        warn!("{}", ScrapeError::MissingMarkup("region listing table"));
        return None;
    };

    let mut regions = Vec::new();
    for cell in table.select(&site::HEADER_CELL) {
        let link = cell.select(&site::ANCHOR).next()?;
        let href = link.value().attr("href")?;
        let id = dom::nth_path_segment_from_end(href, 2)?;
        regions.push(Region {
            id: RegionId::new(id),
            name: dom::trimmed_text(cell),
        });
    }
    Some(regions)
}

/// Extract the prefecture entries of a region page, in document order.
///
/// Only anchors carrying the prefecture-link marker class count; the same
/// table row also holds unrelated links.
pub fn parse_prefectures(document: &Html) -> Option<Vec<Prefecture>> {
    let Some(table) = document.select(&site::LIST_TABLE).next() else {
        warn!("{}", ScrapeError::MissingMarkup("prefecture listing table"));
        return None;
    };
    let Some(row) = table.select(&site::ROW).next() else {
        warn!("{}", ScrapeError::MissingMarkup("prefecture listing row"));
        return None;
    };

    let mut prefectures = Vec::new();
    for item in row.select(&site::LIST_ITEM) {
        let Some(link) = item.select(&site::PREF_LINK).next() else {
            continue;
        };
        let href = link.value().attr("href")?;
        let id = dom::nth_path_segment_from_end(href, 2)?;
        prefectures.push(Prefecture {
            id: PrefectureId::new(id),
            name: dom::trimmed_text(link),
        });
    }
    Some(prefectures)
}

/// Extract a prefecture page's cities grouped by subprefecture heading.
///
/// Groups are delimited by heading elements; each heading's immediately
/// following list supplies the city entries. City links encode
/// `.../<subprefecture_id>/<city_id>/`, and both segments are taken
/// positionally from the end of the path. Subprefecture ids repeat across
/// headings, so the outer map is keyed on the heading text.
pub fn parse_subprefectures_and_cities(document: &Html) -> Option<SubprefectureCities> {
    let headings: Vec<_> = document.select(&site::SUBPREF_HEADING).collect();
    if headings.is_empty() {
        warn!("{}", ScrapeError::MissingMarkup("subprefecture headings"));
        return None;
    }

    let mut groups = SubprefectureCities::new();
    for heading in headings {
        let list = dom::next_sibling_element(heading)?;
        let cities = groups
            .entry(dom::trimmed_text(heading))
            .or_insert_with(BTreeMap::new);

        for item in list.select(&site::LIST_ITEM) {
            let link = item.select(&site::ANCHOR).next()?;
            let href = link.value().attr("href")?;
            let city_id = dom::nth_path_segment_from_end(href, 2)?;
            let subprefecture_id = dom::nth_path_segment_from_end(href, 3)?;
            cities.insert(
                city_id.to_string(),
                City {
                    subprefecture_id: SubprefectureId::new(subprefecture_id),
                    city_name: dom::trimmed_text(link),
                },
            );
        }
    }
    Some(groups)
}
