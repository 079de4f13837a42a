//! Blocking page fetcher: one GET per call, no retries, no caching.

use scraper::Html;
use tracing::warn;

use crate::error::ScrapeError;

/// Fetch `url` and parse the response body into an HTML tree.
///
/// Any transport failure is absorbed: the error is logged and `None` is
/// returned so extractors can degrade to their empty shapes. Error status
/// pages are parsed like any other body; the extractors treat their
/// unexpected structure as a mismatch.
pub fn fetch_document(url: &str) -> Option<Html> {
    match try_fetch(url) {
        Ok(document) => Some(document),
        Err(err) => {
            warn!("failed to fetch {url}: {err}");
            None
        }
    }
}

fn try_fetch(url: &str) -> Result<Html, ScrapeError> {
    let body = reqwest::blocking::get(url)?.text()?;
    Ok(Html::parse_document(&body))
}
