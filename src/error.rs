//! Error types for the scraping pipeline

use thiserror::Error;

/// Failures that can occur while fetching and dissecting site pages.
///
/// These never escape the crate's public operations: every extractor absorbs
/// them into its canonical empty result after logging, so callers only ever
/// see a successfully-typed value.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport-level failure (DNS, connection, protocol)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An element the site layout is expected to contain was not found
    #[error("expected markup not found: {0}")]
    MissingMarkup(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markup_names_the_element() {
        let err = ScrapeError::MissingMarkup("region listing table");
        assert_eq!(
            err.to_string(),
            "expected markup not found: region listing table"
        );
    }
}
