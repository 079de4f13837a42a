//! Small helpers over `scraper` nodes: trimmed text collection, sibling
//! navigation, and positional path-segment extraction from hrefs.

use scraper::ElementRef;

/// Collect the text of an element with each fragment trimmed and empty
/// fragments dropped, concatenated without separators.
pub(crate) fn trimmed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Like [`trimmed_text`], but skipping the subtree rooted at `excluded`.
///
/// Used for the detail-page header, where the publication timestamp is
/// embedded inside the heading and must not leak into the city name.
pub(crate) fn text_without(element: ElementRef<'_>, excluded: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter(|node| {
            node.id() != excluded.id() && node.ancestors().all(|a| a.id() != excluded.id())
        })
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// The next element sibling, skipping text and comment nodes
pub(crate) fn next_sibling_element<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

/// The `n`-th `/`-separated segment counted from the end of `href`.
///
/// Site links end in a trailing slash, so the last segment is empty and the
/// trailing id sits at `n = 2`, e.g. `/forecast/3/16/4410/13101/` yields
/// `13101` for `n = 2` and `4410` for `n = 3`.
pub(crate) fn nth_path_segment_from_end(href: &str, n: usize) -> Option<&str> {
    let segments: Vec<&str> = href.split('/').collect();
    segments
        .len()
        .checked_sub(n)
        .and_then(|index| segments.get(index))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn trimmed_text_concatenates_stripped_fragments() {
        let html = Html::parse_fragment("<p> 晴れ <span> のち雨 </span> </p>");
        let selector = Selector::parse("p").unwrap();
        let paragraph = html.select(&selector).next().unwrap();
        assert_eq!(trimmed_text(paragraph), "晴れのち雨");
    }

    #[test]
    fn text_without_skips_the_excluded_subtree() {
        let html = Html::parse_fragment(
            "<h2>千代田区の天気<time class=\"date-time\">20日06:00<span>発表</span></time></h2>",
        );
        let heading = html.select(&Selector::parse("h2").unwrap()).next().unwrap();
        let time = html.select(&Selector::parse("time").unwrap()).next().unwrap();
        assert_eq!(text_without(heading, time), "千代田区の天気");
    }

    #[test]
    fn next_sibling_element_skips_text_nodes() {
        let html = Html::parse_fragment("<h4>東京23区</h4>\n<ul><li>千代田区</li></ul>");
        let heading = html.select(&Selector::parse("h4").unwrap()).next().unwrap();
        let list = next_sibling_element(heading).unwrap();
        assert_eq!(list.value().name(), "ul");
    }

    #[test]
    fn next_sibling_element_is_absent_at_the_end() {
        let html = Html::parse_fragment("<h4>東京23区</h4>");
        let heading = html.select(&Selector::parse("h4").unwrap()).next().unwrap();
        assert!(next_sibling_element(heading).is_none());
    }

    #[test]
    fn path_segments_are_counted_from_the_end() {
        let href = "/forecast/3/16/4410/13101/";
        assert_eq!(nth_path_segment_from_end(href, 2), Some("13101"));
        assert_eq!(nth_path_segment_from_end(href, 3), Some("4410"));
        assert_eq!(nth_path_segment_from_end("https://tenki.jp/forecast/3/", 2), Some("3"));
        assert_eq!(nth_path_segment_from_end("plain", 2), None);
    }
}
