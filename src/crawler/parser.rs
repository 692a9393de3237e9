//! HTML title extraction
//!
//! The crawl stage keeps a single representative artifact per page: the
//! text of its `<title>` element, trimmed. Everything else in the document
//! is ignored.

use scraper::{Html, Selector};

/// Extracts the page title from an HTML document
///
/// Returns `None` when the document has no `<title>` element or the title
/// text is empty after trimming; the caller maps that to the "No Title
/// Found" sentinel.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
        assert_eq!(extract_title(html), Some("Test Page".to_string()));
    }

    #[test]
    fn test_extract_title_with_whitespace() {
        let html = r#"<html><head><title>  Test Page  </title></head><body></body></html>"#;
        assert_eq!(extract_title(html), Some("Test Page".to_string()));
    }

    #[test]
    fn test_no_title_element() {
        let html = r#"<html><head></head><body></body></html>"#;
        assert_eq!(extract_title(html), None);
    }

    #[test]
    fn test_empty_title_element() {
        let html = r#"<html><head><title>   </title></head><body></body></html>"#;
        assert_eq!(extract_title(html), None);
    }

    #[test]
    fn test_title_survives_malformed_body() {
        let html = r#"<html><head><title>Still Here</title><body><div><p>unclosed"#;
        assert_eq!(extract_title(html), Some("Still Here".to_string()));
    }

    #[test]
    fn test_title_with_entities() {
        let html = r#"<html><head><title>Widgets &amp; Co</title></head></html>"#;
        assert_eq!(extract_title(html), Some("Widgets & Co".to_string()));
    }
}
