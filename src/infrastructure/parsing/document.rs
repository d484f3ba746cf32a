//! Thin wrapper around the HTML parsing library.
//!
//! Everything above this module talks in terms of [`Document`], [`Node`] and
//! [`Query`]; the selector engine underneath stays an implementation detail.

use scraper::{ElementRef, Html, Selector};

use crate::error::{ScoutError, ScoutResult};

/// A compiled CSS query, built once and reused across documents.
#[derive(Debug)]
pub struct Query(Selector);

impl Query {
    /// Compile `selector`, reporting the reason when it does not parse.
    pub fn parse(selector: &str) -> ScoutResult<Self> {
        Selector::parse(selector)
            .map(Self)
            .map_err(|e| ScoutError::invalid_selector(selector, &e.to_string()))
    }
}

/// A parsed HTML document.
///
/// Parsing is tolerant: broken markup is repaired the way browsers repair it
/// and never fails.
pub struct Document(Html);

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self(Html::parse_document(markup))
    }

    /// First element matching `query`, in document order.
    pub fn find_first(&self, query: &Query) -> Option<Node<'_>> {
        self.0.select(&query.0).next().map(Node)
    }

    /// Every element matching `query`, in document order.
    pub fn find_all(&self, query: &Query) -> Vec<Node<'_>> {
        self.0.select(&query.0).map(Node).collect()
    }
}

/// One element inside a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// First descendant matching `query`, in document order.
    pub fn find_first(&self, query: &Query) -> Option<Node<'a>> {
        self.0.select(&query.0).next().map(Node)
    }

    /// Every descendant matching `query`, in document order.
    pub fn find_all(&self, query: &Query) -> Vec<Node<'a>> {
        self.0.select(&query.0).map(Node).collect()
    }

    /// Concatenated text content with surrounding whitespace trimmed.
    pub fn text(&self) -> String {
        self.0.text().collect::<String>().trim().to_string()
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_find_elements_in_document_order() {
        let document = Document::parse("<ul><li>one</li><li>two</li></ul>");
        let items = Query::parse("li").unwrap();

        assert_eq!(document.find_all(&items).len(), 2);
        assert_eq!(document.find_first(&items).unwrap().text(), "one");
    }

    #[test]
    fn text_is_concatenated_and_trimmed() {
        let document = Document::parse("<p>  some <b>bold</b> text\n </p>");
        let paragraph = Query::parse("p").unwrap();

        assert_eq!(
            document.find_first(&paragraph).unwrap().text(),
            "some bold text"
        );
    }

    #[test]
    fn attributes_are_read_from_the_element() {
        let document = Document::parse(r#"<a href="https://example.org" title="t">x</a>"#);
        let anchor = Query::parse("a").unwrap();
        let node = document.find_first(&anchor).unwrap();

        assert_eq!(node.attr("href"), Some("https://example.org"));
        assert_eq!(node.attr("missing"), None);
    }

    #[test]
    fn malformed_markup_still_parses() {
        let document = Document::parse("<table><tr><td>unclosed");
        let cell = Query::parse("td").unwrap();

        assert_eq!(document.find_first(&cell).unwrap().text(), "unclosed");
    }

    #[test]
    fn broken_selectors_are_rejected_with_a_reason() {
        let err = Query::parse("td[").unwrap_err();
        assert!(matches!(err, ScoutError::InvalidSelector { .. }));
    }
}
