use scraper::{Html, Selector};
use url::Url;

/// A fetched HTML page.
///
/// Holds the raw markup and parses it on each query, so a `Document` can be
/// kept across await points (the parsed tree is not `Send`).
#[derive(Debug, Clone)]
pub struct Document {
    url: Url,
    body: String,
}

impl Document {
    pub fn new(url: Url, body: String) -> Self {
        Self { url, body }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The first query in `queries` that yields a URL, checked in order
    /// against a single parse of the page. Each query is a
    /// `(selector, attribute)` pair.
    pub fn select_first_attr(&self, queries: &[(&str, &str)]) -> Option<Url> {
        let html = Html::parse_document(&self.body);
        queries
            .iter()
            .find_map(|(selector, attr)| self.attrs(&html, selector, attr).into_iter().next())
    }

    /// Every non-empty `attr` of elements matching `selector`, in document
    /// order, resolved against the page URL. Values that do not form a URL
    /// are skipped.
    pub fn select_attrs(&self, selector: &str, attr: &str) -> Vec<Url> {
        let html = Html::parse_document(&self.body);
        self.attrs(&html, selector, attr)
    }

    fn attrs(&self, html: &Html, selector: &str, attr: &str) -> Vec<Url> {
        let Ok(parsed) = Selector::parse(selector) else {
            tracing::warn!("Invalid selector: {}", selector);
            return Vec::new();
        };

        html.select(&parsed)
            .filter_map(|element| element.value().attr(attr))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .filter_map(|value| self.url.join(value).ok())
            .collect()
    }

    /// Text of every inline `<script>` element, in document order.
    pub fn script_texts(&self) -> Vec<String> {
        let Ok(selector) = Selector::parse("script:not([src])") else {
            return Vec::new();
        };

        let html = Html::parse_document(&self.body);
        html.select(&selector)
            .map(|element| element.text().collect::<String>())
            .filter(|text| !text.trim().is_empty())
            .collect()
    }
}
