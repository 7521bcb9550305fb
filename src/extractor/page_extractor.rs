use scraper::{ElementRef, Html};
use std::fmt;

/// Heading levels that are collected. Deeper levels are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.as_str(), self.text)
    }
}

/// Everything pulled out of one page.
///
/// Headings and links are kept in document order, duplicates included.
/// Links are raw `href` values and may be relative or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub title: Option<String>,
    pub headings: Vec<Heading>,
    pub links: Vec<String>,
}

impl ExtractionResult {
    /// Headings rendered as `"H1: text"`.
    pub fn heading_labels(&self) -> Vec<String> {
        self.headings.iter().map(ToString::to_string).collect()
    }
}

pub struct PageExtractor;

impl PageExtractor {
    /// Walk the document once in pre-order and collect title, headings and links.
    ///
    /// `descendants()` is iterative, so arbitrarily deep documents do not
    /// exhaust the stack. Tag names come from html5ever already lowercased.
    pub fn extract(html: &Html) -> ExtractionResult {
        let mut result = ExtractionResult::default();

        for node in html.tree.root().descendants() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };

            match element.value().name() {
                "title" => {
                    // Only the first child counts; a later title overwrites an earlier one
                    if let Some(child) = element.first_child() {
                        let text = child
                            .value()
                            .as_text()
                            .map(|text| String::from(&**text))
                            .unwrap_or_default();
                        result.title = Some(text);
                    }
                }
                "a" => {
                    // Matched by local name, so `xlink:href` on SVG anchors counts too
                    let href = element
                        .value()
                        .attrs()
                        .find(|(name, _)| *name == "href")
                        .map(|(_, value)| value);
                    if let Some(href) = href {
                        result.links.push(href.to_string());
                    }
                }
                tag => {
                    if let Some(level) = HeadingLevel::from_tag(tag) {
                        let text = heading_text(element);
                        if !text.is_empty() {
                            result.headings.push(Heading { level, text });
                        }
                    }
                }
            }
        }

        tracing::debug!(
            "Extracted title: {}, {} headings, {} links",
            result.title.is_some(),
            result.headings.len(),
            result.links.len()
        );
        result
    }
}

/// Concatenated text of every text node under `element`, trimmed at both ends.
pub fn heading_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
