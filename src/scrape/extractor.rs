// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Visible-text extraction from HTML
//!
//! Reduces a page to the text a reader would see by selecting a fixed
//! allow-list of text-bearing tags and joining their trimmed contents
//! in document order. Malformed markup degrades to best-effort
//! extraction, never an error.

use scraper::{Html, Selector};

/// Tags whose text content counts as page text
///
/// Script, style and purely structural tags are deliberately absent.
pub const TEXT_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "div", "a", "b", "strong", "i", "em", "u",
    "s", "mark", "small", "sub", "sup", "del", "ins", "abbr", "cite", "code", "samp", "kbd",
    "var", "pre", "q", "blockquote", "dfn", "time", "bdi", "bdo", "label", "button", "output",
    "legend", "summary", "caption", "td", "th", "li", "dt", "dd", "figcaption", "ruby", "rt",
    "rp", "address", "option", "optgroup", "meter", "progress",
];

/// Extract visible text from an HTML document
///
/// Selects every allow-listed element in document order, takes its
/// trimmed text content, skips empty fragments and joins the rest with
/// single spaces.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let selector = match Selector::parse(&TEXT_TAGS.join(", ")) {
        Ok(selector) => selector,
        Err(_) => return String::new(),
    };

    let mut fragments = Vec::new();
    for element in document.select(&selector) {
        let text = element
            .text()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !text.is_empty() {
            fragments.push(text);
        }
    }

    fragments.join(" ")
}

/// Best-effort page title for display
///
/// Returns None when the document has no non-empty `<title>`; callers
/// fall back to the URL.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}
