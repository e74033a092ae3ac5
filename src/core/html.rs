// src/core/html.rs
// Thin layer over `scraper` (html5ever). The parse is the browser algorithm,
// so unclosed tags, stray `&` and other markup noise never fail, they just
// produce whatever tree a browser would build.

use scraper::{ ElementRef, Html, Selector };

use super::sanitize::normalize_ws;

/// Parse a full document. Never fails.
pub fn parse(text: &str) -> Html {
    Html::parse_document(text)
}

/// Every element matching `selector`, in document order, that also passes `keep`.
///
/// The iterator borrows the document; it is single-pass. Walk it again by
/// calling `find_all` again.
pub fn find_all<'a, F>(
    doc: &'a Html,
    selector: &'a Selector,
    mut keep: F,
) -> impl Iterator<Item = ElementRef<'a>> + 'a
where
    F: FnMut(&ElementRef<'a>) -> bool + 'a,
{
    doc.select(selector).filter(move |el| keep(el))
}

/// Attribute value, if present. Attribute names are lowercased by the parser.
pub fn attr<'a>(el: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Visible text of an element: all descendant text nodes joined as-is,
/// entities decoded, whitespace collapsed.
pub fn text(el: &ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}
