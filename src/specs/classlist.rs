// src/specs/classlist.rs
//! Scraping *spec* for a saved class list page.
//!
//! Purpose:
//! - Read the **saved HTML** of an LMS class list (D2L "Classlist").
//! - Each student row links their name to the email dialog:
//!   `<a title="Compose email to Mike Smith" ...>Smith, Mike</a>`.
//!   The title carries the marker, the anchor text carries the name as "Last, First".
//! - Yield those anchor texts, in document order, still in "Last, First" form.
//!
//! Non-Responsibilities:
//! - **No reformatting** (see `names::reverse_name`).
//! - **No dedup / sort / IO.**
//!
//! Filtering is silent: anchors without the marker or with blank text are
//! just not part of the roster (profile links, pager links, icons).

use std::sync::LazyLock;

use scraper::{ Html, Selector };

use crate::config::consts::{ ANCHOR_TAG, TITLE_ATTR, TITLE_MARKER };
use crate::core::html;

static ANCHORS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_TAG).expect("anchor tag is a valid selector")
});

/// One `<a>` as seen by the scraper: its title (empty if absent) and visible text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawAnchor {
    pub title: String,
    pub text: String,
}

impl RawAnchor {
    /// Marker in the title (substring, case-sensitive) and something to read.
    pub fn is_student(&self) -> bool {
        title_matches(&self.title) && !self.text.is_empty()
    }
}

fn title_matches(title: &str) -> bool {
    !title.is_empty() && title.contains(TITLE_MARKER)
}

/// Every anchor in the document, in order, as `RawAnchor` records.
pub fn anchors(doc: &Html) -> impl Iterator<Item = RawAnchor> + '_ {
    html::find_all(doc, &ANCHORS, |_| true).map(|el| RawAnchor {
        title: html::attr(&el, TITLE_ATTR).unwrap_or_default().to_string(),
        text: html::text(&el),
    })
}

/// Raw student names ("Last, First Middle"), lazily, in document order.
///
/// The title test runs before the element text is collected, so unrelated
/// anchors cost nothing beyond the attribute lookup.
pub fn raw_names(doc: &Html) -> impl Iterator<Item = String> + '_ {
    html::find_all(doc, &ANCHORS, |el| {
        html::attr(el, TITLE_ATTR).is_some_and(title_matches)
    })
    .map(|el| html::text(&el))
    .filter(|text| !text.is_empty())
}
