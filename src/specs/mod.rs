// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground
//! truth lives in the HTML* of one page and *how to read it robustly*.
//!
//! ## What lives here
//! - **Pure HTML reading** of saved pages, through `core::html` (forgiving
//!   html5ever parse, selector + predicate lookup, visible-text extraction).
//! - **Selector choice**: which elements carry the data and which attribute
//!   tells them apart from look-alikes.
//!
//! ## What does **not** live here
//! - **Reformatting** of what was read (`names`).
//! - **File IO and exit status** (`file`, `runner`, `cli`).
//!
//! ## Conventions
//! - Specs return lazy iterators borrowing the parsed document; nothing is
//!   collected until the caller asks.
//! - Non-matching markup is skipped, never an error.
//! - Specs are tested offline against inline fixtures.
pub mod classlist;
