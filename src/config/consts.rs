// src/config/consts.rs

// Input / output
pub const DEFAULT_INPUT: &str = "classlist.html";
pub const DEFAULT_OUTPUT: &str = "names.txt";

// Scrape
/// Class list rows link each student's name to the compose-email dialog;
/// the anchor title reads "Compose email to <First Last>".
pub const TITLE_MARKER: &str = "Compose email to ";
pub const ANCHOR_TAG: &str = "a";
pub const TITLE_ATTR: &str = "title";
