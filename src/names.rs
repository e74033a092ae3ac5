// src/names.rs
// "Last, First Middle" -> "First Middle Last", plus the sorted set we write out.

use std::collections::BTreeSet;

use crate::core::sanitize::normalize_ws;

/// Convert "Last, First Middle" into "First Middle Last".
///
/// Only the first comma splits; anything after it (", Jr." included) stays in
/// the given-name part. No comma means the name is returned cleaned but as-is.
/// Total: any input gives some output, `""` gives `""`.
pub fn reverse_name(name: &str) -> String {
    let cleaned = normalize_ws(name);
    let Some((last, rest)) = cleaned.split_once(',') else {
        return cleaned;
    };

    let last = last.trim();
    let rest = rest.trim();

    match (rest.is_empty(), last.is_empty()) {
        (true, _) => last.to_string(),
        (false, true) => rest.to_string(),
        (false, false) => format!("{rest} {last}"),
    }
}

/// Distinct canonical names in ascending (code point) order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameSet {
    names: BTreeSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canonical name. Empty strings are dropped.
    /// Returns `true` if the name was new.
    pub fn insert(&mut self, name: String) -> bool {
        if name.is_empty() { return false; }
        self.names.insert(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// One name per line, trailing newline. Empty set renders as `""`.
    pub fn to_lines(&self) -> String {
        let mut out = String::with_capacity(self.names.iter().map(|n| n.len() + 1).sum());
        for n in &self.names {
            out.push_str(n);
            out.push('\n');
        }
        out
    }
}

impl FromIterator<String> for NameSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = NameSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<String> for NameSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}
