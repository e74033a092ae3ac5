// src/core/sanitize.rs

/// Collapse every run of whitespace (any Unicode whitespace, including the
/// non-breaking spaces `&nbsp;` decodes to) into one ASCII space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() { out.push(' '); }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(normalize_ws("  Smith ,\n\t Mike   Ann  "), "Smith , Mike Ann");
        assert_eq!(normalize_ws("Madonna"), "Madonna");
    }

    #[test]
    fn nbsp_counts_as_whitespace() {
        assert_eq!(normalize_ws("Smith,\u{a0}\u{a0}Mike"), "Smith, Mike");
    }

    #[test]
    fn blank_becomes_empty() {
        assert_eq!(normalize_ws(""), "");
        assert_eq!(normalize_ws(" \r\n "), "");
    }
}
