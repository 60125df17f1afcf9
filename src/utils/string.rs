//! String helpers for INI line handling
//!
//! Only spaces and tabs count as blanks here. Other whitespace (such as a
//! stray `\r` or a non-breaking space) is kept as part of keys and values.

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Trim spaces and tabs from both ends of a string
///
/// # Arguments
///
/// * `s` - The string to trim
///
/// # Returns
///
/// The trimmed slice
pub fn trim_blanks(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Trim spaces and tabs from the beginning of a string
pub fn trim_blanks_start(s: &str) -> &str {
    s.trim_start_matches(is_blank)
}

/// Trim spaces and tabs from the end of a string
pub fn trim_blanks_end(s: &str) -> &str {
    s.trim_end_matches(is_blank)
}

/// Cut a line at the first occurrence of `marker`, dropping the marker
///
/// # Returns
///
/// Everything before `marker`, or the whole line when it does not occur
pub fn strip_after<'a>(line: &'a str, marker: char) -> &'a str {
    match line.find(marker) {
        Some(pos) => &line[..pos],
        None => line,
    }
}
