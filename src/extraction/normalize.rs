//! Line normalization used for block tracking.

/// Normalize a raw line for keyword matching.
///
/// Trims the line, collapses runs of tabs/spaces into a single space and cuts
/// everything from the first `//`. The cut is not quote-aware and the result
/// is not re-trimmed, so `BEGIN // x` normalizes to `"BEGIN "`.
pub fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_gap = false;

    for c in line.trim().chars() {
        if is_blank(c) {
            if !in_gap {
                out.push(' ');
                in_gap = true;
            }
        } else {
            out.push(c);
            in_gap = false;
        }
    }

    if let Some(pos) = out.find("//") {
        out.truncate(pos);
    }

    out
}

pub(crate) fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
