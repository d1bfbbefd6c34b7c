//! String literal scanning and decoding.
//!
//! Resource scripts use C-like literals: `"..."` for ANSI strings and
//! `L"..."` for wide strings. Wide strings may additionally carry `\xHHHH`
//! escapes naming UTF-16 code units.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::normalize::{is_blank, is_word_char};

// One or more consecutive `\xHHHH` escapes. Runs are decoded together so that
// surrogate pairs written as two escapes combine into one character.
static WIDE_ESCAPE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\\x[0-9a-fA-F]{4})+").unwrap());

/// Decode a raw literal (including its quotes and optional `L` prefix).
///
/// Escapes are replaced in a fixed order: `\r`, `\n`, `\t`, then `\"`. For
/// wide literals `\xHHHH` escapes are decoded last.
///
/// ```
/// use rcstrings::extraction::decode_literal;
///
/// assert_eq!(decode_literal(r#""Line\tOne""#), "Line\tOne");
/// assert_eq!(decode_literal(r#"L"\x0041\x0042""#), "AB");
/// assert_eq!(decode_literal(r#""\x0041""#), r"\x0041");
/// ```
pub fn decode_literal(literal: &str) -> String {
    let wide = literal.starts_with('L');

    let text = strip_quotes(literal)
        .replace(r"\r", "\r")
        .replace(r"\n", "\n")
        .replace(r"\t", "\t")
        .replace(r#"\""#, "\"");

    if wide {
        decode_wide_escapes(&text)
    } else {
        text
    }
}

fn strip_quotes(literal: &str) -> &str {
    literal
        .strip_prefix('L')
        .unwrap_or(literal)
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal)
}

fn decode_wide_escapes(text: &str) -> String {
    WIDE_ESCAPE_RUN
        .replace_all(text, |caps: &Captures| {
            let units = caps[0]
                .split(r"\x")
                .filter(|s| !s.is_empty())
                .filter_map(|hex| u16::from_str_radix(hex, 16).ok());
            char::decode_utf16(units)
                .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect::<String>()
        })
        .into_owned()
}

pub(crate) fn skip_blanks(s: &str) -> &str {
    s.trim_start_matches(is_blank)
}

/// Skip one or more blanks; `None` if `s` does not start with a blank.
pub(crate) fn skip_blanks1(s: &str) -> Option<&str> {
    let rest = skip_blanks(s);
    (rest.len() < s.len()).then_some(rest)
}

/// Split a leading identifier (`[A-Za-z0-9_]+`, Unicode-aware) off `s`.
pub(crate) fn take_word(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !is_word_char(c)).unwrap_or(s.len());
    (end > 0).then(|| s.split_at(end))
}

/// Split a leading `L?"..."` literal off `s`.
///
/// `""` inside the literal is an escaped quote and does not close it; the
/// literal ends at the first lone `"`. If the line runs out after a `""` pair
/// without a lone quote, the first quote of the last pair closes it. A `""`
/// directly after the opening quote is not an escape: it closes an empty
/// literal.
pub(crate) fn take_quoted(s: &str) -> Option<(&str, &str)> {
    let body_start = if s.starts_with("L\"") {
        2
    } else if s.starts_with('"') {
        1
    } else {
        return None;
    };
    let close = closing_quote(s, body_start)?;
    Some(s.split_at(close + 1))
}

fn closing_quote(s: &str, body_start: usize) -> Option<usize> {
    let mut pos = body_start;
    let mut last_pair = None;
    while let Some(offset) = s[pos..].find('"') {
        let quote = pos + offset;
        if quote > body_start && s[quote + 1..].starts_with('"') {
            last_pair = Some(quote);
            pos = quote + 2;
        } else {
            return Some(quote);
        }
    }
    last_pair
}

/// Find a literal anywhere in `s`, spanning from the first quote to the last
/// quote on the line. An `L` directly before the first quote is included.
pub(crate) fn find_quoted(s: &str) -> Option<&str> {
    let first = s.find('"')?;
    let last = s.rfind('"')?;
    if last == first {
        return None;
    }
    let start = if s[..first].ends_with('L') {
        first - 1
    } else {
        first
    };
    Some(&s[start..=last])
}
