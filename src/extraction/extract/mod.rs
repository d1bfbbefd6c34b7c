//! Line-by-line string extraction.
//!
//! The scanner walks a resource script one line at a time. Each line first
//! updates the block state (`BlockState::track`), then exactly one line
//! grammar is tried depending on where the scanner is:
//!
//! 1. Top level of a dialog: `CAPTION "..."`
//! 2. Inside a menu or dialog body: `<TOKEN> "..." [, <ID>]`
//!    (`MENUITEM`, `POPUP`, `LTEXT`, `CONTROL`, ...)
//! 3. Anywhere else (string tables, stray lines): the first-to-last quoted
//!    span on the line, or a bare identifier that names the string on the next
//!    line.
//!
//! Lines that match nothing are skipped. Extraction never fails.


use super::literal::{
    decode_literal, find_quoted, skip_blanks, skip_blanks1, take_quoted, take_word,
};
use super::normalize::normalize_line;
use super::results::RcEntry;
use super::state::BlockState;

/// Identifiers that close or open blocks and never name a string.
const BLOCK_KEYWORDS: &[&str] = &["BEGIN", "END", "STRINGTABLE"];

/// A literal matched on the current line together with its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture<'a> {
    pub id: Option<String>,
    pub hint: Option<String>,
    /// The raw literal, quotes and `L` prefix included.
    pub literal: &'a str,
}

/// Result of scanning a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    /// A literal was found. Any pending id is consumed.
    Emit(Capture<'a>),
    /// Nothing to emit. The id (if any) is handed to the next line.
    Carry(Option<String>),
}

/// Extract every translatable string from resource script text, in source
/// order, duplicates included.
///
/// ```
/// use rcstrings::extraction::extract;
///
/// let rc = "STRINGTABLE\nBEGIN\n    IDS_HELLO \"Hello\"\nEND\n";
/// assert_eq!(extract(rc), vec!["Hello"]);
/// ```
pub fn extract(text: &str) -> Vec<String> {
    extract_entries(text).into_iter().map(|e| e.text).collect()
}

/// Like [`extract`], keeping the line number, id and hint of every string.
pub fn extract_entries(text: &str) -> Vec<RcEntry> {
    let mut state = BlockState::default();
    let mut pending_id: Option<String> = None;
    let mut entries = Vec::new();

    for (idx, line) in split_lines(text).enumerate() {
        match step(&mut state, pending_id.take(), line) {
            LineOutcome::Emit(capture) => entries.push(RcEntry {
                line: idx + 1,
                id: capture.id,
                hint: capture.hint,
                text: decode_literal(capture.literal),
            }),
            LineOutcome::Carry(id) => pending_id = id,
        }
    }

    entries
}

/// Advance the scanner over one raw line.
pub fn step<'a>(
    state: &mut BlockState,
    pending_id: Option<String>,
    line: &'a str,
) -> LineOutcome<'a> {
    state.track(&normalize_line(line));

    if state.depth == 0
        && let Some(dialog_id) = state.dialog_id()
    {
        return match match_caption(line) {
            Some(literal) => LineOutcome::Emit(Capture {
                id: Some(format!("{}:CAPTION", dialog_id)),
                hint: Some(format!("{} CAPTION", dialog_id)),
                literal,
            }),
            None => LineOutcome::Carry(pending_id),
        };
    }

    if state.in_item_block() {
        return match match_item(line) {
            Some((token, id, literal)) => LineOutcome::Emit(Capture {
                hint: Some(match id {
                    Some(id) => format!("{} {}", token, id),
                    None => token.to_string(),
                }),
                id: id.map(str::to_string),
                literal,
            }),
            None => LineOutcome::Carry(pending_id),
        };
    }

    match_loose(pending_id, line)
}

/// `\n` and `\r\n` end a line, and so do a lone `\r`, the form feed and
/// vertical tab, the ASCII file/group/record separators, NEL and the Unicode
/// line and paragraph separators.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(|line| line.split(is_line_break))
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// `CAPTION "..."`
fn match_caption(line: &str) -> Option<&str> {
    let rest = skip_blanks(line).strip_prefix("CAPTION")?;
    take_quoted(skip_blanks1(rest)?).map(|(literal, _)| literal)
}

/// `<TOKEN> "..."` with an optional `,<ID>` directly after the literal.
fn match_item(line: &str) -> Option<(&str, Option<&str>, &str)> {
    let (token, rest) = take_word(skip_blanks(line))?;
    let (literal, rest) = take_quoted(skip_blanks1(rest)?)?;
    let id = rest
        .strip_prefix(',')
        .map(skip_blanks)
        .and_then(take_word)
        .map(|(id, _)| id);
    Some((token, id, literal))
}

/// String table entries and anything outside a menu or dialog body.
fn match_loose(pending_id: Option<String>, line: &str) -> LineOutcome<'_> {
    let rest = skip_blanks(line);

    if let Some(literal) = find_quoted(line) {
        let id = leading_id(rest).map(str::to_string).or(pending_id);
        return LineOutcome::Emit(Capture {
            hint: id.clone(),
            id,
            literal,
        });
    }

    if let Some((word, tail)) = take_word(rest) {
        let tail = skip_blanks(tail);
        if tail.is_empty() || tail.starts_with("//") {
            let id = (!BLOCK_KEYWORDS.contains(&word)).then(|| word.to_string());
            return LineOutcome::Carry(id);
        }
    }

    LineOutcome::Carry(None)
}

/// The identifier in front of a literal: `IDS_FOO "..."` or `IDS_FOO, "..."`.
fn leading_id(rest: &str) -> Option<&str> {
    if rest.starts_with("L\"") {
        return None;
    }
    let (word, tail) = take_word(rest)?;
    let tail = skip_blanks(tail);
    let tail = tail.strip_prefix(',').map(skip_blanks).unwrap_or(tail);
    (tail.starts_with('"') || tail.starts_with("L\"")).then_some(word)
}
