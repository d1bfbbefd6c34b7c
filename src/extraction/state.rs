//! Block structure tracking for resource scripts.

use super::normalize::is_word_char;

/// The resource construct the scanner is currently inside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Construct {
    #[default]
    None,
    /// A `MENU` resource (`POPUP`/`MENUITEM` entries).
    Menu,
    /// A `DIALOG`/`DIALOGEX` resource and its identifier.
    Dialog(String),
    /// A `STRINGTABLE` resource.
    StringTable,
}

/// Scan state carried from line to line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockState {
    pub construct: Construct,
    /// Nesting depth of `BEGIN`/`END` pairs.
    pub depth: usize,
}

impl BlockState {
    /// Update the state from a normalized line.
    ///
    /// Each check is independent; a line that matches several of them applies
    /// all of them in order. An `END` without a matching `BEGIN` is ignored.
    pub fn track(&mut self, norm_line: &str) {
        if norm_line.ends_with(" MENU") {
            self.construct = Construct::Menu;
        }

        if let Some(id) = dialog_declaration(norm_line) {
            self.construct = Construct::Dialog(id.to_string());
        }

        if norm_line == "STRINGTABLE" {
            self.construct = Construct::StringTable;
        }

        if norm_line == "BEGIN" {
            self.depth += 1;
        }

        if norm_line == "END" && self.depth > 0 {
            self.depth -= 1;
            if self.depth == 0 {
                self.construct = Construct::None;
            }
        }
    }

    /// Identifier of the dialog being scanned, if any.
    pub fn dialog_id(&self) -> Option<&str> {
        match &self.construct {
            Construct::Dialog(id) => Some(id),
            _ => None,
        }
    }

    /// True inside the `BEGIN`/`END` body of a menu or dialog.
    pub fn in_item_block(&self) -> bool {
        self.depth > 0 && matches!(self.construct, Construct::Menu | Construct::Dialog(_))
    }
}

/// Match `<identifier> DIALOG ` or `<identifier> DIALOGEX ` at the start of a
/// normalized line and return the identifier.
fn dialog_declaration(norm_line: &str) -> Option<&str> {
    let (id, rest) = norm_line.split_once(' ')?;
    if id.is_empty() || !id.chars().all(is_word_char) {
        return None;
    }
    (rest.starts_with("DIALOG ") || rest.starts_with("DIALOGEX ")).then_some(id)
}
