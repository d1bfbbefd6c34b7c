//! Reading resource scripts from disk.
//!
//! Resource compilers accept UTF-16 (with BOM), UTF-8 and legacy code page
//! files. UTF-16 and UTF-8 are decoded exactly; anything that is not valid
//! UTF-8 is decoded lossily.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use encoding_rs::UTF_8;

pub fn read_source(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(decode_source(&bytes))
}

/// Decode by BOM (UTF-16LE, UTF-16BE, UTF-8), defaulting to UTF-8.
pub fn decode_source(bytes: &[u8]) -> String {
    let (text, _encoding, _had_errors) = UTF_8.decode(bytes);
    text.into_owned()
}
