//! Conversion between flat grid indices and `"a0"`-style labels.
//!
//! A label is the column letter taken from the alphabet followed by the
//! 0-based row number. Row and column always come from the same integer
//! division so placement and lookup agree on every cell.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::config::{ALPHABET, GRID_LENGTH};

/// Human-facing cell coordinate such as `"c4"`.
///
/// Labels are compared as opaque strings. Construction never validates, so a
/// malformed guess is simply a label that matches no cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct Label(String);

impl Label {
    /// Label of `index` on the standard grid.
    pub fn from_index(index: usize) -> Self {
        index_to_label(index, GRID_LENGTH, ALPHABET)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(raw: &str) -> Self {
        Label(String::from(raw))
    }
}

impl From<String> for Label {
    fn from(raw: String) -> Self {
        Label(raw)
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Row of a flat index.
#[inline]
pub fn row_of(index: usize, grid_length: usize) -> usize {
    index / grid_length
}

/// Column of a flat index.
#[inline]
pub fn col_of(index: usize, grid_length: usize) -> usize {
    index % grid_length
}

/// Encode a flat grid index as a label.
///
/// `alphabet` must be ASCII with at least `grid_length` letters and `index`
/// must lie on the grid; violating either is a caller bug and panics.
pub fn index_to_label(index: usize, grid_length: usize, alphabet: &str) -> Label {
    debug_assert!(index < grid_length * grid_length, "index {} off grid", index);
    let row = row_of(index, grid_length);
    let letter = char::from(alphabet.as_bytes()[col_of(index, grid_length)]);
    Label(format!("{}{}", letter, row))
}

/// Decode a canonical label back to its flat index.
///
/// Returns `None` for anything [`index_to_label`] could not have produced:
/// unknown letters, missing or non-decimal rows, leading zeros, or rows off
/// the grid.
pub fn label_to_index(label: &str, grid_length: usize, alphabet: &str) -> Option<usize> {
    let mut chars = label.chars();
    let letter = chars.next()?;
    let col = alphabet.chars().position(|c| c == letter)?;
    if col >= grid_length {
        return None;
    }
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row >= grid_length {
        return None;
    }
    Some(row * grid_length + col)
}
