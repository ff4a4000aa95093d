// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallstr::SmallString;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// The text in one cell. It is either empty or exactly one grapheme cluster, which
/// may be more than one [char] (eg: `"é"` written as `e` + combining accent).
pub type CellText = SmallString<[u8; 8]>;

pub type InlineVecCellText = SmallVec<[CellText; 8]>;

/// Placeholder used by [Display] for a cell that is not set.
pub const UNSET_CELL_DISPLAY: char = '_';

/// The canonical value of an OTP field: an ordered list of `N` [`CellText`]s.
///
/// `N` is fixed when the code is created. This type is immutable; every `with_*`
/// method returns a brand new code and leaves `self` alone, so a previous value is
/// never aliased by the next one.
///
/// ```
/// use r3bl_otp_field::OtpCode;
///
/// let code = OtpCode::new_empty(4).with_cell_set(0, "1").with_cell_set(1, "2");
/// assert_eq!(code.to_string(), "12__");
/// assert_eq!(code.value(), "12");
/// assert!(!code.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode {
    cells: InlineVecCellText,
}

impl OtpCode {
    /// A code with `number_of_digits` unset cells.
    #[must_use]
    pub fn new_empty(number_of_digits: usize) -> Self {
        Self {
            cells: (0..number_of_digits).map(|_| CellText::new()).collect(),
        }
    }

    /// Makes a code from the given cell strings. Only the first grapheme cluster of
    /// each string is kept.
    #[must_use]
    pub fn from_cells(cells: &[&str]) -> Self {
        Self {
            cells: cells.iter().map(|it| first_grapheme(it)).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.cells.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    /// The text at `index`. Cells that are not set, and indices past the end, are `""`.
    #[must_use]
    pub fn get(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", |it| it.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|it| it.as_str())
    }

    #[must_use]
    pub fn has_empty_position(&self) -> bool { self.cells.iter().any(|it| it.is_empty()) }

    /// Every cell is set. A zero length code is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool { !self.is_empty() && !self.has_empty_position() }

    /// All the cells joined together, unset cells contribute nothing.
    #[must_use]
    pub fn value(&self) -> String { self.iter().collect() }
}

/// Transitions. Each one returns a new code of the same length.
impl OtpCode {
    /// Sets the cell at `index` to the first grapheme cluster of `text`.
    #[must_use]
    pub fn with_cell_set(&self, index: usize, text: &str) -> Self {
        let mut cells = self.cells.clone();
        if let Some(cell) = cells.get_mut(index) {
            *cell = first_grapheme(text);
        }
        Self { cells }
    }

    /// Clears the cell at `index`, and the one before it (if there is one).
    #[must_use]
    pub fn with_backspace_at(&self, index: usize) -> Self {
        let mut cells = self.cells.clone();
        if let Some(cell) = cells.get_mut(index) {
            cell.clear();
        }
        if let Some(prev_index) = index.checked_sub(1)
            && let Some(cell) = cells.get_mut(prev_index)
        {
            cell.clear();
        }
        Self { cells }
    }

    /// Cells `index..` receive `graphemes` in order. Cells after the last pasted
    /// grapheme are cleared. Graphemes that don't fit are dropped. Cells before `index`
    /// are untouched.
    #[must_use]
    pub fn with_pasted_at(&self, index: usize, graphemes: &[&str]) -> Self {
        let mut cells = self.cells.clone();
        for (offset, cell) in cells.iter_mut().skip(index).enumerate() {
            *cell = graphemes
                .get(offset)
                .map_or_else(CellText::new, |it| CellText::from_str(it));
        }
        Self { cells }
    }

    /// Every cell receives the grapheme at the same position in `graphemes`, cells past
    /// the end of `graphemes` are cleared.
    #[must_use]
    pub fn with_all_replaced(&self, graphemes: &[&str]) -> Self {
        self.with_pasted_at(0, graphemes)
    }
}

impl Display for OtpCode {
    /// Unset cells are shown as `_`, so `["1", "2", "", ""]` is `12__`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for cell in &self.cells {
            if cell.is_empty() {
                write!(f, "{UNSET_CELL_DISPLAY}")?;
            } else {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

fn first_grapheme(text: &str) -> CellText {
    text.graphemes(true)
        .next()
        .map_or_else(CellText::new, CellText::from_str)
}

/// Splits pasted text into the grapheme clusters that go into cells. Trailing line
/// endings are trimmed first, since clipboard text often ends with a newline. Every
/// other grapheme is kept and counts towards the pasted length.
#[must_use]
pub fn split_pasted_text(text: &str) -> Vec<&str> {
    text.trim_end_matches(['\r', '\n']).graphemes(true).collect()
}
