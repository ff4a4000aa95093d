// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;
use strum_macros::AsRefStr;

/// Shared, read only configuration of one OTP field. It is created once by
/// [`crate::OtpCoordinator::new`] and every cell gets it by reference when it is
/// rendered, see [`crate::OtpCellRenderer::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpConfig {
    /// Number of cells, `N`. Fixed for the lifetime of the field.
    pub number_of_digits: usize,
    /// When `false` the cells hint that only digits are expected.
    pub alphanumeric: bool,
}

impl OtpConfig {
    /// This is only a hint for the host. Characters are never filtered based on it.
    #[must_use]
    pub fn input_mode_hint(&self) -> InputModeHint {
        if self.alphanumeric {
            InputModeHint::Text
        } else {
            InputModeHint::Numeric
        }
    }
}

/// What kind of entry a cell expects. The host may use this to pick a keypad, or (in
/// the terminal) to print a hint under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum InputModeHint {
    #[strum(to_string = "digits only")]
    Numeric,
    #[strum(to_string = "letters and digits")]
    Text,
}

/// Typing aids that a host text field may offer. They make no sense for a passcode, so
/// every cell has all of them off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAssistance {
    pub autocomplete: bool,
    pub autocapitalize: bool,
    pub autocorrect: bool,
    pub spellcheck: bool,
}

impl TextAssistance {
    pub const OFF: Self = Self {
        autocomplete: false,
        autocapitalize: false,
        autocorrect: false,
        spellcheck: false,
    };
}

/// Presentation attributes that are passed through to the paint layer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub maybe_fg_color: Option<Color>,
    pub maybe_bg_color: Option<Color>,
    pub bold: bool,
}

impl CellStyle {
    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.maybe_fg_color = Some(color);
        self
    }

    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.maybe_bg_color = Some(color);
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub const DEFAULT_GAP_BETWEEN_CELLS: u16 = 1;

/// Attributes of the field as a whole. None of these affect the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpFieldProps {
    /// Painted above the cells.
    pub maybe_label: Option<String>,
    /// Applied to the label and the hint line.
    pub style: CellStyle,
    /// Columns between two cells.
    pub gap: u16,
    /// Border color of the focused cell.
    pub focused_border_color: Color,
}

impl Default for OtpFieldProps {
    fn default() -> Self {
        Self {
            maybe_label: None,
            style: CellStyle::default(),
            gap: DEFAULT_GAP_BETWEEN_CELLS,
            focused_border_color: Color::Cyan,
        }
    }
}

impl OtpFieldProps {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.maybe_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(true, InputModeHint::Text, "letters and digits")]
    #[test_case(false, InputModeHint::Numeric, "digits only")]
    fn test_input_mode_hint(alphanumeric: bool, expected: InputModeHint, text: &str) {
        let config = OtpConfig {
            number_of_digits: 6,
            alphanumeric,
        };
        assert_eq2!(config.input_mode_hint(), expected);
        assert_eq2!(config.input_mode_hint().as_ref(), text);
    }
}
