// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_segmentation::UnicodeSegmentation;

use super::{CellStyle, CellText, InputModeHint, OtpConfig, TextAssistance};
use crate::{CommonResult, DEBUG_OTP_MOD, OtpFieldError};

/// A cell shows at most this many grapheme clusters.
pub const CELL_MAX_LENGTH: usize = 1;

/// The caller's declaration of one cell. It only carries presentation attributes; the
/// character that the cell shows always comes from the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OtpCellSpec {
    pub style: CellStyle,
}

/// Everything that can be composed inside an OTP field. Only [`OtpChild::Cell`] is
/// valid; anything else is reported when the field is rendered, see
/// [`OtpFieldError::UnrecognizedChild`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpChild {
    Cell(OtpCellSpec),
    Foreign { type_name: String },
}

impl OtpChild {
    #[must_use]
    pub fn cell() -> Self { OtpChild::Cell(OtpCellSpec::default()) }

    #[must_use]
    pub fn styled_cell(style: CellStyle) -> Self { OtpChild::Cell(OtpCellSpec { style }) }

    #[must_use]
    pub fn foreign(type_name: impl Into<String>) -> Self {
        OtpChild::Foreign {
            type_name: type_name.into(),
        }
    }

    #[must_use]
    pub fn is_cell(&self) -> bool { matches!(self, OtpChild::Cell(_)) }
}

/// `number_of_digits` plain cells.
#[must_use]
pub fn otp_cells(number_of_digits: usize) -> Vec<OtpChild> {
    (0..number_of_digits).map(|_| OtpChild::cell()).collect()
}

/// Recomputed by the coordinator on every render and handed to
/// [`OtpCellRenderer::render`]. Never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDescriptor {
    pub index: usize,
    pub character: CellText,
}

/// The rendered form of one cell, ready to be laid out and painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub index: usize,
    pub text: CellText,
    pub max_length: usize,
    pub input_mode: InputModeHint,
    pub text_assistance: TextAssistance,
    pub style: CellStyle,
}

impl CellView {
    #[must_use]
    pub fn is_filled(&self) -> bool { !self.text.is_empty() }
}

/// What happens to an edit that did not come through the coordinator. Such edits are
/// always thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDisposition {
    Discarded,
}

#[derive(Debug)]
pub struct OtpCellRenderer;

impl OtpCellRenderer {
    /// Renders one cell. `maybe_context` is the configuration of the field that owns
    /// the cell.
    ///
    /// # Errors
    ///
    /// [`OtpFieldError::MissingContext`] if the cell is rendered without a field
    /// configuration.
    pub fn render(
        maybe_context: Option<&OtpConfig>,
        descriptor: CellDescriptor,
        spec: &OtpCellSpec,
    ) -> CommonResult<CellView> {
        let Some(config) = maybe_context else {
            return Err(OtpFieldError::MissingContext {
                index: descriptor.index,
            }
            .into());
        };

        let text = descriptor
            .character
            .graphemes(true)
            .take(CELL_MAX_LENGTH)
            .fold(CellText::new(), |mut acc, grapheme| {
                acc.push_str(grapheme);
                acc
            });

        Ok(CellView {
            index: descriptor.index,
            text,
            max_length: CELL_MAX_LENGTH,
            input_mode: config.input_mode_hint(),
            text_assistance: TextAssistance::OFF,
            style: spec.style,
        })
    }

    /// Direct edits to a cell are always thrown away. The character in a cell only ever
    /// changes via [`crate::OtpCoordinator::on_key`] or
    /// [`crate::OtpCoordinator::on_paste`].
    #[must_use]
    pub fn handle_change(view: &CellView, proposed_text: &str) -> ChangeDisposition {
        DEBUG_OTP_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🔢 OtpCellRenderer::handle_change -> discarded",
                index = %view.index,
                current = %view.text,
                proposed = ?proposed_text,
            );
        });
        ChangeDisposition::Discarded
    }
}
