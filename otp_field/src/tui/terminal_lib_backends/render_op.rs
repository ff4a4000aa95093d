// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{AddAssign, Deref};

use crossterm::style::Color;
use smallvec::SmallVec;

/// Absolute position in the terminal, 0 based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub col_index: u16,
    pub row_index: u16,
}

#[must_use]
pub fn pos(col_index: u16, row_index: u16) -> Pos { Pos { col_index, row_index } }

impl Pos {
    #[must_use]
    pub fn add_cols(self, cols: u16) -> Self {
        pos(self.col_index.saturating_add(cols), self.row_index)
    }

    #[must_use]
    pub fn add_rows(self, rows: u16) -> Self {
        pos(self.col_index, self.row_index.saturating_add(rows))
    }
}

/// Backend agnostic paint instructions. These are produced by
/// [`crate::render_otp_field`] and executed by [`crate::paint_render_ops`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    ClearScreen,
    MoveCursorPositionAbs(Pos),
    SetFgColor(Color),
    SetBgColor(Color),
    ApplyBold,
    /// Resets colors *and* attributes.
    ResetColor,
    PaintText(String),
}

pub type InlineVecRenderOp = SmallVec<[RenderOp; 32]>;

/// Ordered list of [`RenderOp`]s. Use `+=` to append one, or another list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOps {
    pub list: InlineVecRenderOp,
}

impl RenderOps {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, op: RenderOp) { self.list.push(op); }

    /// All the text painted, in order, with nothing else. Handy in tests.
    #[must_use]
    pub fn painted_text(&self) -> Vec<&str> {
        self.list
            .iter()
            .filter_map(|op| match op {
                RenderOp::PaintText(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Deref for RenderOps {
    type Target = InlineVecRenderOp;

    fn deref(&self) -> &Self::Target { &self.list }
}

impl AddAssign<RenderOp> for RenderOps {
    fn add_assign(&mut self, rhs: RenderOp) { self.push(rhs); }
}

impl AddAssign<RenderOps> for RenderOps {
    fn add_assign(&mut self, rhs: RenderOps) { self.list.extend(rhs.list); }
}
