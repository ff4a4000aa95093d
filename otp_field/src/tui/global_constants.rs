// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::AsRefStr;

/// Every cell is drawn as a box that is this many rows tall: top border, content,
/// bottom border.
pub const CELL_BOX_HEIGHT: u16 = 3;

/// Shown in the content row of a cell that has no character yet.
pub const EMPTY_CELL_GLYPH: &str = " ";

/// Shown in the content row of a focused cell that has no character yet.
pub const FOCUSED_EMPTY_CELL_GLYPH: &str = "▁";

#[derive(Debug, Eq, PartialEq, AsRefStr)]
pub enum BorderGlyphCharacter {
    #[strum(to_string = "╮")]
    TopRight,

    #[strum(to_string = "╭")]
    TopLeft,

    #[strum(to_string = "╯")]
    BottomRight,

    #[strum(to_string = "╰")]
    BottomLeft,

    #[strum(to_string = "─")]
    Horizontal,

    #[strum(to_string = "│")]
    Vertical,
}
