// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;
use unicode_width::UnicodeWidthStr;

use super::{CellStyle, CellView, OtpFieldProps};
use crate::{BorderGlyphCharacter, CELL_BOX_HEIGHT, CommonError, CommonErrorType,
            CommonResult, EMPTY_CELL_GLYPH, FOCUSED_EMPTY_CELL_GLYPH, Pos, RenderOp,
            RenderOps, Size, pos};

/// Lays out the given cells as a row of boxes, centered in a window of `window_size`,
/// with the label (if any) above them and the input mode hint below them.
///
/// ```text
/// Enter the code
/// ╭─╮ ╭─╮ ╭─╮ ╭─╮
/// │1│ │2│ │▁│ │ │
/// ╰─╯ ╰─╯ ╰─╯ ╰─╯
/// digits only
/// ```
///
/// Every box is as wide as the widest grapheme in the row (most are 1 column, some
/// are 2), so that the row stays aligned.
///
/// # Errors
///
/// [`CommonErrorType::DisplaySizeTooSmall`] if the field doesn't fit in the window.
pub fn render_otp_field(
    views: &[CellView],
    props: &OtpFieldProps,
    window_size: Size,
    maybe_focused: Option<usize>,
) -> CommonResult<RenderOps> {
    let layout = OtpFieldLayout::new(views, props);
    let origin = layout.try_center_in(window_size)?;

    let mut render_ops = RenderOps::new();
    render_ops += RenderOp::ClearScreen;

    let mut row = origin;

    if let Some(label) = &props.maybe_label {
        render_ops += paint_styled_text(row, label, props.style);
        row = row.add_rows(1);
    }

    // The label or hint may be wider than the row of boxes.
    let mut cell_origin = row.add_cols((layout.width - layout.row_width) / 2);
    for view in views {
        let is_focused = maybe_focused == Some(view.index);
        render_ops += paint_cell_box(cell_origin, view, layout.content_width, is_focused, props);
        cell_origin = cell_origin.add_cols(layout.box_width + props.gap);
    }
    row = row.add_rows(CELL_BOX_HEIGHT);

    if let Some(hint) = &layout.maybe_hint {
        render_ops += paint_styled_text(row, hint, props.style);
    }

    Ok(render_ops)
}

/// Message shown instead of the field when the window is too small.
#[must_use]
pub fn render_window_too_small(window_size: Size) -> RenderOps {
    let mut render_ops = RenderOps::new();
    render_ops += RenderOp::ClearScreen;
    render_ops += RenderOp::MoveCursorPositionAbs(pos(0, 0));
    render_ops += RenderOp::SetFgColor(Color::Red);
    render_ops += RenderOp::PaintText(format!(
        "Window is too small ({}x{})",
        window_size.col_width, window_size.row_height
    ));
    render_ops += RenderOp::ResetColor;
    render_ops
}

#[derive(Debug)]
struct OtpFieldLayout {
    content_width: u16,
    box_width: u16,
    row_width: u16,
    width: u16,
    height: u16,
    maybe_hint: Option<String>,
}

impl OtpFieldLayout {
    fn new(views: &[CellView], props: &OtpFieldProps) -> Self {
        let content_width = views
            .iter()
            .map(|view| display_width(&view.text))
            .max()
            .unwrap_or(1)
            .max(1);
        let box_width = content_width + 2;

        let cell_count = u16::try_from(views.len()).unwrap_or(u16::MAX);
        let row_width = cell_count
            .saturating_mul(box_width)
            .saturating_add(cell_count.saturating_sub(1).saturating_mul(props.gap));

        let maybe_hint = views
            .first()
            .map(|view| view.input_mode.as_ref().to_string());

        let label_width = props.maybe_label.as_deref().map_or(0, display_width);
        let hint_width = maybe_hint.as_deref().map_or(0, display_width);

        let height = CELL_BOX_HEIGHT
            + u16::from(props.maybe_label.is_some())
            + u16::from(maybe_hint.is_some());

        Self {
            content_width,
            box_width,
            row_width,
            width: row_width.max(label_width).max(hint_width),
            height,
            maybe_hint,
        }
    }

    fn try_center_in(&self, window_size: Size) -> CommonResult<Pos> {
        if self.width > window_size.col_width || self.height > window_size.row_height {
            return CommonError::new_error_result(
                CommonErrorType::DisplaySizeTooSmall,
                &format!(
                    "OTP field needs {}x{}, window is {}x{}",
                    self.width, self.height, window_size.col_width, window_size.row_height
                ),
            );
        }
        Ok(pos(
            (window_size.col_width - self.width) / 2,
            (window_size.row_height - self.height) / 2,
        ))
    }
}

fn display_width(text: &str) -> u16 { u16::try_from(text.width()).unwrap_or(u16::MAX) }

fn paint_styled_text(origin: Pos, text: &str, style: CellStyle) -> RenderOps {
    let mut render_ops = RenderOps::new();
    render_ops += RenderOp::MoveCursorPositionAbs(origin);
    render_ops += apply_style(style);
    render_ops += RenderOp::PaintText(text.to_string());
    render_ops += RenderOp::ResetColor;
    render_ops
}

fn apply_style(style: CellStyle) -> RenderOps {
    let mut render_ops = RenderOps::new();
    if let Some(color) = style.maybe_fg_color {
        render_ops += RenderOp::SetFgColor(color);
    }
    if let Some(color) = style.maybe_bg_color {
        render_ops += RenderOp::SetBgColor(color);
    }
    if style.bold {
        render_ops += RenderOp::ApplyBold;
    }
    render_ops
}

fn paint_cell_box(
    origin: Pos,
    view: &CellView,
    content_width: u16,
    is_focused: bool,
    props: &OtpFieldProps,
) -> RenderOps {
    let border_style = if is_focused {
        view.style.fg(props.focused_border_color).bold()
    } else {
        view.style
    };

    let horizontal = BorderGlyphCharacter::Horizontal
        .as_ref()
        .repeat(usize::from(content_width));
    let top = format!(
        "{}{horizontal}{}",
        BorderGlyphCharacter::TopLeft.as_ref(),
        BorderGlyphCharacter::TopRight.as_ref()
    );
    let bottom = format!(
        "{}{horizontal}{}",
        BorderGlyphCharacter::BottomLeft.as_ref(),
        BorderGlyphCharacter::BottomRight.as_ref()
    );

    let content = match (view.is_filled(), is_focused) {
        (true, _) => view.text.as_str(),
        (false, true) => FOCUSED_EMPTY_CELL_GLYPH,
        (false, false) => EMPTY_CELL_GLYPH,
    };
    let padding = " ".repeat(usize::from(
        content_width.saturating_sub(display_width(content)),
    ));
    let vertical = BorderGlyphCharacter::Vertical.as_ref();

    let mut render_ops = RenderOps::new();
    render_ops += paint_styled_text(origin, &top, border_style);
    render_ops += paint_styled_text(origin.add_rows(1), vertical, border_style);
    render_ops += paint_styled_text(
        origin.add_rows(1).add_cols(1),
        &format!("{content}{padding}"),
        view.style,
    );
    render_ops += paint_styled_text(
        origin.add_rows(1).add_cols(1 + content_width),
        vertical,
        border_style,
    );
    render_ops += paint_styled_text(origin.add_rows(2), &bottom, border_style);
    render_ops
}
