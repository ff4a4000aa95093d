// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{cursor::MoveTo,
                queue,
                style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor,
                        SetForegroundColor},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;

use super::{RenderOp, RenderOps};
use crate::{CommonResult, DEBUG_OTP_SHOW_TERMINAL_BACKEND};

/// Executes the [`RenderOps`] on the given output (usually a locked stdout) using
/// crossterm, and flushes once at the end.
///
/// # Errors
///
/// Returns an error if writing to, or flushing, the output fails.
pub fn paint_render_ops(
    render_ops: &RenderOps,
    output: &mut impl Write,
) -> CommonResult<()> {
    for render_op in render_ops.iter() {
        paint_render_op(render_op, output)?;
    }

    output.flush().into_diagnostic()?;

    DEBUG_OTP_SHOW_TERMINAL_BACKEND.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🎨 paint_render_ops -> flushed",
            op_count = %render_ops.len(),
        );
    });

    Ok(())
}

fn paint_render_op(render_op: &RenderOp, output: &mut impl Write) -> CommonResult<()> {
    match render_op {
        RenderOp::ClearScreen => queue!(output, Clear(ClearType::All)),
        RenderOp::MoveCursorPositionAbs(pos) => {
            queue!(output, MoveTo(pos.col_index, pos.row_index))
        }
        RenderOp::SetFgColor(color) => queue!(output, SetForegroundColor(*color)),
        RenderOp::SetBgColor(color) => queue!(output, SetBackgroundColor(*color)),
        RenderOp::ApplyBold => queue!(output, SetAttribute(Attribute::Bold)),
        RenderOp::ResetColor => {
            queue!(output, ResetColor, SetAttribute(Attribute::Reset))
        }
        RenderOp::PaintText(text) => queue!(output, Print(text)),
    }
    .into_diagnostic()
}
