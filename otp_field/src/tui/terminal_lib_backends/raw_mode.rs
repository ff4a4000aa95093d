// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Write, stdout};

use crossterm::{cursor::{Hide, Show},
                event::{DisableBracketedPaste, EnableBracketedPaste},
                execute,
                terminal::{self, Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};
use miette::IntoDiagnostic;

use crate::{CommonResult, DEBUG_OTP_SHOW_TERMINAL_BACKEND};

/// RAII guard for the terminal. Creating it enters raw mode, enables bracketed paste,
/// switches to the alternate screen, clears it and hides the cursor. Dropping it undoes
/// all of that, in reverse order, even when the app returns early with an error.
///
/// Bracketed paste lets the terminal deliver pasted text in one chunk, as
/// [`crate::InputEvent::BracketedPaste`], instead of as a stream of key presses.
///
/// More info: <https://en.wikipedia.org/wiki/Bracketed-paste>
#[derive(Debug)]
pub struct RawMode {
    _private: (),
}

impl RawMode {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be put into raw mode, or if the setup
    /// commands can't be written to stdout.
    pub fn try_enter() -> CommonResult<Self> {
        terminal::enable_raw_mode().into_diagnostic()?;

        // Construct the guard first, so that a failure below still restores the
        // terminal.
        let it = Self { _private: () };

        execute!(
            stdout(),
            EnableBracketedPaste,
            EnterAlternateScreen,
            Clear(ClearType::All),
            Hide
        )
        .into_diagnostic()?;

        DEBUG_OTP_SHOW_TERMINAL_BACKEND.then(|| {
            tracing::debug!(
                message = "RawMode -> enable_raw_mode, EnableBracketedPaste, EnterAlternateScreen, Hide"
            );
        });

        Ok(it)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let mut output = stdout();
        if let Err(err) =
            execute!(output, Show, LeaveAlternateScreen, DisableBracketedPaste)
        {
            tracing::warn!(message = "RawMode -> failed to restore terminal", error = ?err);
        }
        output.flush().ok();
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(message = "RawMode -> failed to disable raw mode", error = ?err);
        }

        DEBUG_OTP_SHOW_TERMINAL_BACKEND.then(|| {
            tracing::debug!(
                message = "RawMode -> Show, LeaveAlternateScreen, DisableBracketedPaste, disable_raw_mode"
            );
        });
    }
}
