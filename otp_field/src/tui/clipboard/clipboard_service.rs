// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction for the clipboard service for dependency injection. This trait is
/// implemented by both a test clipboard service and a system clipboard service.
///
/// The OTP field only ever reads from the clipboard, when the user presses a paste
/// key combination (<kbd>Ctrl+V</kbd>, <kbd>Shift+Insert</kbd>).
pub trait ClipboardService {
    /// # Errors
    ///
    /// Returns an error if the clipboard is not available (eg: no display server) or
    /// if its content isn't text.
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}
