// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Module scoped `DEBUG` consts. When set to `true` the relevant code paths emit
/// `tracing::debug!` events. Nothing is written anywhere unless logging has been
/// initialized, see [`crate::try_initialize_logging_global`].
pub const DEBUG_OTP_MOD: bool = true;

// Enable or disable debug logging for the clipboard and terminal backend.
pub const DEBUG_OTP_COPY_PASTE: bool = true;
pub const DEBUG_OTP_SHOW_TERMINAL_BACKEND: bool = false;

// Attach sources.
pub mod clipboard;
pub mod global_constants;
pub mod otp;
pub mod terminal_lib_backends;

// Re-export.
pub use clipboard::*;
pub use global_constants::*;
pub use otp::*;
pub use terminal_lib_backends::*;
