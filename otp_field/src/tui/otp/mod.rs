// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One-time-passcode entry field. An [`OtpCoordinator`] owns the code, and renders
//! each declared cell with [`OtpCellRenderer`]. See [`render_otp_field`] for how the
//! cells end up on the terminal.

// Attach sources.
pub mod otp_cell;
pub mod otp_code;
pub mod otp_config;
pub mod otp_coordinator;
pub mod otp_event;
pub mod otp_focus;
pub mod otp_render;

// Re-export.
pub use otp_cell::*;
pub use otp_code::*;
pub use otp_config::*;
pub use otp_coordinator::*;
pub use otp_event::*;
pub use otp_focus::*;
pub use otp_render::*;
