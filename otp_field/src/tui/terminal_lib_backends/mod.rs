// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Thin layer between crossterm and the OTP field. Input goes in as
//! [`crossterm::event::Event`] and comes out as [`InputEvent`]. Output goes in as
//! [`RenderOps`] and is painted with crossterm.

// Attach sources.
pub mod input_event;
pub mod keypress;
pub mod modifier_keys_mask;
pub mod paint;
pub mod raw_mode;
pub mod render_op;

// Re-export.
pub use input_event::*;
pub use keypress::*;
pub use modifier_keys_mask::*;
pub use paint::*;
pub use raw_mode::*;
pub use render_op::*;
