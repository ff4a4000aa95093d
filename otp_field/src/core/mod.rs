// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod log;

// Re-export.
pub use common::*;
pub use log::*;
