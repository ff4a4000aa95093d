// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_otp_field
//!
//! A one-time-passcode entry field for terminal apps. It shows a row of single
//! character cells, while the rest of your app only ever deals with one code value.
//!
//! ```text
//! ╭─╮ ╭─╮ ╭─╮ ╭─╮ ╭─╮ ╭─╮
//! │4│ │2│ │7│ │▁│ │ │ │ │
//! ╰─╯ ╰─╯ ╰─╯ ╰─╯ ╰─╯ ╰─╯
//! ```
//!
//! - Typing a character fills the focused cell and moves focus to the next one.
//! - <kbd>Backspace</kbd> clears the focused cell and the one before it, and moves focus
//!   back.
//! - Pasting (bracketed paste, or <kbd>Ctrl+V</kbd> / <kbd>Shift+Insert</kbd> from the
//!   system clipboard) spreads the text over the cells. Text that is at least as long
//!   as the code replaces all of it.
//! - Once every cell is filled, the completion callback is called with the code. It is
//!   not called again until a cell is emptied and the code is filled once more.
//!
//! # Example
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use r3bl_otp_field::*;
//!
//! let completed = Rc::new(RefCell::new(None));
//! let completed_clone = completed.clone();
//!
//! let children = otp_cells(4);
//! let mut coordinator = OtpCoordinator::new(&children, false)
//!     .unwrap()
//!     .with_on_complete(move |code| *completed_clone.borrow_mut() = Some(code.to_string()));
//! let mut focus = HasCellFocus::new(coordinator.number_of_digits());
//! let mut clipboard = TestClipboard::default();
//!
//! coordinator.apply_event(
//!     InputEvent::BracketedPaste("1234".into()),
//!     &mut focus,
//!     &mut clipboard,
//! );
//!
//! assert_eq!(coordinator.value(), "1234");
//! assert_eq!(focus.focused_cell(), Some(3));
//! assert_eq!(completed.borrow().as_deref(), Some("1234"));
//!
//! let views = coordinator.render(&children).unwrap();
//! assert_eq!(views[0].text.as_str(), "1");
//! ```
//!
//! Run the `otp` binary to try it out in your terminal: `cargo run --bin otp -- --help`.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod tui;

// Re-export.
pub use core::*;
pub use tui::*;
