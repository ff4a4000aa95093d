// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

use super::{ClipboardResult, ClipboardService};
use crate::DEBUG_OTP_COPY_PASTE;

#[derive(Debug)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
        let mut ctx = ClipboardContext::new()?;
        let content = ctx.get_contents()?;

        DEBUG_OTP_COPY_PASTE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋📋📋 Text was read from the system clipboard",
                char_count = %content.chars().count(),
            );
        });

        Ok(content)
    }
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    /// In memory clipboard. When `content` is [None] reads fail, like they would when
    /// there is no display server.
    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: Option<String>,
    }

    impl TestClipboard {
        #[must_use]
        pub fn new(content: &str) -> Self {
            Self {
                content: Some(content.to_string()),
            }
        }
    }

    impl ClipboardService for TestClipboard {
        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            self.content
                .clone()
                .ok_or_else(|| "clipboard is unavailable".into())
        }
    }
}
