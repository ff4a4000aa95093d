// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Registers the graphical [`miette`] report handler for the `otp` binary. The hook is
/// lazy, so the terminal width is only measured when a report is actually printed.
///
/// Errors from [`miette::set_hook`] (a hook is already installed) are ignored.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = usize::from(
                crossterm::terminal::size()
                    .map(|(columns, _rows)| columns)
                    .unwrap_or(80),
            );
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(2)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
