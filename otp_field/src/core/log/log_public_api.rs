// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;

use super::TracingConfig;
use crate::ok;

/// Global default subscriber, which once set, can't be unset or changed. This is what
/// the `otp` binary uses.
///
/// Logging is **DISABLED** by **default**. If the level filter is
/// [`LevelFilter::OFF`] nothing is installed, and the [`tracing::info!`],
/// [`tracing::debug!`], etc. macros sprinkled through this crate are no-ops.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Same as [`try_initialize_logging_global`], but scoped to the current thread until
/// the returned guard is dropped. Useful in tests.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
