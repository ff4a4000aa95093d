// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns `Ok(())`. Saves having to write
/// `Ok(())` at the end of functions that return a [`Result`].
///
/// ```
/// use r3bl_otp_field::{CommonResult, throws};
///
/// fn do_it() -> CommonResult<()> {
///     throws!({
///         let _ = 1 + 1;
///     });
/// }
/// assert!(do_it().is_ok());
/// ```
#[macro_export]
macro_rules! throws {
  ($it: block) => {{
    $it
    return Ok(())
  }};
  ($it: stmt) => {{
    $it
    return Ok(())
  }};
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
