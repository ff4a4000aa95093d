// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Result and error types shared by the whole crate.
//!
//! Two kinds of errors live here:
//! 1. [`OtpFieldError`] is the typed, [`miette::Diagnostic`] error for programmer
//!    mistakes in composing the field (unrecognized child, missing context, no cells).
//! 2. [`CommonError`] is for everything else that can go wrong around the field, like
//!    the terminal being too small to paint it.
//!
//! Both end up inside a [`CommonResult`], which is just [`miette::Result`].

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// # Example
///
/// ```
/// use r3bl_otp_field::{CommonError, CommonErrorType, CommonResult};
///
/// fn check_width(cols: u16) -> CommonResult<u16> {
///     if cols < 10 {
///         return CommonError::new_error_result(
///             CommonErrorType::DisplaySizeTooSmall,
///             "need at least 10 cols",
///         );
///     }
///     Ok(cols)
/// }
///
/// assert!(check_width(5).is_err());
/// assert_eq!(check_width(40).unwrap(), 40);
/// ```
pub type CommonResult<T> = miette::Result<T>;

#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonErrorType {
    DisplaySizeTooSmall,
}

impl Error for CommonError {}

/// Same as the [`Debug`] output, which is derived above.
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// # Errors
    ///
    /// Always returns an error, with the given type and message.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: msg.to_string(),
        }))
    }
}

/// Structural errors in how an OTP field is composed or used. These are raised loudly
/// and immediately, since the caller has to fix their code. Malformed *events* are never
/// reported with this type; they are ignored and logged instead.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum OtpFieldError {
    #[error("🔢 An OTP field needs at least one cell, but none were declared")]
    #[diagnostic(
        code(r3bl_otp_field::no_cells),
        help("Pass at least one `OtpChild::Cell` when creating the coordinator")
    )]
    NoCells,

    #[error("🧩 Child at index {index} is a `{type_name}`, which is not an OTP cell")]
    #[diagnostic(
        code(r3bl_otp_field::unrecognized_child),
        help("Only `OtpChild::Cell` can be composed inside an OTP field")
    )]
    UnrecognizedChild { index: usize, type_name: String },

    #[error("🚫 Cell at index {index} was rendered outside of an OTP field")]
    #[diagnostic(
        code(r3bl_otp_field::missing_context),
        help("Cells must be rendered by `OtpCoordinator::render`, which supplies the config")
    )]
    MissingContext { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_error_carries_type_and_message() {
        let result: CommonResult<()> = CommonError::new_error_result(
            CommonErrorType::DisplaySizeTooSmall,
            "window is tiny",
        );
        let report_str = result.unwrap_err().to_string();
        assert!(report_str.contains("DisplaySizeTooSmall"));
        assert!(report_str.contains("window is tiny"));
    }

    #[test]
    fn test_otp_field_error_is_downcastable_from_report() {
        let result: CommonResult<()> = Err(OtpFieldError::MissingContext { index: 3 }.into());
        let report = result.unwrap_err();
        assert_eq!(
            report.downcast_ref::<OtpFieldError>(),
            Some(&OtpFieldError::MissingContext { index: 3 })
        );
        assert!(report.to_string().contains("index 3"));
    }
}
