// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// What the OTP field did with an event. The host uses this to decide whether to
/// re-render, and whether it should handle the event itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpApplyResponse {
    /// The code changed (and focus may have moved). Re-render.
    UpdatedCode,
    /// The event was swallowed without changing anything.
    Consumed,
    /// The field did not act on the event. It belongs to the host.
    Propagate,
}

impl OtpApplyResponse {
    #[must_use]
    pub fn is_code_changed(&self) -> bool { matches!(self, OtpApplyResponse::UpdatedCode) }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(OtpApplyResponse::UpdatedCode, true)]
    #[test_case(OtpApplyResponse::Consumed, false)]
    #[test_case(OtpApplyResponse::Propagate, false)]
    fn test_only_updated_code_asks_for_repaint(response: OtpApplyResponse, expected: bool) {
        assert_eq2!(response.is_code_changed(), expected);
    }
}
