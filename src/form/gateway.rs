//! Backend boundary for submitting a completed application.
//!
//! The form never talks to the network directly; it hands a validated record
//! to a [`SubmissionGateway`] and polls for the outcome from its tick pass.
//! The shipped implementation is a fixed-delay stub; the real portal backend
//! plugs in behind the same trait without touching the form.

use std::fmt;

use super::state::ApplicationRecord;

/// Failure reason reported by the gateway. Logged for diagnostics only; the
/// applicant sees a fixed generic message instead.
#[derive(Clone, Debug, PartialEq)]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// One request in, one outcome out.
pub trait SubmissionGateway {
    /// Begin a submission attempt. The caller holds the in-flight guard: at
    /// most one attempt is running until `poll` yields its outcome.
    fn start(&mut self, record: &ApplicationRecord);

    /// Advance the in-flight request by `delta_ticks`. Yields the outcome
    /// exactly once when the request completes; `None` while pending or when
    /// nothing is in flight.
    fn poll(&mut self, delta_ticks: u32) -> Option<Result<(), GatewayError>>;
}

/// Ticks until the stub reports success (1.5 s at 10 ticks/sec).
pub const STUB_DELAY_TICKS: u32 = 15;

/// Fixed-delay stand-in for the portal backend.
///
/// Serializes the record to the JSON wire payload (what a real gateway would
/// `POST /api/applications`) and logs it, then completes successfully after
/// [`STUB_DELAY_TICKS`].
pub struct StubGateway {
    ticks_left: Option<u32>,
}

impl StubGateway {
    pub fn new() -> Self {
        Self { ticks_left: None }
    }
}

impl SubmissionGateway for StubGateway {
    fn start(&mut self, record: &ApplicationRecord) {
        match serde_json::to_string(record) {
            Ok(payload) => log_info(&format!("submitting application: {payload}")),
            Err(err) => log_warn(&format!("application payload did not serialize: {err}")),
        }
        self.ticks_left = Some(STUB_DELAY_TICKS);
    }

    fn poll(&mut self, delta_ticks: u32) -> Option<Result<(), GatewayError>> {
        let remaining = self.ticks_left?.saturating_sub(delta_ticks);
        if remaining == 0 {
            self.ticks_left = None;
            Some(Ok(()))
        } else {
            self.ticks_left = Some(remaining);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn log_info(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log_info(message: &str) {
    let _ = message;
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn log_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log_warn(message: &str) {
    let _ = message;
}
