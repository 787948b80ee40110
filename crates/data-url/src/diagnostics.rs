//! Where decode failures get reported.

use crate::decode::DecodeError;

/// Receives decode failures before they are returned to the caller.
pub trait DecodeDiagnostics {
    fn decode_failed(&self, payload: &str, error: &DecodeError);
}

/// Emits a `warn` event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DecodeDiagnostics for TracingDiagnostics {
    fn decode_failed(&self, payload: &str, error: &DecodeError) {
        tracing::warn!(payload_len = payload.len(), %error, "failed to decode base64 payload");
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DecodeDiagnostics for NoopDiagnostics {
    fn decode_failed(&self, _payload: &str, _error: &DecodeError) {}
}

impl<F> DecodeDiagnostics for F
where
    F: Fn(&str, &DecodeError),
{
    fn decode_failed(&self, payload: &str, error: &DecodeError) {
        self(payload, error)
    }
}
