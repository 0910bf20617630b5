//! Per-call outcome of one lifecycle REST step.

/// Outcome of a single lifecycle REST call.
///
/// Constructed per call by the sequencer and never persisted beyond the
/// calling scope; the raw body is kept so failures can be diagnosed
/// without re-running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleOperationResult {
    /// True when the call returned HTTP OK with a clear error flag
    pub succeeded: bool,
    /// HTTP status code of the response
    pub http_status: u16,
    /// Value of the response's `error` flag
    pub error_flag: bool,
    /// The raw response body
    pub raw_body: String,
}

impl LifecycleOperationResult {
    /// Build the outcome of one call from its observed pieces.
    #[must_use]
    pub const fn new(http_status: u16, error_flag: bool, raw_body: String, ok_status: u16) -> Self {
        Self {
            succeeded: http_status == ok_status && !error_flag,
            http_status,
            error_flag,
            raw_body,
        }
    }
}
