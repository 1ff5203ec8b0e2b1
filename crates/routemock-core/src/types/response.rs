//! Synthesized response type.

/// Default status code applied when a rule omits `status`.
pub const DEFAULT_STATUS: u16 = 200;

/// Default content type applied when a rule omits `contentType`.
///
/// Applied regardless of body shape: a raw text body with no explicit
/// content type is still reported as JSON. Preserved from the original
/// behavior on purpose.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Fully synthesized response, ready to be handed to the host session's
/// fulfill call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    /// HTTP status code (100-599)
    pub status: u16,
    /// Response content type
    pub content_type: String,
    /// Response body text
    pub body: String,
}
