//! Mock rule definition.

use crate::types::response::{MockResponse, DEFAULT_CONTENT_TYPE, DEFAULT_STATUS};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body for a mock rule.
///
/// The shape is decided when the rule is built (or deserialized), not by
/// inspecting the value at response time: a string is always `Raw` and is
/// sent verbatim, anything else is `Json` and is serialized at response
/// time. `Raw` is listed first so that untagged deserialization maps JSON
/// strings to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Body {
    /// Verbatim body text (allows non-JSON payloads)
    Raw(String),
    /// Structured value, JSON-serialized at response time
    Json(Value),
}

impl Body {
    /// Render the body as response text.
    ///
    /// `Json` values are serialized with 2-space indentation; the
    /// indentation is cosmetic and callers must not rely on it.
    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        match self {
            Body::Raw(text) => Ok(text.clone()),
            Body::Json(value) => serde_json::to_string_pretty(value),
        }
    }
}

/// Declarative rule describing how to answer a class of intercepted
/// requests.
///
/// Rules are immutable value objects carrying no identity beyond their
/// pattern string. The wire shape matches the rule files consumed by the
/// test suites: `url`, `method`, `body`, optional `status` and
/// `contentType`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MockRule {
    /// URL pattern matched against the full request URL. Glob-style
    /// (`*`, `**`); the pattern string is passed to the host session
    /// unchanged and never reinterpreted here.
    #[serde(rename = "url")]
    pub url_pattern: String,
    /// HTTP method to match, exact and case-sensitive (e.g. `"GET"`).
    /// Every rule names exactly one method.
    pub method: String,
    /// Response payload
    pub body: Body,
    /// HTTP status code (default: 200)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Response content type (default: "application/json")
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl MockRule {
    /// Synthesize the response this rule answers with.
    ///
    /// Applies the status and content-type defaults and renders the body.
    /// A body that cannot be JSON-encoded surfaces as an error here, at
    /// response-synthesis time.
    pub fn to_response(&self) -> Result<MockResponse, serde_json::Error> {
        Ok(MockResponse {
            status: self.status.unwrap_or(DEFAULT_STATUS),
            content_type: self
                .content_type
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned()),
            body: self.body.to_text()?,
        })
    }
}
