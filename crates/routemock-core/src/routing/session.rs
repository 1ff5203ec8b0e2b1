//! Collaborator seam for host sessions.
//!
//! The host (a browser-automation page, an HTTP proxy, the in-process
//! [`StubSession`](crate::routing::StubSession)) owns the registration table
//! and the request pipeline; this crate only issues registration and
//! fulfillment decisions through the traits below.

use crate::types::response::MockResponse;
use thiserror::Error;

/// Outcome of a per-request decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Let the request proceed to its original destination unmodified
    Forward,
    /// Answer the request with a synthesized response, without touching
    /// the real network
    Fulfill(MockResponse),
}

/// Intercepted request, as exposed by the host session.
pub trait InterceptedRequest {
    /// HTTP method of the request (e.g. `"GET"`)
    fn method(&self) -> &str;
    /// Full request URL
    fn url(&self) -> &str;
}

/// Per-request decision callback registered against a URL pattern.
pub type RouteHandler =
    Box<dyn Fn(&dyn InterceptedRequest) -> Result<Action, RoutingError> + Send + Sync>;

/// Request-interception capability required from the host.
///
/// The host owns the handler table. Registering a second handler for a
/// pattern string already present must supersede the first one entirely;
/// the mock router relies on that to give duplicate-pattern rules
/// last-registration-wins semantics.
pub trait Session {
    /// Register `handler` to be invoked once per request whose URL matches
    /// `pattern`. Pattern syntax is the host's; it is never validated or
    /// reinterpreted by the caller, so a malformed pattern surfaces as
    /// whatever error the host raises.
    fn on_request_matching(
        &mut self,
        pattern: &str,
        handler: RouteHandler,
    ) -> Result<(), RoutingError>;
}

/// Routing error
///
/// No local recovery and no retry anywhere: every failure propagates to the
/// test that installed the rules.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Host rejected a pattern registration; the host's error is passed
    /// through unmodified
    #[error("{0}")]
    Registration(Box<dyn std::error::Error + Send + Sync>),
    /// Response body could not be JSON-encoded at synthesis time
    #[error("failed to serialize response body: {0}")]
    Body(#[from] serde_json::Error),
}
