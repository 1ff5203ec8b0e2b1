//! In-process session for hermetic tests.
//!
//! `StubSession` stands in for a real browser page: it keeps a
//! pattern-keyed routing table and simulates the real network with an
//! origin closure. Consumers exercise installed mocks by calling
//! [`StubSession::dispatch`] with a method and URL, the same inputs the
//! host pipeline would feed a handler.

use crate::routing::session::{Action, InterceptedRequest, RouteHandler, RoutingError, Session};
use crate::types::response::MockResponse;
use glob::Pattern;

/// Outcome of dispatching one request through the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A handler fulfilled the request; the mock response was observed
    Mocked(MockResponse),
    /// The request reached the origin (no pattern matched, or the matching
    /// pattern's handler forwarded); the origin's response was observed
    Forwarded(MockResponse),
}

struct RegisteredRoute {
    pattern: String,
    matcher: Pattern,
    handler: RouteHandler,
}

struct StubRequest<'a> {
    method: &'a str,
    url: &'a str,
}

impl InterceptedRequest for StubRequest<'_> {
    fn method(&self) -> &str {
        self.method
    }
    fn url(&self) -> &str {
        self.url
    }
}

/// In-process [`Session`] backed by glob pattern matching.
pub struct StubSession {
    routes: Vec<RegisteredRoute>,
    origin: Box<dyn Fn(&str, &str) -> MockResponse + Send + Sync>,
}

impl StubSession {
    /// Create a stub whose simulated real network answers with `origin`.
    ///
    /// `origin` receives the request method and URL.
    pub fn new<F>(origin: F) -> Self
    where
        F: Fn(&str, &str) -> MockResponse + Send + Sync + 'static,
    {
        Self {
            routes: Vec::new(),
            origin: Box::new(origin),
        }
    }

    /// Run one request through the routing table.
    ///
    /// Patterns are tried in registration order and the first match's
    /// handler decides; unmatched requests go straight to the origin,
    /// identical to having no mocking installed.
    pub fn dispatch(&self, method: &str, url: &str) -> Result<Dispatch, RoutingError> {
        for route in &self.routes {
            if !route.matcher.matches(url) {
                continue;
            }
            let request = StubRequest { method, url };
            return match (route.handler)(&request)? {
                Action::Fulfill(response) => Ok(Dispatch::Mocked(response)),
                Action::Forward => Ok(Dispatch::Forwarded((self.origin)(method, url))),
            };
        }
        Ok(Dispatch::Forwarded((self.origin)(method, url)))
    }

    /// Number of distinct registered patterns.
    pub fn pattern_count(&self) -> usize {
        self.routes.len()
    }
}

impl Session for StubSession {
    /// Register a handler, compiling the glob pattern eagerly.
    ///
    /// The table is keyed by the pattern string: re-registering an existing
    /// pattern replaces its handler in place, so the last registration wins
    /// for that pattern.
    fn on_request_matching(
        &mut self,
        pattern: &str,
        handler: RouteHandler,
    ) -> Result<(), RoutingError> {
        let matcher =
            Pattern::new(pattern).map_err(|e| RoutingError::Registration(Box::new(e)))?;
        if let Some(existing) = self.routes.iter_mut().find(|r| r.pattern == pattern) {
            existing.matcher = matcher;
            existing.handler = handler;
        } else {
            self.routes.push(RegisteredRoute {
                pattern: pattern.to_string(),
                matcher,
                handler,
            });
        }
        Ok(())
    }
}
