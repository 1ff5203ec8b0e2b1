//! RouteMock core library.
//!
//! A mock API routing layer for browser-driven end-to-end tests: declare a
//! list of [`MockRule`]s, install them on a host session that exposes
//! request interception, and matching requests get canned responses while
//! everything else reaches the real network.
//!
//! ```no_run
//! use routemock_core::{install_mocks, StubSession, MockRule, Body, MockResponse};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), routemock_core::RoutingError> {
//! let rules = vec![MockRule {
//!     url_pattern: "**/api/products".to_string(),
//!     method: "GET".to_string(),
//!     body: Body::Json(json!({"products": []})),
//!     status: None,
//!     content_type: None,
//! }];
//!
//! let mut session = StubSession::new(|_method, _url| MockResponse {
//!     status: 502,
//!     content_type: "text/plain".to_string(),
//!     body: "no origin".to_string(),
//! });
//! install_mocks(&mut session, &rules)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod routing;
pub mod types;

pub use config::{load_rules, ConfigError, RuleFile};
pub use routing::{
    install_mocks, Action, Dispatch, InterceptedRequest, RouteHandler, RoutingError, Session,
    StubSession,
};
pub use types::response::{MockResponse, DEFAULT_CONTENT_TYPE, DEFAULT_STATUS};
pub use types::rule::{Body, MockRule};
