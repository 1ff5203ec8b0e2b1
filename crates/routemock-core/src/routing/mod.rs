//! Request interception routing.
//!
//! This module provides the mock router and its collaborator seam:
//! - [`install_mocks`]: registers one handler per rule on a host session
//! - [`Session`]: the request-interception capability the host must expose
//! - [`StubSession`]: an in-process session for hermetic tests

pub mod router;
pub mod session;
pub mod stub;

pub use router::install_mocks;
pub use session::{Action, InterceptedRequest, RouteHandler, RoutingError, Session};
pub use stub::{Dispatch, StubSession};
