//! Mock router: handler installation and the per-request decision.

use crate::routing::session::{Action, RouteHandler, RoutingError, Session};
use crate::types::rule::MockRule;
use tracing::debug;

/// Install one interception handler per rule on `session`.
///
/// Handlers are registered in rule order. The session keys its table by
/// pattern string, so a later rule with the same `url_pattern` supersedes
/// the earlier one for that pattern; the earlier rule's method/response
/// pairing becomes unreachable. That aliasing is observable contract, not
/// an accident.
///
/// Installation itself performs no network requests and no pattern
/// validation; a registration failure from the session aborts installation
/// and propagates unmodified.
pub fn install_mocks<S: Session + ?Sized>(
    session: &mut S,
    rules: &[MockRule],
) -> Result<(), RoutingError> {
    for rule in rules {
        debug!(
            pattern = %rule.url_pattern,
            method = %rule.method,
            "registering mock route"
        );
        let pattern = rule.url_pattern.clone();
        session.on_request_matching(&pattern, request_handler(rule.clone()))?;
    }
    Ok(())
}

/// Build the per-request decision for one rule.
///
/// The closure captures the rule by value; every decision depends only on
/// that immutable snapshot, so concurrent invocations for different
/// patterns share no state.
fn request_handler(rule: MockRule) -> RouteHandler {
    Box::new(move |request| {
        if request.method() != rule.method {
            debug!(
                url = %request.url(),
                method = %request.method(),
                expected = %rule.method,
                "method mismatch, forwarding"
            );
            return Ok(Action::Forward);
        }

        let response = rule.to_response()?;
        debug!(
            url = %request.url(),
            status = response.status,
            "fulfilling with mock response"
        );
        Ok(Action::Fulfill(response))
    })
}
