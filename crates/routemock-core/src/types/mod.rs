//! Core domain types for mock rules and synthesized responses.

pub mod response;
pub mod rule;
