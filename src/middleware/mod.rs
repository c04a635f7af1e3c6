//! HTTP middleware components.
//!
//! Middleware run before route handlers and may short-circuit the request
//! (for example, rejecting a request without a valid API key).

/// API key authentication middleware
pub mod auth;
