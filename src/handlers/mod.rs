//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (path params, shared state)
//! 2. Reads from the catalog
//! 3. Returns an HTTP response (JSON, status code)

/// Course endpoints
pub mod courses;
/// Landing page, OpenAPI document and Swagger UI
pub mod docs;
/// Service health
pub mod health;
/// Lesson endpoints
pub mod lessons;
