//! Data models.
//!
//! Catalog entities (courses, lessons) and the API key credential set.

/// API key credential set
pub mod api_key;
/// Course model
pub mod course;
/// Lesson model
pub mod lesson;
