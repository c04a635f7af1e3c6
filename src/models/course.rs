//! Course data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A course in the catalog.
///
/// # Database Table
///
/// Maps to the `courses` table. A course owns an ordered list of lessons
/// (see [`crate::models::lesson::Lesson`]).
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "title": "Introduction to Rust",
///   "description": "Ownership, borrowing and the type system",
///   "image_url": "https://images.example/rust.png",
///   "created_at": "2025-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Course {
    /// Unique identifier for this course
    pub id: i32,

    pub title: String,

    pub description: String,

    /// Cover image shown on course cards
    #[serde(default)]
    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,
}
