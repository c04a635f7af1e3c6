//! Lesson data models.
//!
//! This module defines:
//! - `Lesson`: a single lesson belonging to a course
//! - `Difficulty`: the easy / medium / hard rating shown on lesson pages
//! - `LessonRow`: the raw database row, with difficulty still as text

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Difficulty rating of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A lesson within a course.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 3,
///   "course_id": 1,
///   "title": "Borrowing",
///   "description": "Shared and mutable references",
///   "content": "A reference lets you use a value without taking ownership...",
///   "difficulty": "medium",
///   "image_url": null,
///   "duration": 25,
///   "lesson_order": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Lesson {
    pub id: i32,

    /// Course this lesson belongs to
    pub course_id: i32,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Lesson body (markdown)
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Expected duration in minutes
    #[serde(default)]
    pub duration: Option<i32>,

    /// Position of the lesson within its course (ascending)
    pub lesson_order: i32,
}

/// Row from the `lessons` table.
///
/// Difficulty is stored as `TEXT` guarded by a CHECK constraint, so it is
/// parsed into [`Difficulty`] when converting to [`Lesson`].
#[derive(Debug, sqlx::FromRow)]
pub struct LessonRow {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub difficulty: Option<String>,
    pub image_url: Option<String>,
    pub duration: Option<i32>,
    pub lesson_order: i32,
}

impl From<LessonRow> for Lesson {
    fn from(row: LessonRow) -> Self {
        let difficulty = match row.difficulty.as_deref().map(str::parse::<Difficulty>) {
            Some(Ok(difficulty)) => Some(difficulty),
            Some(Err(e)) => {
                tracing::warn!(lesson_id = row.id, "{e}");
                None
            }
            None => None,
        };

        Self {
            id: row.id,
            course_id: row.course_id,
            title: row.title,
            description: row.description,
            content: row.content,
            difficulty,
            image_url: row.image_url,
            duration: row.duration,
            lesson_order: row.lesson_order,
        }
    }
}
