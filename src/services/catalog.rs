//! Catalog service - read access to courses and lessons.
//!
//! Handlers talk to the catalog through the [`CatalogRepository`] trait so
//! the same routes can be served from PostgreSQL ([`super::pg_catalog::PgCatalog`])
//! or from the bundled seed data held in memory ([`InMemoryCatalog`]).

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{course::Course, lesson::Lesson},
};

/// Seed catalog compiled into the binary.
const SEED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Read-only catalog backend.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All courses, ordered by id.
    async fn list_courses(&self) -> Result<Vec<Course>, AppError>;

    async fn find_course(&self, id: i32) -> Result<Option<Course>, AppError>;

    /// Lessons of one course, ordered by `lesson_order` then id.
    ///
    /// Returns an empty list for a course with no lessons; callers check the
    /// course exists first.
    async fn list_lessons(&self, course_id: i32) -> Result<Vec<Lesson>, AppError>;

    async fn find_lesson(&self, id: i32) -> Result<Option<Lesson>, AppError>;

    /// Verify the backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Short backend name reported by the health check.
    fn backend(&self) -> &'static str;
}

/// Catalog held entirely in memory.
///
/// Used when no `DATABASE_URL` is configured, and by tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    courses: Vec<Course>,
    lessons: Vec<Lesson>,
}

#[derive(serde::Deserialize)]
struct SeedFile {
    courses: Vec<Course>,
    lessons: Vec<Lesson>,
}

impl InMemoryCatalog {
    pub fn new(mut courses: Vec<Course>, mut lessons: Vec<Lesson>) -> Self {
        courses.sort_by_key(|c| c.id);
        lessons.sort_by_key(|l| (l.course_id, l.lesson_order, l.id));
        Self { courses, lessons }
    }

    /// Load the catalog bundled with the binary.
    pub fn seeded() -> Result<Self, serde_json::Error> {
        let seed: SeedFile = serde_json::from_str(SEED_CATALOG)?;
        Ok(Self::new(seed.courses, seed.lessons))
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.clone())
    }

    async fn find_course(&self, id: i32) -> Result<Option<Course>, AppError> {
        Ok(self.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn list_lessons(&self, course_id: i32) -> Result<Vec<Lesson>, AppError> {
        Ok(self
            .lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn find_lesson(&self, id: i32) -> Result<Option<Lesson>, AppError> {
        Ok(self.lessons.iter().find(|l| l.id == id).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
