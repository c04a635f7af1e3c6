//! PostgreSQL-backed catalog.
//!
//! Reads the `courses` and `lessons` tables created by the migrations in
//! `migrations/`.

use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        course::Course,
        lesson::{Lesson, LessonRow},
    },
    services::catalog::CatalogRepository,
};

const LESSON_COLUMNS: &str = "id, course_id, title, description, content, difficulty, image_url, duration, lesson_order";

/// Catalog served from a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: DbPool,
}

impl PgCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalog {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, image_url, created_at
            FROM courses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    async fn find_course(&self, id: i32) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, image_url, created_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn list_lessons(&self, course_id: i32) -> Result<Vec<Lesson>, AppError> {
        let rows = sqlx::query_as::<_, LessonRow>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons WHERE course_id = $1 ORDER BY lesson_order, id"
        ))
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_lesson(&self, id: i32) -> Result<Option<Lesson>, AppError> {
        let row = sqlx::query_as::<_, LessonRow>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
