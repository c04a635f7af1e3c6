//! Course HTTP handlers.
//!
//! This module implements the course endpoints:
//! - GET /api/courses - List every course
//! - GET /api/courses/{id} - Get one course
//! - GET /api/courses/{id}/lessons - List the lessons of a course
//!
//! All of them sit behind the API key middleware.

use axum::{Json, extract::State};

use crate::{
    error::{AppError, ErrorResponse},
    extract::ApiPath,
    models::{course::Course, lesson::Lesson},
    state::AppState,
};

/// List all courses.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": 1,
///     "title": "Introduction to Rust",
///     "description": "Ownership, borrowing and the type system",
///     "image_url": null,
///     "created_at": "2025-01-01T00:00:00Z"
///   }
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses, ordered by id", body = [Course]),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "courses"
)]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.catalog.list_courses().await?;

    Ok(Json(courses))
}

/// Get a course by ID.
///
/// Returns 404 `COURSE_NOT_FOUND` if no course has this ID.
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i32>,
) -> Result<Json<Course>, AppError> {
    let course = state
        .catalog
        .find_course(course_id)
        .await?
        .ok_or(AppError::CourseNotFound)?;

    Ok(Json(course))
}

/// List the lessons of a course, in course order.
///
/// An existing course with no lessons yields `[]`; an unknown course yields
/// 404 `COURSE_NOT_FOUND` so clients can tell the two apart.
#[utoipa::path(
    get,
    path = "/api/courses/{id}/lessons",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Lessons ordered by lesson_order", body = [Lesson]),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "lessons"
)]
pub async fn list_course_lessons(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i32>,
) -> Result<Json<Vec<Lesson>>, AppError> {
    if state.catalog.find_course(course_id).await?.is_none() {
        return Err(AppError::CourseNotFound);
    }

    let lessons = state.catalog.list_lessons(course_id).await?;

    Ok(Json(lessons))
}
