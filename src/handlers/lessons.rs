//! Lesson HTTP handlers.

use axum::{Json, extract::State};

use crate::{
    error::{AppError, ErrorResponse},
    extract::ApiPath,
    models::lesson::Lesson,
    state::AppState,
};

/// Get a single lesson by ID.
///
/// # Endpoint
///
/// `GET /api/lessons/{id}`
///
/// Returns 404 `LESSON_NOT_FOUND` if no lesson has this ID.
#[utoipa::path(
    get,
    path = "/api/lessons/{id}",
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 200, description = "Lesson found", body = Lesson),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "lessons"
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    ApiPath(lesson_id): ApiPath<i32>,
) -> Result<Json<Lesson>, AppError> {
    let lesson = state
        .catalog
        .find_lesson(lesson_id)
        .await?
        .ok_or(AppError::LessonNotFound)?;

    Ok(Json(lesson))
}
