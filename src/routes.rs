//! HTTP router assembly.
//!
//! Splits routes into a protected group (behind the API key middleware) and
//! a public group, then wraps everything in CORS and request tracing.

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{
        courses,
        docs::{self, ApiDoc},
        health, lessons,
    },
    middleware::auth::require_api_key,
    state::AppState,
};

/// Build the full application router.
///
/// `cors_origins` empty means any origin may call the API.
pub fn build_router(state: AppState, cors_origins: Vec<HeaderValue>) -> Router {
    // Every route in this group requires `Authorization: Bearer <key>`
    let authenticated_routes = Router::new()
        .route("/api/courses", get(courses::list_courses))
        .route("/api/courses/{id}", get(courses::get_course))
        .route(
            "/api/courses/{id}/lessons",
            get(courses::list_course_lessons),
        )
        .route("/api/lessons/{id}", get(lessons::get_lesson))
        .route_layer(axum_middleware::from_fn_with_state(
            state.credentials.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/", get(docs::home))
        .route("/health", get(health::health_check))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(authenticated_routes)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
}
