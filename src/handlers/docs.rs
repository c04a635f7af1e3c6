//! Public landing page and the OpenAPI document.
//!
//! - GET / - plain-text welcome
//!
//! [`ApiDoc`] is generated from handler annotations; the router serves it at
//! `/openapi.json` with Swagger UI under `/docs`.

use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};

use crate::{
    error::{ErrorDetail, ErrorResponse},
    handlers::{courses, health, lessons},
    models::{
        course::Course,
        lesson::{Difficulty, Lesson},
    },
};

const WELCOME: &str =
    "Welcome to the Learnify API! Try /api/courses for the course catalog or /docs for the API reference.";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Learnify API",
        description = "Courses and lessons for the Learnify learning platform. Endpoints under /api require `Authorization: Bearer YOUR_API_KEY`.",
        version = "0.1.0"
    ),
    paths(
        courses::list_courses,
        courses::get_course,
        courses::list_course_lessons,
        lessons::get_lesson,
        health::health_check,
    ),
    components(schemas(
        Course,
        Lesson,
        Difficulty,
        ErrorResponse,
        ErrorDetail,
        health::HealthResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "courses", description = "Course catalog"),
        (name = "lessons", description = "Lessons within courses"),
        (name = "meta", description = "Service health")
    )
)]
pub struct ApiDoc;

pub async fn home() -> &'static str {
    WELCOME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_catalog_path() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/courses",
            "/api/courses/{id}",
            "/api/courses/{id}/lessons",
            "/api/lessons/{id}",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn document_declares_bearer_scheme() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let scheme = &doc["components"]["securitySchemes"]["api_key"];
        assert_eq!(scheme["type"], "http");
        assert_eq!(scheme["scheme"], "bearer");
    }

    #[test]
    fn protected_operations_require_the_scheme() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let security = &doc["paths"]["/api/courses"]["get"]["security"];
        assert!(security[0].get("api_key").is_some());
        assert!(doc["paths"]["/health"]["get"].get("security").is_none());
    }
}
