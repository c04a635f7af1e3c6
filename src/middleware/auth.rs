//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Read the `Authorization` header
//! 2. Check it has the form `Bearer <api_key>`
//! 3. Look the key up in the process-wide [`CredentialSet`]
//! 4. Reject with HTTP 401 and a structured error, or pass the request on untouched

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, models::api_key::CredentialSet};

/// Case-sensitive scheme prefix, exactly one space after `Bearer`.
const BEARER_PREFIX: &str = "Bearer ";

/// Decide whether an `Authorization` header value grants access.
///
/// # Rules
///
/// - absent or empty header → [`AppError::MissingApiKey`]
/// - not starting with `"Bearer "` → [`AppError::InvalidAuthFormat`]
/// - key after the prefix not in `credentials` → [`AppError::InvalidApiKey`]
///
/// The key is everything after the 7-byte prefix, untrimmed, so
/// `"Bearer  abc123"` presents `" abc123"`. The prefix is matched on raw
/// bytes, so a key containing non-ASCII bytes is still looked up.
pub fn authorize(
    header: Option<&HeaderValue>,
    credentials: &CredentialSet,
) -> Result<(), AppError> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::MissingApiKey),
    };

    let api_key = header
        .as_bytes()
        .strip_prefix(BEARER_PREFIX.as_bytes())
        .ok_or(AppError::InvalidAuthFormat)?;

    if !credentials.contains(api_key) {
        return Err(AppError::InvalidApiKey);
    }

    Ok(())
}

/// API key authentication middleware function.
///
/// Attach with `axum::middleware::from_fn_with_state` as a `route_layer` on
/// the protected routes.
///
/// # Returns
///
/// - the wrapped handler's response, unchanged, if the key is valid
/// - `Err(AppError)` (401) otherwise; the wrapped handler never runs
pub async fn require_api_key(
    State(credentials): State<Arc<CredentialSet>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(err) = authorize(request.headers().get(AUTHORIZATION), &credentials) {
        tracing::warn!(
            code = err.code(),
            method = %request.method(),
            path = %request.uri().path(),
            "rejected unauthenticated request"
        );
        return Err(err);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorResponse;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    fn credentials(keys: &[&str]) -> CredentialSet {
        CredentialSet::new(keys.iter().copied())
    }

    fn decide(header: Option<&str>, keys: &[&str]) -> Result<(), AppError> {
        let value = header.map(|h| HeaderValue::from_str(h).unwrap());
        authorize(value.as_ref(), &credentials(keys))
    }

    /// Router with one protected route that counts how often it runs.
    fn guarded_app(keys: &[&str], hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/protected",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        (StatusCode::ACCEPTED, "handler ran")
                    }
                }),
            )
            .route_layer(from_fn_with_state(
                Arc::new(credentials(keys)),
                require_api_key,
            ))
    }

    fn request(header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/protected");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn error_code(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        body.error.code
    }

    #[test]
    fn missing_header_is_rejected() {
        assert!(matches!(
            decide(None, &["abc123"]),
            Err(AppError::MissingApiKey)
        ));
    }

    #[test]
    fn empty_header_counts_as_missing() {
        assert!(matches!(
            decide(Some(""), &["abc123"]),
            Err(AppError::MissingApiKey)
        ));
    }

    #[test]
    fn non_bearer_schemes_are_rejected() {
        for header in ["Basic abc123", "bearer abc123", "BEARER abc123", "Bearer", "abc123", "Token abc123"] {
            assert!(
                matches!(decide(Some(header), &["abc123"]), Err(AppError::InvalidAuthFormat)),
                "{header:?} should be an invalid format"
            );
        }
    }

    #[test]
    fn non_ascii_keys_are_looked_up() {
        let credentials = credentials(&["clé"]);

        let configured = HeaderValue::from_bytes("Bearer clé".as_bytes()).unwrap();
        assert!(authorize(Some(&configured), &credentials).is_ok());

        let unknown = HeaderValue::from_bytes("Bearer ключ".as_bytes()).unwrap();
        assert!(matches!(
            authorize(Some(&unknown), &credentials),
            Err(AppError::InvalidApiKey)
        ));
    }

    #[test]
    fn non_ascii_header_without_bearer_prefix_is_an_invalid_format() {
        let value = HeaderValue::from_bytes("Basic clé".as_bytes()).unwrap();

        assert!(matches!(
            authorize(Some(&value), &credentials(&["clé"])),
            Err(AppError::InvalidAuthFormat)
        ));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            decide(Some("Bearer wrong-key"), &["abc123"]),
            Err(AppError::InvalidApiKey)
        ));
    }

    #[test]
    fn key_match_is_case_sensitive() {
        assert!(decide(Some("Bearer abc123"), &["abc123"]).is_ok());
        assert!(matches!(
            decide(Some("Bearer ABC123"), &["abc123"]),
            Err(AppError::InvalidApiKey)
        ));
    }

    #[test]
    fn extra_whitespace_is_part_of_the_key() {
        assert!(matches!(
            decide(Some("Bearer  abc123"), &["abc123"]),
            Err(AppError::InvalidApiKey)
        ));
    }

    #[test]
    fn empty_credential_set_rejects_every_key() {
        for header in ["Bearer abc123", "Bearer ", "Bearer anything"] {
            assert!(matches!(
                decide(Some(header), &[]),
                Err(AppError::InvalidApiKey)
            ));
        }
    }

    #[tokio::test]
    async fn valid_key_runs_handler_once_and_passes_response_through() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(&["abc123"], hits.clone());

        let response = app.oneshot(request(Some("Bearer abc123"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"handler ran");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejections_short_circuit_the_handler() {
        let cases = [
            (None, "MISSING_API_KEY"),
            (Some("Basic abc123"), "INVALID_AUTH_FORMAT"),
            (Some("bearer abc123"), "INVALID_AUTH_FORMAT"),
            (Some("Bearer wrong-key"), "INVALID_API_KEY"),
            (Some("Bearer ABC123"), "INVALID_API_KEY"),
        ];

        for (header, expected) in cases {
            let hits = Arc::new(AtomicUsize::new(0));
            let app = guarded_app(&["abc123"], hits.clone());

            let response = app.oneshot(request(header)).await.unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(error_code(response).await, expected);
            assert_eq!(hits.load(Ordering::SeqCst), 0, "handler ran for {header:?}");
        }
    }

    #[tokio::test]
    async fn non_ascii_key_passes_through_the_middleware() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(&["clé"], hits.clone());

        let request = Request::builder()
            .uri("/protected")
            .header(
                AUTHORIZATION,
                HeaderValue::from_bytes("Bearer clé".as_bytes()).unwrap(),
            )
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let request = Request::builder()
            .uri("/protected")
            .header(
                AUTHORIZATION,
                HeaderValue::from_bytes("Bearer ключ".as_bytes()).unwrap(),
            )
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(response).await, "INVALID_API_KEY");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeated_requests_get_the_same_outcome() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(&["abc123"], hits.clone());

        for _ in 0..2 {
            let ok = app
                .clone()
                .oneshot(request(Some("Bearer abc123")))
                .await
                .unwrap();
            assert_eq!(ok.status(), StatusCode::ACCEPTED);

            let denied = app
                .clone()
                .oneshot(request(Some("Bearer wrong-key")))
                .await
                .unwrap();
            assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(error_code(denied).await, "INVALID_API_KEY");
        }

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_requests_are_independent() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(&["abc123"], hits.clone());

        let mut handles = Vec::new();
        for i in 0..16 {
            let app = app.clone();
            let header = if i % 2 == 0 { "Bearer abc123" } else { "Bearer nope" };
            handles.push(tokio::spawn(async move {
                app.oneshot(request(Some(header))).await.unwrap().status()
            }));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = if i % 2 == 0 {
                StatusCode::ACCEPTED
            } else {
                StatusCode::UNAUTHORIZED
            };
            assert_eq!(handle.await.unwrap(), expected);
        }
        assert_eq!(hits.load(Ordering::SeqCst), 8);
    }
}
