//! Custom extractors.

use axum::extract::{FromRequestParts, Path};

use crate::error::AppError;

/// `Path` extractor whose rejection is an [`AppError`], so a malformed path
/// parameter gets the JSON error envelope with status 400.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
