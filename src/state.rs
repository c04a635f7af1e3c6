//! Shared application state.

use std::sync::Arc;

use crate::{models::api_key::CredentialSet, services::catalog::CatalogRepository};

/// State handed to every handler through axum's `State` extractor.
///
/// Both fields are read-only after startup, so cloning the state per request
/// is just two reference-count bumps.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub credentials: Arc<CredentialSet>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogRepository>, credentials: CredentialSet) -> Self {
        Self {
            catalog,
            credentials: Arc::new(credentials),
        }
    }
}
