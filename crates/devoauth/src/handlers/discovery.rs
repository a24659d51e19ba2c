use axum::{extract::State, Json};
use devoauth_core::oidc::ProviderMetadata;

use crate::state::AppState;

/// GET /.well-known/openid-configuration - Provider metadata.
pub async fn discovery(State(state): State<AppState>) -> Json<ProviderMetadata> {
    Json(state.metadata.as_ref().clone())
}
