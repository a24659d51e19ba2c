use axum::{extract::State, Json};
use devoauth_core::oidc::IdentityFixture;

use crate::{extractors::BearerAuth, state::AppState};

/// GET /userinfo - Profile claims for the holder of the access token.
pub async fn userinfo(_auth: BearerAuth, State(state): State<AppState>) -> Json<IdentityFixture> {
    Json(state.identity.as_ref().clone())
}
