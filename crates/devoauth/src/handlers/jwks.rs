use axum::{extract::State, Json};

use crate::state::AppState;

/// GET /jwks - The public key set, served exactly as loaded.
pub async fn jwks(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.keys.jwks().clone())
}
