use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use devoauth_core::oidc::{IdTokenClaims, TokenResponse};

use crate::{handlers::AppError, state::AppState};

/// POST /token - Token endpoint.
///
/// The request body is ignored: grant type, code and client credentials are
/// never checked. Every call signs a fresh ID token for the demo user and
/// returns it alongside the fixed access token.
pub async fn token(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let claims = IdTokenClaims {
        iss: state.issuer.as_str(),
        identity: &state.identity,
    };

    let id_token = state.keys.sign(&claims)?;

    tracing::debug!(sub = %state.identity.subject, kid = ?state.keys.kid(), "Issued ID token");

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(TokenResponse::bearer(id_token)),
    ))
}
