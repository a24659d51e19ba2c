//! Axum extractors for authentication.

use axum::{
    extract::FromRequestParts,
    http::{
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
        request::Parts,
        StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use devoauth_core::oidc::{check_bearer, BearerError, ACCESS_TOKEN};

/// Proof that the request carried `Authorization: Bearer <access token>`.
pub struct BearerAuth;

impl<S> FromRequestParts<S> for BearerAuth
where
    S: Send + Sync,
{
    type Rejection = BearerRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let result = match parts.headers.get(AUTHORIZATION).map(|value| value.to_str()) {
            None => check_bearer(None, ACCESS_TOKEN),
            Some(Ok(value)) => check_bearer(Some(value), ACCESS_TOKEN),
            // Present but not text, so it can't name the bearer scheme.
            Some(Err(_)) => Err(BearerError::NotBearer),
        };

        result.map(|()| BearerAuth).map_err(|err| {
            tracing::warn!(reason = %err, "Rejected bearer token");
            BearerRejection(err)
        })
    }
}

/// 401 carrying the reason the bearer check failed, as `{"detail": ...}`.
#[derive(Debug)]
pub struct BearerRejection(pub BearerError);

impl IntoResponse for BearerRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(WWW_AUTHENTICATE, "Bearer")],
            Json(serde_json::json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}
