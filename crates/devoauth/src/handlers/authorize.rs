use axum::{
    extract::Query,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use devoauth_core::oidc::{authorization_redirect, generate_authorization_code};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AuthorizeQuery {
    pub redirect_uri: String,
    pub state: Option<String>,
}

/// GET /auth - Authorization endpoint.
///
/// There is no login step: every request is sent straight back to
/// `redirect_uri` with a fresh code. A missing `redirect_uri` is rejected
/// by the `Query` extractor with a 400.
pub async fn authorize(Query(query): Query<AuthorizeQuery>) -> Response {
    let code = generate_authorization_code();
    let target = authorization_redirect(&query.redirect_uri, &code, query.state.as_deref());

    // Redirect::to panics on values that can't go in a Location header.
    if HeaderValue::from_str(&target).is_err() {
        tracing::warn!(redirect_uri = %query.redirect_uri, "Unusable redirect_uri");
        return (
            StatusCode::BAD_REQUEST,
            "redirect_uri is not a valid header value",
        )
            .into_response();
    }

    tracing::debug!(redirect_uri = %query.redirect_uri, code = %code, "Issued authorization code");

    Redirect::to(&target).into_response()
}
