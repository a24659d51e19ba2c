use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Handler error that wraps `anyhow::Error`.
///
/// None of the endpoints have an expected failure path once startup has
/// succeeded, so anything reaching here is logged and reported as a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Application error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
