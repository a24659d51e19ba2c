use thiserror::Error;

/// Reasons a userinfo request is rejected, in the order they are checked.
///
/// The `Display` text is the reason string returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("No Authorization header")]
    MissingHeader,

    #[error("Not a bearer token")]
    NotBearer,

    #[error("Invalid token")]
    InvalidToken,
}

#[derive(Debug, Error)]
pub enum IssuerError {
    #[error("invalid issuer URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("issuer URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("issuer URL must not contain a query or fragment")]
    QueryOrFragment,
}
