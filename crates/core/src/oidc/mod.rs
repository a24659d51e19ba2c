mod bearer;
mod error;
mod functions;
mod routes;
mod types;

pub use bearer::{check_bearer, ACCESS_TOKEN, BEARER_SCHEME};
pub use error::{BearerError, IssuerError};
pub use functions::{
    authorization_redirect, generate_authorization_code, parse_groups, AUTHORIZATION_CODE_LEN,
};
pub use routes::{AUTHORIZE_PATH, DISCOVERY_PATH, JWKS_PATH, TOKEN_PATH, USERINFO_PATH};
pub use types::{IdTokenClaims, IdentityFixture, Issuer, ProviderMetadata, TokenResponse};
