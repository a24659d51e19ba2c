use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

use super::{
    routes::{AUTHORIZE_PATH, JWKS_PATH, TOKEN_PATH, USERINFO_PATH},
    IssuerError, ACCESS_TOKEN,
};

/// The single simulated user.
///
/// Serves as both the userinfo response and the ID token claim set, so the
/// two always carry the same fields and values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityFixture {
    /// Stable user identifier, serialized as the `sub` claim.
    #[serde(rename = "sub")]
    pub subject: String,
    pub email: String,
    pub full_name: String,
    pub given_name: String,
    pub family_name: String,
    pub preferred_username: String,
    pub groups: Vec<String>,
}

impl IdentityFixture {
    /// The demo user, member of `groups`.
    pub fn demo(groups: Vec<String>) -> Self {
        Self {
            subject: "demo".to_string(),
            email: "demo@example.com".to_string(),
            full_name: "Demo Person".to_string(),
            given_name: "Demo".to_string(),
            family_name: "Person".to_string(),
            preferred_username: "demo".to_string(),
            groups,
        }
    }
}

/// Claims signed into the ID token: the identity fixture plus `iss`.
#[derive(Debug, Serialize)]
pub struct IdTokenClaims<'a> {
    pub iss: &'a str,
    #[serde(flatten)]
    pub identity: &'a IdentityFixture,
}

/// Body returned by the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub id_token: String,
}

impl TokenResponse {
    /// Wrap a signed ID token together with the fixed access token.
    pub fn bearer(id_token: String) -> Self {
        Self {
            access_token: ACCESS_TOKEN.to_string(),
            token_type: "bearer".to_string(),
            id_token,
        }
    }
}

/// Base URL of the provider, always ending in `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issuer(Url);

impl Issuer {
    pub fn new(mut url: Url) -> Result<Self, IssuerError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(IssuerError::UnsupportedScheme(url.scheme().to_string()));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(IssuerError::QueryOrFragment);
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    /// Absolute URL of a route served beneath this issuer.
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.0.as_str(), route.trim_start_matches('/'))
    }
}

impl FromStr for Issuer {
    type Err = IssuerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Url::parse(s)?)
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// OpenID Provider metadata served from the discovery endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub jwks_uri: String,
    pub userinfo_endpoint: String,
    pub response_types_supported: Vec<String>,
    pub subject_types_supported: Vec<String>,
    pub id_token_signing_alg_values_supported: Vec<String>,
    pub grant_types_supported: Vec<String>,
    pub scopes_supported: Vec<String>,
    pub token_endpoint_auth_methods_supported: Vec<String>,
    pub claims_supported: Vec<String>,
}

impl ProviderMetadata {
    pub fn for_issuer(issuer: &Issuer) -> Self {
        let strings = |values: &[&str]| -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        };

        Self {
            issuer: issuer.as_str().to_string(),
            authorization_endpoint: issuer.endpoint(AUTHORIZE_PATH),
            token_endpoint: issuer.endpoint(TOKEN_PATH),
            jwks_uri: issuer.endpoint(JWKS_PATH),
            userinfo_endpoint: issuer.endpoint(USERINFO_PATH),
            response_types_supported: strings(&["code"]),
            subject_types_supported: strings(&["public"]),
            id_token_signing_alg_values_supported: strings(&["RS256"]),
            grant_types_supported: strings(&["authorization_code"]),
            scopes_supported: strings(&["openid", "email", "profile", "groups"]),
            token_endpoint_auth_methods_supported: strings(&[
                "client_secret_basic",
                "client_secret_post",
                "none",
            ]),
            claims_supported: strings(&[
                "iss",
                "sub",
                "email",
                "full_name",
                "given_name",
                "family_name",
                "preferred_username",
                "groups",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_fixture_serializes_subject_as_sub() {
        let json = serde_json::to_value(IdentityFixture::demo(vec![])).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "sub": "demo",
                "email": "demo@example.com",
                "full_name": "Demo Person",
                "given_name": "Demo",
                "family_name": "Person",
                "preferred_username": "demo",
                "groups": [],
            })
        );
    }

    #[test]
    fn id_token_claims_are_fixture_plus_issuer() {
        let identity = IdentityFixture::demo(vec!["admins".to_string()]);
        let claims = IdTokenClaims {
            iss: "http://localhost:6644/",
            identity: &identity,
        };

        let mut expected = serde_json::to_value(&identity).unwrap();
        expected["iss"] = "http://localhost:6644/".into();

        assert_eq!(serde_json::to_value(&claims).unwrap(), expected);
    }

    #[test]
    fn token_response_uses_fixed_access_token() {
        let response = TokenResponse::bearer("a.b.c".to_string());
        assert_eq!(response.access_token, ACCESS_TOKEN);
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.id_token, "a.b.c");
    }

    #[test]
    fn issuer_gets_trailing_slash() {
        let issuer: Issuer = "http://localhost:6644".parse().unwrap();
        assert_eq!(issuer.as_str(), "http://localhost:6644/");

        let issuer: Issuer = "https://idp.test/mock".parse().unwrap();
        assert_eq!(issuer.as_str(), "https://idp.test/mock/");
        assert_eq!(issuer.endpoint(TOKEN_PATH), "https://idp.test/mock/token");
    }

    #[test]
    fn issuer_rejects_bad_urls() {
        assert!(matches!(
            "ftp://localhost/".parse::<Issuer>(),
            Err(IssuerError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            "http://localhost/?a=b".parse::<Issuer>(),
            Err(IssuerError::QueryOrFragment)
        ));
        assert!(matches!(
            "not a url".parse::<Issuer>(),
            Err(IssuerError::InvalidUrl(_))
        ));
    }

    #[test]
    fn provider_metadata_is_rooted_at_issuer() {
        let issuer: Issuer = "http://localhost:6644/".parse().unwrap();
        let metadata = ProviderMetadata::for_issuer(&issuer);

        assert_eq!(metadata.issuer, "http://localhost:6644/");
        assert_eq!(
            metadata.authorization_endpoint,
            "http://localhost:6644/auth"
        );
        assert_eq!(metadata.token_endpoint, "http://localhost:6644/token");
        assert_eq!(metadata.jwks_uri, "http://localhost:6644/jwks");
        assert_eq!(metadata.userinfo_endpoint, "http://localhost:6644/userinfo");
        assert_eq!(metadata.id_token_signing_alg_values_supported, ["RS256"]);
    }
}
