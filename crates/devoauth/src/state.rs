//! Shared application state.
//!
//! Everything in here is built once before the router starts and is never
//! mutated, so handlers share it through `Arc` without locking.

use std::sync::Arc;

use devoauth_core::oidc::{IdentityFixture, Issuer, ProviderMetadata};

use crate::keys::KeyMaterial;

#[derive(Clone)]
pub struct AppState {
    /// Base URL every advertised endpoint is rooted at.
    pub issuer: Arc<Issuer>,
    /// Discovery document, derived from the issuer.
    pub metadata: Arc<ProviderMetadata>,
    /// The simulated user.
    pub identity: Arc<IdentityFixture>,
    /// Signing key and the JWKS published for it.
    pub keys: Arc<KeyMaterial>,
}

impl AppState {
    pub fn new(issuer: Issuer, identity: IdentityFixture, keys: KeyMaterial) -> Self {
        let metadata = ProviderMetadata::for_issuer(&issuer);

        Self {
            issuer: Arc::new(issuer),
            metadata: Arc::new(metadata),
            identity: Arc::new(identity),
            keys: Arc::new(keys),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by the bundled key, issuing at `http://localhost:6644/`.
    pub fn for_tests(groups: Vec<String>) -> Self {
        Self::for_tests_with_issuer("http://localhost:6644/", groups)
    }

    pub fn for_tests_with_issuer(issuer: &str, groups: Vec<String>) -> Self {
        use crate::keys::KeySource;

        Self::new(
            issuer.parse().unwrap(),
            IdentityFixture::demo(groups),
            KeyMaterial::load(&KeySource::Bundled).unwrap(),
        )
    }
}
