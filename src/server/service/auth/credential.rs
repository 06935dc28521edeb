//! Bearer credential verification.
//!
//! A credential is checked by a chain of `CredentialVerifier` strategies. Each verifier
//! either claims the credential (returning an identity or an error) or passes it on to
//! the next one. A credential no verifier claims is rejected.

use std::sync::Arc;

use crate::server::{config::Config, error::auth::AuthError, service::auth::token::TokenService};

/// Fixed credential accepted by `SentinelVerifier`.
pub const SENTINEL_CREDENTIAL: &str = "mock-token";
pub const SENTINEL_SUBJECT: &str = "mock-user-id";
pub const SENTINEL_EMAIL: &str = "demo@zelux.com";
pub const SENTINEL_NAME: &str = "Demo User";

/// Where a verified identity came from, which decides how it maps onto a user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Access token issued by `TokenService`; the subject is our user ID.
    AccessToken,
    /// Development sentinel; the subject is an external identity-provider UID.
    Sentinel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub subject: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub source: CredentialSource,
}

impl VerifiedIdentity {
    /// External identity-provider UID, present for identities that did not come from our
    /// own access tokens.
    pub fn external_uid(&self) -> Option<&str> {
        match self.source {
            CredentialSource::AccessToken => None,
            CredentialSource::Sentinel => Some(&self.subject),
        }
    }
}

pub trait CredentialVerifier: Send + Sync {
    /// # Returns
    /// - `Ok(Some(identity))` - The credential belongs to this verifier and is valid
    /// - `Ok(None)` - Not this verifier's kind of credential, try the next one
    /// - `Err(AuthError::InvalidCredential)` - The credential is this verifier's kind but invalid
    fn verify(&self, credential: &str) -> Result<Option<VerifiedIdentity>, AuthError>;
}

/// Development-only verifier accepting the fixed `mock-token` credential.
pub struct SentinelVerifier;

impl CredentialVerifier for SentinelVerifier {
    fn verify(&self, credential: &str) -> Result<Option<VerifiedIdentity>, AuthError> {
        if credential != SENTINEL_CREDENTIAL {
            return Ok(None);
        }

        Ok(Some(VerifiedIdentity {
            subject: SENTINEL_SUBJECT.to_string(),
            email: Some(SENTINEL_EMAIL.to_string()),
            name: Some(SENTINEL_NAME.to_string()),
            source: CredentialSource::Sentinel,
        }))
    }
}

/// Verifies access tokens signed by this service.
pub struct JwtVerifier {
    tokens: Arc<TokenService>,
}

impl JwtVerifier {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl CredentialVerifier for JwtVerifier {
    fn verify(&self, credential: &str) -> Result<Option<VerifiedIdentity>, AuthError> {
        let claims = self
            .tokens
            .decode(credential)
            .map_err(|e| AuthError::InvalidCredential(e.to_string()))?;

        Ok(Some(VerifiedIdentity {
            subject: claims.sub,
            email: claims.email,
            name: None,
            source: CredentialSource::AccessToken,
        }))
    }
}

/// Ordered list of verifiers; the first one to claim a credential decides.
pub struct CredentialChain {
    verifiers: Vec<Box<dyn CredentialVerifier>>,
}

impl CredentialChain {
    pub fn new(verifiers: Vec<Box<dyn CredentialVerifier>>) -> Self {
        Self { verifiers }
    }

    /// Builds the production chain: the sentinel first when `AUTH_ALLOW_MOCK_TOKEN` is on,
    /// then signed access tokens.
    pub fn from_config(config: &Config, tokens: Arc<TokenService>) -> Self {
        let mut verifiers: Vec<Box<dyn CredentialVerifier>> = Vec::new();

        if config.allow_mock_token {
            verifiers.push(Box::new(SentinelVerifier));
        }
        verifiers.push(Box::new(JwtVerifier::new(tokens)));

        Self::new(verifiers)
    }

    pub fn verify(&self, credential: &str) -> Result<VerifiedIdentity, AuthError> {
        for verifier in &self.verifiers {
            if let Some(identity) = verifier.verify(credential)? {
                return Ok(identity);
            }
        }

        Err(AuthError::InvalidCredential(
            "no verifier accepted the credential".to_string(),
        ))
    }
}
