//! Signed access tokens issued by this service.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{config::Config, error::auth::AuthError};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Internal user ID.
    pub sub: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Issues and decodes HMAC signed access tokens.
pub struct TokenService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(secret: &[u8], algorithm: Algorithm, lifetime: Duration) -> Self {
        Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            lifetime,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.secret_key.as_bytes(),
            config.algorithm,
            Duration::minutes(config.access_token_expire_minutes),
        )
    }

    /// Signs a token for `subject` that expires after the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AuthError::TokenIssue)` - Signing failed
    pub fn issue(&self, subject: &str, email: Option<&str>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (Utc::now() + self.lifetime).timestamp(),
            email: email.map(str::to_string),
        };

        self.sign(&claims)
    }

    /// Signs arbitrary claims with the configured key and algorithm.
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        Ok(encode(
            &Header::new(self.algorithm),
            claims,
            &self.encoding_key,
        )?)
    }

    /// Verifies signature, algorithm and expiry of `token` and returns its claims.
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(self.algorithm);
        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}
