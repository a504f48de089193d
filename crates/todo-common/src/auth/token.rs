//! Bearer-token verification using the `jsonwebtoken` crate
//!
//! The identity provider authenticates users and mints the tokens; this
//! service only verifies the signature and reads the claim set. Token
//! issuance is kept here as well so local development and the integration
//! tests can mint compatible credentials.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claim set asserted by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject - the stable external identifier for the principal
    pub sub: String,
    /// Email claim, optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name claim, optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl IdentityClaims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Verifies (and, for tests and local tooling, issues) identity tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

/// Default token lifetime in seconds when issuing locally
const DEFAULT_TOKEN_EXPIRY: i64 = 3600;

impl TokenService {
    /// Create a new token service with the given shared secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry: DEFAULT_TOKEN_EXPIRY,
        }
    }

    /// Decode and validate a bearer token, returning the claim set
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<IdentityClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Issue a token for the given subject with optional identity claims
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(
        &self,
        subject: &str,
        email: Option<&str>,
        name: Option<&str>,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = IdentityClaims {
            sub: subject.to_string(),
            email: email.map(str::to_string),
            name: name.map(str::to_string),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
