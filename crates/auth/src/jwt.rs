//! Session token issuance and validation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Signs and verifies HS256 session tokens with the process-held secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Duration,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
            expires_in: config.expires_in,
        }
    }

    /// Lifetime of issued tokens
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Issue a token for an account
    pub fn issue(&self, account_id: &str, email: &str) -> Result<String, AuthError> {
        self.issue_at(account_id, email, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        account_id: &str,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let issued_at = now.timestamp().max(0) as u64;
        let claims = SessionClaims {
            sub: account_id.to_string(),
            email: email.to_string(),
            iat: issued_at,
            exp: issued_at + self.expires_in.num_seconds().max(0) as u64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::TokenEncoding)
    }

    /// Validate a token's signature and expiry and return its claims
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                tracing::debug!(error = %e, "JWT validation failed");
                AuthError::InvalidToken
            })?;

        Ok(token_data.claims)
    }
}
