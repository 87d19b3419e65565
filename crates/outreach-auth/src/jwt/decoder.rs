//! Access token verification.

use std::fmt;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use outreach_core::config::AuthConfig;
use outreach_core::error::AppError;

use super::claims::Claims;

/// Tolerated clock skew between issuer and verifier.
const LEEWAY_SECONDS: u64 = 5;

#[derive(Clone)]
pub struct JwtDecoder {
    key: DecodingKey,
    rules: Validation,
}

// The key stays out of debug output.
impl fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("algorithms", &self.rules.algorithms)
            .field("leeway", &self.rules.leeway)
            .finish_non_exhaustive()
    }
}

impl JwtDecoder {
    pub fn new(config: &AuthConfig) -> Self {
        let mut rules = Validation::new(Algorithm::HS256);
        rules.leeway = LEEWAY_SECONDS;
        rules.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            rules,
        }
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// Every failure is an authentication error; the message names the
    /// reason without echoing the token.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.key, &self.rules)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(rejection_reason(e.kind())))
    }
}

fn rejection_reason(kind: &JwtErrorKind) -> &'static str {
    match kind {
        JwtErrorKind::ExpiredSignature => "Token has expired",
        JwtErrorKind::InvalidSignature => "Invalid token signature",
        JwtErrorKind::InvalidToken | JwtErrorKind::Base64(_) | JwtErrorKind::Json(_) => {
            "Invalid token format"
        }
        _ => "Token validation failed",
    }
}
