//! Authentication middleware for JWT token validation
//!
//! Tokens are issued elsewhere; this service only verifies them.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// User roles
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
    /// Token type (access or refresh)
    pub token_type: TokenType,
}

/// Token type enum
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum TokenType {
    /// Access token
    Access,
    /// Refresh token
    Refresh,
}

/// Authenticated user information
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Verifies bearer tokens against a fixed key
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// RS256 verifier from a PEM encoded public key
    pub fn from_rsa_pem(public_key: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key.as_bytes())?;
        Ok(Self::with_key(decoding_key, Algorithm::RS256))
    }

    #[cfg(test)]
    pub fn from_secret(secret: &[u8]) -> Self {
        Self::with_key(DecodingKey::from_secret(secret), Algorithm::HS256)
    }

    fn with_key(decoding_key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Validate a token and return the claims of an access token
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let token_data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                error!("Failed to validate token: {}", e);
                ApiError::Unauthorized
            })?;

        if token_data.claims.token_type != TokenType::Access {
            return Err(ApiError::Unauthorized);
        }

        Ok(token_data.claims)
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(ApiError::Unauthorized)?;

    let verifier = state.jwt_verifier.as_ref().ok_or_else(|| {
        error!("Rejecting authenticated request: no JWT public key configured");
        ApiError::InternalServerError
    })?;

    let claims = verifier.verify(bearer.token())?;

    req.extensions_mut().insert(AuthUser { id: claims.sub });

    Ok(next.run(req).await)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::time::{SystemTime, UNIX_EPOCH};

    pub(crate) const SECRET: &[u8] = b"relief-test-secret";

    pub(crate) fn token(sub: Uuid, token_type: TokenType) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = Claims {
            sub,
            roles: vec!["collector".to_string()],
            iat: now,
            exp: now + 900,
            token_type,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_accepts_access_tokens() {
        let id = Uuid::new_v4();
        let verifier = JwtVerifier::from_secret(SECRET);

        let claims = verifier.verify(&token(id, TokenType::Access)).unwrap();
        assert_eq!(claims.sub, id);
    }

    #[test]
    fn test_verify_rejects_refresh_and_foreign_tokens() {
        let verifier = JwtVerifier::from_secret(SECRET);
        assert!(
            verifier
                .verify(&token(Uuid::new_v4(), TokenType::Refresh))
                .is_err()
        );

        let other = JwtVerifier::from_secret(b"another-secret");
        assert!(other.verify(&token(Uuid::new_v4(), TokenType::Access)).is_err());
        assert!(verifier.verify("not-a-jwt").is_err());
    }

    #[test]
    fn test_from_rsa_pem_rejects_garbage() {
        assert!(JwtVerifier::from_rsa_pem("-----BEGIN PUBLIC KEY-----\nnope").is_err());
    }
}
