use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::ports::{Clock, TokenIssuer};
use crate::domain::auth::value_objects::{TokenClaims, TokenKind};

/// Signed payload carried inside every issued token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
  /// Subject: the user the token was issued for
  sub: Uuid,
  /// Token kind tag, `access` or `refresh`
  #[serde(rename = "type")]
  kind: TokenKind,
  /// Issue timestamp, seconds since the epoch
  iat: i64,
  /// Absolute expiry, seconds since the epoch
  exp: i64,
}

/// HMAC-signed JWT issuer and verifier.
///
/// Stateless: a token's lifetime is bounded entirely by its embedded expiry
/// and its signature, so there is no pre-expiry revocation. Expiry is checked
/// against the injected [`Clock`] so issue-time and verify-time comparisons
/// use the same time source.
pub struct JwtTokenService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  validation: Validation,
  access_ttl: Duration,
  refresh_ttl: Duration,
  clock: Arc<dyn Clock>,
}

impl JwtTokenService {
  /// Creates a token service signing with the given shared secret.
  ///
  /// The secret is held only inside the signing keys and is never logged.
  pub fn new(
    secret: &str,
    access_ttl: std::time::Duration,
    refresh_ttl: std::time::Duration,
    clock: Arc<dyn Clock>,
  ) -> Self {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked against the injected clock, not the system clock
    validation.validate_exp = false;
    validation.required_spec_claims.insert("exp".to_string());

    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      validation,
      access_ttl: Duration::from_std(access_ttl).expect("access TTL out of range"),
      refresh_ttl: Duration::from_std(refresh_ttl).expect("refresh TTL out of range"),
      clock,
    }
  }

  fn ttl(&self, kind: TokenKind) -> Duration {
    match kind {
      TokenKind::Access => self.access_ttl,
      TokenKind::Refresh => self.refresh_ttl,
    }
  }
}

impl TokenIssuer for JwtTokenService {
  fn issue(&self, subject: Uuid, kind: TokenKind) -> Result<String, TokenError> {
    let now = self.clock.now();
    let expires_at = now + self.ttl(kind);

    let claims = Claims {
      sub: subject,
      kind,
      iat: now.timestamp(),
      exp: expires_at.timestamp(),
    };

    let token = encode(&Header::default(), &claims, &self.encoding_key)
      .map_err(|e| TokenError::Signing(e.to_string()))?;

    tracing::debug!(
      user_id = %subject,
      kind = %kind,
      expires_at = %expires_at,
      "Successfully generated token"
    );

    Ok(token)
  }

  fn verify(&self, token: &str, expected_kind: TokenKind) -> Result<TokenClaims, TokenError> {
    // Signature and structure first; anything wrong here is plain invalid
    let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
      .map_err(|_| TokenError::Invalid)?;

    let claims = data.claims;

    if claims.exp <= self.clock.now().timestamp() {
      return Err(TokenError::Expired);
    }

    if claims.kind != expected_kind {
      return Err(TokenError::KindMismatch {
        expected: expected_kind,
        actual: claims.kind,
      });
    }

    Ok(TokenClaims {
      subject: claims.sub,
      kind: claims.kind,
    })
  }
}
