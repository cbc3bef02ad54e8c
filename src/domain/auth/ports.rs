use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::AuthError;
use super::value_objects::SessionType;

/// Claims a caller asks to embed in a signed token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
  #[serde(rename = "type")]
  pub session_type: SessionType,
  pub distinct_id: String,
  pub roles: Vec<String>,
}

/// Decoded payload of a verified token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
  #[serde(rename = "type")]
  pub session_type: SessionType,
  pub distinct_id: String,
  #[serde(default)]
  pub roles: Vec<String>,
  /// Issued-at (Unix timestamp).
  pub iat: i64,
  /// Expiration (Unix timestamp).
  pub exp: i64,
  /// Unique token id, fresh per issuance; the handle a future revocation
  /// list would key on.
  pub jti: String,
  /// Subject, equal to the distinct id.
  pub sub: String,
  /// Signing key id. Rides in the token header, not the payload.
  #[serde(skip_serializing, default)]
  pub kid: Option<String>,
}

/// Issuance metadata supplied per token.
#[derive(Debug, Clone)]
pub struct TokenOptions {
  pub kid: String,
  pub sub: String,
}

/// Signs and verifies compact self-contained tokens carrying session claims.
#[async_trait]
pub trait TokenService: Send + Sync {
  /// Signs `claims` into a compact token, injecting a fresh `jti` and the
  /// configured algorithm, expiry and key id. Signing failures propagate;
  /// there is no fallback.
  async fn generate_token(
    &self,
    claims: SessionClaims,
    options: TokenOptions,
  ) -> Result<String, AuthError>;

  /// Decodes and verifies a compact token. Fails on an invalid signature,
  /// an algorithm outside the configured allow-list, or a malformed or
  /// expired token.
  async fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}
