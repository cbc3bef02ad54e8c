use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::{SessionClaims, TokenClaims, TokenOptions, TokenService};
use crate::domain::auth::services::{TokenAlgorithm, TokenExpiration};

/// JWT-backed implementation of the [`TokenService`] port, signing with an
/// HMAC secret.
pub struct JwtTokenService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  algorithm: Algorithm,
  expiration_seconds: i64,
}

impl JwtTokenService {
  pub fn new(secret: &str, algorithm: TokenAlgorithm, expiration: TokenExpiration) -> Self {
    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      algorithm: map_algorithm(algorithm),
      expiration_seconds: expiration.as_seconds(),
    }
  }
}

fn map_algorithm(algorithm: TokenAlgorithm) -> Algorithm {
  match algorithm {
    TokenAlgorithm::HS256 => Algorithm::HS256,
    TokenAlgorithm::HS384 => Algorithm::HS384,
    TokenAlgorithm::HS512 => Algorithm::HS512,
  }
}

#[async_trait]
impl TokenService for JwtTokenService {
  async fn generate_token(
    &self,
    claims: SessionClaims,
    options: TokenOptions,
  ) -> Result<String, AuthError> {
    let iat = Utc::now().timestamp();
    let claims = TokenClaims {
      session_type: claims.session_type,
      distinct_id: claims.distinct_id,
      roles: claims.roles,
      iat,
      exp: iat + self.expiration_seconds,
      jti: Uuid::new_v4().to_string(),
      sub: options.sub,
      kid: None,
    };

    let mut header = Header::new(self.algorithm);
    header.kid = Some(options.kid);

    jsonwebtoken::encode(&header, &claims, &self.encoding_key)
      .map_err(|e| AuthError::TokenSigning(e.to_string()))
  }

  async fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
    let header = jsonwebtoken::decode_header(token)
      .map_err(|e| AuthError::TokenVerification(e.to_string()))?;

    // Single-algorithm allow-list: tokens signed any other way fail here.
    let validation = Validation::new(self.algorithm);
    let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &validation)
      .map_err(|e| AuthError::TokenVerification(e.to_string()))?;

    Ok(TokenClaims {
      kid: header.kid,
      ..data.claims
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::value_objects::SessionType;

  fn claims() -> SessionClaims {
    SessionClaims {
      session_type: SessionType::Authenticated,
      distinct_id: "u1".to_string(),
      roles: vec!["user-u1".to_string()],
    }
  }

  fn options() -> TokenOptions {
    TokenOptions {
      kid: "primary".to_string(),
      sub: "u1".to_string(),
    }
  }

  #[tokio::test]
  async fn test_round_trip() {
    let service = JwtTokenService::new(
      "secret",
      TokenAlgorithm::HS256,
      TokenExpiration::OneDay,
    );
    let token = service.generate_token(claims(), options()).await.unwrap();
    let decoded = service.verify_token(&token).await.unwrap();

    assert_eq!(decoded.session_type, SessionType::Authenticated);
    assert_eq!(decoded.distinct_id, "u1");
    assert_eq!(decoded.roles, vec!["user-u1".to_string()]);
    assert_eq!(decoded.sub, "u1");
    assert_eq!(decoded.kid.as_deref(), Some("primary"));
    assert_eq!(decoded.exp - decoded.iat, 86_400);
    assert!(!decoded.jti.is_empty());
  }

  #[tokio::test]
  async fn test_each_token_gets_a_fresh_jti() {
    let service = JwtTokenService::new(
      "secret",
      TokenAlgorithm::HS256,
      TokenExpiration::OneDay,
    );
    let first = service.generate_token(claims(), options()).await.unwrap();
    let second = service.generate_token(claims(), options()).await.unwrap();

    let first = service.verify_token(&first).await.unwrap();
    let second = service.verify_token(&second).await.unwrap();
    assert_ne!(first.jti, second.jti);
  }

  #[tokio::test]
  async fn test_wrong_secret_fails() {
    let signer = JwtTokenService::new(
      "secret-a",
      TokenAlgorithm::HS256,
      TokenExpiration::OneDay,
    );
    let verifier = JwtTokenService::new(
      "secret-b",
      TokenAlgorithm::HS256,
      TokenExpiration::OneDay,
    );

    let token = signer.generate_token(claims(), options()).await.unwrap();
    assert!(matches!(
      verifier.verify_token(&token).await,
      Err(AuthError::TokenVerification(_))
    ));
  }

  #[tokio::test]
  async fn test_algorithm_mismatch_fails() {
    let signer = JwtTokenService::new(
      "secret",
      TokenAlgorithm::HS384,
      TokenExpiration::OneDay,
    );
    let verifier = JwtTokenService::new(
      "secret",
      TokenAlgorithm::HS256,
      TokenExpiration::OneDay,
    );

    let token = signer.generate_token(claims(), options()).await.unwrap();
    assert!(matches!(
      verifier.verify_token(&token).await,
      Err(AuthError::TokenVerification(_))
    ));
  }

  #[tokio::test]
  async fn test_expired_token_fails() {
    let service = JwtTokenService::new(
      "secret",
      TokenAlgorithm::HS256,
      TokenExpiration::OneDay,
    );

    // Hand-craft claims whose exp is well past the validation leeway.
    let now = Utc::now().timestamp();
    let expired = TokenClaims {
      session_type: SessionType::Authenticated,
      distinct_id: "u1".to_string(),
      roles: Vec::new(),
      iat: now - 7_200,
      exp: now - 3_600,
      jti: Uuid::new_v4().to_string(),
      sub: "u1".to_string(),
      kid: None,
    };
    let token = jsonwebtoken::encode(
      &Header::new(Algorithm::HS256),
      &expired,
      &EncodingKey::from_secret(b"secret"),
    )
    .unwrap();

    assert!(matches!(
      service.verify_token(&token).await,
      Err(AuthError::TokenVerification(_))
    ));
  }

  #[tokio::test]
  async fn test_malformed_token_fails() {
    let service = JwtTokenService::new(
      "secret",
      TokenAlgorithm::HS256,
      TokenExpiration::OneDay,
    );
    assert!(matches!(
      service.verify_token("not-a-token").await,
      Err(AuthError::TokenVerification(_))
    ));
  }
}
