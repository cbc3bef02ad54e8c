use serde::Deserialize;
use std::sync::Arc;

use super::errors::AuthError;
use super::ports::{SessionClaims, TokenClaims, TokenOptions, TokenService};
use super::session::Session;

/// Signing algorithms this service accepts. Anything else is rejected at
/// configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TokenAlgorithm {
  HS256,
  HS384,
  HS512,
}

/// Fixed set of human-readable token lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TokenExpiration {
  #[serde(rename = "1d")]
  OneDay,
  #[serde(rename = "7d")]
  SevenDays,
  #[serde(rename = "14d")]
  FourteenDays,
  #[serde(rename = "30d")]
  ThirtyDays,
}

impl TokenExpiration {
  pub fn as_seconds(&self) -> i64 {
    const DAY: i64 = 24 * 60 * 60;
    match self {
      Self::OneDay => DAY,
      Self::SevenDays => 7 * DAY,
      Self::FourteenDays => 14 * DAY,
      Self::ThirtyDays => 30 * DAY,
    }
  }
}

/// Instruction for the transport layer to write (or clear) the session
/// cookie. `max_age_seconds == 0` makes the client drop the cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieWrite {
  pub name: String,
  pub value: String,
  pub domain: Option<String>,
  pub secure: bool,
  pub http_only: bool,
  pub max_age_seconds: i64,
}

/// Everything a successful authentication hands to the transport layer.
#[derive(Debug, Clone)]
pub struct AuthenticationArtifacts {
  pub token: String,
  /// Ready-to-emit `Authorization` header value (`Bearer <token>`).
  pub authorization_header: String,
  pub cookie: CookieWrite,
}

/// Fixed-at-construction configuration of the authentication service.
#[derive(Debug, Clone)]
pub struct AuthenticationConfig {
  pub cookie_name: String,
  pub cookie_domain: Option<String>,
  pub expiration: TokenExpiration,
  pub key_id: String,
}

/// Orchestrates token issuance and verification and packages the results as
/// cookie/header delivery instructions. Stateless beyond its configuration;
/// safe for unsynchronized concurrent use.
pub struct AuthenticationService {
  tokens: Arc<dyn TokenService>,
  config: AuthenticationConfig,
}

impl AuthenticationService {
  pub fn new(tokens: Arc<dyn TokenService>, config: AuthenticationConfig) -> Self {
    Self { tokens, config }
  }

  /// Issues a new signed token for `session` and wraps it as both a
  /// `Bearer` header value and a cookie write.
  pub async fn authenticate(
    &self,
    session: &Session,
  ) -> Result<AuthenticationArtifacts, AuthError> {
    let token = self
      .tokens
      .generate_token(
        SessionClaims {
          session_type: session.session_type(),
          distinct_id: session.distinct_id().to_string(),
          roles: session.roles().to_vec(),
        },
        TokenOptions {
          kid: self.config.key_id.clone(),
          sub: session.distinct_id().to_string(),
        },
      )
      .await?;

    Ok(AuthenticationArtifacts {
      authorization_header: format!("Bearer {token}"),
      cookie: CookieWrite {
        name: self.config.cookie_name.clone(),
        value: token.clone(),
        domain: self.config.cookie_domain.clone(),
        secure: true,
        http_only: true,
        max_age_seconds: self.config.expiration.as_seconds(),
      },
      token,
    })
  }

  /// `Ok(None)` for an empty token; verification failures propagate
  /// unchanged for the caller to interpret as "no valid session".
  pub async fn verify(&self, token: &str) -> Result<Option<TokenClaims>, AuthError> {
    if token.is_empty() {
      return Ok(None);
    }
    Ok(Some(self.tokens.verify_token(token).await?))
  }

  /// Cookie write that clears the session cookie on the client.
  pub fn deauthenticate(&self) -> CookieWrite {
    CookieWrite {
      name: self.config.cookie_name.clone(),
      value: String::new(),
      domain: self.config.cookie_domain.clone(),
      secure: true,
      http_only: true,
      max_age_seconds: 0,
    }
  }

  pub fn cookie_name(&self) -> &str {
    &self.config.cookie_name
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::value_objects::SessionType;
  use async_trait::async_trait;

  struct StaticTokenService;

  #[async_trait]
  impl TokenService for StaticTokenService {
    async fn generate_token(
      &self,
      claims: SessionClaims,
      options: TokenOptions,
    ) -> Result<String, AuthError> {
      Ok(format!(
        "token-{}-{}-{}",
        claims.session_type, claims.distinct_id, options.kid
      ))
    }

    async fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
      if token == "broken" {
        return Err(AuthError::TokenVerification("bad signature".to_string()));
      }
      Ok(TokenClaims {
        session_type: SessionType::Authenticated,
        distinct_id: "u1".to_string(),
        roles: vec!["user-u1".to_string()],
        iat: 0,
        exp: 1,
        jti: "jti-1".to_string(),
        sub: "u1".to_string(),
        kid: Some("primary".to_string()),
      })
    }
  }

  fn service() -> AuthenticationService {
    AuthenticationService::new(
      Arc::new(StaticTokenService),
      AuthenticationConfig {
        cookie_name: "huddle_session".to_string(),
        cookie_domain: Some("example.com".to_string()),
        expiration: TokenExpiration::SevenDays,
        key_id: "primary".to_string(),
      },
    )
  }

  #[tokio::test]
  async fn test_authenticate_packages_header_and_cookie() {
    let session = Session::user("u1", None, None).unwrap();
    let artifacts = service().authenticate(&session).await.unwrap();

    assert_eq!(artifacts.token, "token-authenticated-u1-primary");
    assert_eq!(
      artifacts.authorization_header,
      format!("Bearer {}", artifacts.token)
    );
    assert_eq!(artifacts.cookie.name, "huddle_session");
    assert_eq!(artifacts.cookie.value, artifacts.token);
    assert_eq!(artifacts.cookie.domain.as_deref(), Some("example.com"));
    assert!(artifacts.cookie.secure);
    assert!(artifacts.cookie.http_only);
    assert_eq!(artifacts.cookie.max_age_seconds, 7 * 24 * 60 * 60);
  }

  #[tokio::test]
  async fn test_verify_empty_token_is_no_session() {
    assert!(service().verify("").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_verify_surfaces_token_failures() {
    assert!(matches!(
      service().verify("broken").await,
      Err(AuthError::TokenVerification(_))
    ));
  }

  #[tokio::test]
  async fn test_verify_returns_claims() {
    let claims = service().verify("anything").await.unwrap().unwrap();
    assert_eq!(claims.distinct_id, "u1");
    assert_eq!(claims.sub, "u1");
  }

  #[test]
  fn test_deauthenticate_clears_cookie() {
    let cookie = service().deauthenticate();
    assert_eq!(cookie.name, "huddle_session");
    assert_eq!(cookie.value, "");
    assert_eq!(cookie.max_age_seconds, 0);
    assert!(cookie.secure);
    assert!(cookie.http_only);
  }

  #[test]
  fn test_expiration_table() {
    assert_eq!(TokenExpiration::OneDay.as_seconds(), 86_400);
    assert_eq!(TokenExpiration::ThirtyDays.as_seconds(), 2_592_000);
  }
}
