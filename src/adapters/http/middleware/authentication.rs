use actix_web::{
  Error, HttpMessage, HttpRequest,
  cookie::{Cookie, time::Duration},
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  http::header::{self, HeaderValue},
};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::domain::auth::services::{
  AuthenticationArtifacts, AuthenticationService, CookieWrite,
};
use crate::domain::auth::session::{Session, SessionValue};
use crate::domain::auth::value_objects::{SessionDevice, SessionSource};

/// Tokens younger than this are left alone; older ones are reissued.
const REFRESH_AFTER_SECONDS: i64 = 60 * 60;

/// Authentication middleware resolving every request to a [`Session`].
///
/// 1. Picks the candidate token: session cookie, overridden by a `Bearer`
///    authorization header.
/// 2. Derives the device from `User-Agent` and client window-size headers.
/// 3. On verification failure (or no token) attaches an unauthenticated
///    session and lets the request proceed; a bad token is never fatal here.
/// 4. On success attaches an authenticated session built from the claims.
/// 5. Reissues the token when it is older than an hour, appending refreshed
///    `Authorization` and cookie headers to the response.
pub struct AuthenticationMiddleware {
  auth_service: Arc<AuthenticationService>,
}

impl AuthenticationMiddleware {
  pub fn new(auth_service: Arc<AuthenticationService>) -> Self {
    Self { auth_service }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthenticationMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type InitError = ();
  type Transform = AuthenticationMiddlewareService<S>;
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthenticationMiddlewareService {
      service: Rc::new(service),
      auth_service: self.auth_service.clone(),
    }))
  }
}

pub struct AuthenticationMiddlewareService<S> {
  service: Rc<S>,
  auth_service: Arc<AuthenticationService>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let auth_service = self.auth_service.clone();

    Box::pin(async move {
      let token = extract_token(&req, auth_service.cookie_name());
      let device = derive_device(&req);
      let client_session_id = header_string(&req, "Client-Session-Id");

      let claims = match auth_service.verify(&token).await {
        Ok(claims) => claims,
        Err(e) => {
          tracing::debug!("Token verification failed: {}", e);
          None
        }
      };

      let (session, refresh) = match claims {
        None => (
          Session::unauthenticated(
            client_session_id,
            Some(device),
            Some(SessionSource::HttpRequest),
          ),
          None,
        ),
        Some(claims) => {
          let session = Session::new(SessionValue {
            id: client_session_id.clone(),
            session_type: claims.session_type,
            distinct_id: claims.distinct_id.clone(),
            roles: Vec::new(),
            registered_at: None,
            source: Some(SessionSource::HttpRequest),
            device: Some(device.clone()),
            authorization_status: None,
          });
          match session {
            Ok(session) => {
              let refresh = refresh_token(&auth_service, &session, claims.iat).await;
              (session, refresh)
            }
            Err(e) => {
              tracing::warn!("Rejecting token with inconsistent claims: {}", e);
              (
                Session::unauthenticated(
                  client_session_id,
                  Some(device),
                  Some(SessionSource::HttpRequest),
                ),
                None,
              )
            }
          }
        }
      };

      req.extensions_mut().insert(session);

      let mut res = service.call(req).await?;

      if let Some(artifacts) = refresh {
        if let Ok(value) = HeaderValue::from_str(&artifacts.authorization_header) {
          res
            .response_mut()
            .headers_mut()
            .append(header::AUTHORIZATION, value);
        }
        if let Err(e) = res.response_mut().add_cookie(&session_cookie(&artifacts.cookie)) {
          tracing::warn!("Failed to attach refreshed session cookie: {}", e);
        }
      }

      Ok(res)
    })
  }
}

/// Builds the transport cookie from a domain-level cookie write.
pub fn session_cookie(write: &CookieWrite) -> Cookie<'static> {
  let mut builder = Cookie::build(write.name.clone(), write.value.clone())
    .secure(write.secure)
    .http_only(write.http_only)
    .max_age(Duration::seconds(write.max_age_seconds));
  if let Some(domain) = &write.domain {
    builder = builder.domain(domain.clone());
  }
  builder.finish()
}

fn extract_token(req: &ServiceRequest, cookie_name: &str) -> String {
  let mut token = req
    .cookie(cookie_name)
    .map(|cookie| cookie.value().to_string())
    .unwrap_or_default();

  // A bearer header overrides the cookie
  if let Some(bearer) = req
    .headers()
    .get(header::AUTHORIZATION)
    .and_then(|value| value.to_str().ok())
    .and_then(|value| value.strip_prefix("Bearer "))
  {
    token = bearer.to_string();
  }

  token
}

fn derive_device(req: &ServiceRequest) -> SessionDevice {
  match header_string(req, "User-Agent") {
    None => SessionDevice::undetectable(),
    Some(user_agent) => SessionDevice::browser_user_agent(
      &user_agent,
      header_string(req, "Client-Window-Width").as_deref(),
      header_string(req, "Client-Window-Height").as_deref(),
    ),
  }
}

fn header_string(req: &ServiceRequest, name: &str) -> Option<String> {
  req
    .headers()
    .get(name)
    .and_then(|value| value.to_str().ok())
    .map(|value| value.to_string())
}

async fn refresh_token(
  auth_service: &AuthenticationService,
  session: &Session,
  issued_at: i64,
) -> Option<AuthenticationArtifacts> {
  // Do not refresh tokens issued less than an hour ago
  if Utc::now().timestamp() - issued_at < REFRESH_AFTER_SECONDS {
    return None;
  }

  // TODO: blacklist the superseded token id (jti) once a revocation store
  // exists; superseded tokens currently stay valid until their exp.

  match auth_service.authenticate(session).await {
    Ok(artifacts) => Some(artifacts),
    Err(e) => {
      tracing::warn!("Token refresh failed: {}", e);
      None
    }
  }
}

/// Extension trait to extract the resolved session from a request.
pub trait SessionExt {
  /// Get the session from request extensions
  ///
  /// # Panics
  ///
  /// Panics if no session is present. This should only be called in
  /// handlers running behind `AuthenticationMiddleware`.
  fn session(&self) -> Session;
}

impl SessionExt for HttpRequest {
  fn session(&self) -> Session {
    self
      .extensions()
      .get::<Session>()
      .cloned()
      .expect("Session not found in request extensions. Did you forget to add AuthenticationMiddleware?")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::ports::TokenClaims;
  use crate::domain::auth::services::{
    AuthenticationConfig, TokenAlgorithm, TokenExpiration,
  };
  use crate::domain::auth::value_objects::SessionType;
  use actix_web::{App, HttpResponse, test, web};
  use jsonwebtoken::{Algorithm, EncodingKey, Header};
  use uuid::Uuid;

  const SECRET: &str = "test-secret";
  const COOKIE_NAME: &str = "huddle_session";

  fn auth_service() -> Arc<AuthenticationService> {
    let tokens = Arc::new(crate::infrastructure::security::JwtTokenService::new(
      SECRET,
      TokenAlgorithm::HS256,
      TokenExpiration::SevenDays,
    ));
    Arc::new(AuthenticationService::new(
      tokens,
      AuthenticationConfig {
        cookie_name: COOKIE_NAME.to_string(),
        cookie_domain: None,
        expiration: TokenExpiration::SevenDays,
        key_id: "primary".to_string(),
      },
    ))
  }

  async fn probe(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(req.session().to_value())
  }

  fn token_with_iat(iat: i64) -> String {
    let claims = TokenClaims {
      session_type: SessionType::Authenticated,
      distinct_id: "u1".to_string(),
      roles: vec!["user-u1".to_string()],
      iat,
      exp: iat + TokenExpiration::SevenDays.as_seconds(),
      jti: Uuid::new_v4().to_string(),
      sub: "u1".to_string(),
      kid: None,
    };
    jsonwebtoken::encode(
      &Header::new(Algorithm::HS256),
      &claims,
      &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
  }

  #[actix_web::test]
  async fn test_no_token_yields_unauthenticated_session() {
    let app = test::init_service(
      App::new()
        .wrap(AuthenticationMiddleware::new(auth_service()))
        .route("/", web::get().to(probe)),
    )
    .await;

    let req = test::TestRequest::get()
      .uri("/")
      .insert_header(("Client-Session-Id", "client-1"))
      .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["type"], "unauthenticated");
    assert_eq!(body["id"], "client-1");
    assert_eq!(body["source"], "httpRequest");
  }

  #[actix_web::test]
  async fn test_garbage_token_is_not_fatal() {
    let app = test::init_service(
      App::new()
        .wrap(AuthenticationMiddleware::new(auth_service()))
        .route("/", web::get().to(probe)),
    )
    .await;

    let req = test::TestRequest::get()
      .uri("/")
      .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
      .to_request();
    let res = test::call_service(&app, req).await;

    assert!(res.status().is_success());
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["type"], "unauthenticated");
  }

  #[actix_web::test]
  async fn test_bearer_token_yields_authenticated_session() {
    let app = test::init_service(
      App::new()
        .wrap(AuthenticationMiddleware::new(auth_service()))
        .route("/", web::get().to(probe)),
    )
    .await;

    let token = token_with_iat(Utc::now().timestamp());
    let req = test::TestRequest::get()
      .uri("/")
      .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
      .insert_header((header::USER_AGENT, "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0"))
      .to_request();
    let res = test::call_service(&app, req).await;

    // Fresh token, no refresh headers
    assert!(res.headers().get(header::AUTHORIZATION).is_none());

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["type"], "authenticated");
    assert_eq!(body["distinctId"], "u1");
    assert_eq!(body["device"]["name"], "firefox");
  }

  #[actix_web::test]
  async fn test_cookie_token_is_accepted() {
    let app = test::init_service(
      App::new()
        .wrap(AuthenticationMiddleware::new(auth_service()))
        .route("/", web::get().to(probe)),
    )
    .await;

    let token = token_with_iat(Utc::now().timestamp());
    let req = test::TestRequest::get()
      .uri("/")
      .cookie(Cookie::new(COOKIE_NAME, token))
      .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["type"], "authenticated");
  }

  #[actix_web::test]
  async fn test_stale_token_is_refreshed() {
    let app = test::init_service(
      App::new()
        .wrap(AuthenticationMiddleware::new(auth_service()))
        .route("/", web::get().to(probe)),
    )
    .await;

    let token = token_with_iat(Utc::now().timestamp() - 2 * 60 * 60);
    let req = test::TestRequest::get()
      .uri("/")
      .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
      .to_request();
    let res = test::call_service(&app, req).await;

    let refreshed = res
      .headers()
      .get(header::AUTHORIZATION)
      .and_then(|value| value.to_str().ok())
      .unwrap();
    assert!(refreshed.starts_with("Bearer "));
    assert_ne!(refreshed, format!("Bearer {token}"));

    let cookie = res
      .response()
      .cookies()
      .find(|cookie| cookie.name() == COOKIE_NAME)
      .unwrap();
    assert!(!cookie.value().is_empty());
    assert_ne!(cookie.value(), token);
  }

  #[actix_web::test]
  async fn test_missing_user_agent_yields_undetectable_device() {
    let app = test::init_service(
      App::new()
        .wrap(AuthenticationMiddleware::new(auth_service()))
        .route("/", web::get().to(probe)),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["device"]["platform"], "");
    assert_eq!(body["device"]["userAgent"], "");
  }

  #[::std::prelude::v1::test]
  fn test_session_cookie_attributes() {
    let cookie = session_cookie(&CookieWrite {
      name: COOKIE_NAME.to_string(),
      value: "abc".to_string(),
      domain: Some("example.com".to_string()),
      secure: true,
      http_only: true,
      max_age_seconds: 60,
    });

    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.domain(), Some("example.com"));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(60)));
  }
}
