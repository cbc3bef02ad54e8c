use actix_web::{
  Error, HttpMessage,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
};

use crate::adapters::http::errors::ApiError;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;

/// Guard middleware rejecting requests whose session is not authenticated.
/// Runs behind [`AuthenticationMiddleware`](super::AuthenticationMiddleware).
pub struct RequireAuthentication;

impl<S, B> Transform<S, ServiceRequest> for RequireAuthentication
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type InitError = ();
  type Transform = RequireAuthenticationService<S>;
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequireAuthenticationService {
      service: Rc::new(service),
    }))
  }
}

pub struct RequireAuthenticationService<S> {
  service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthenticationService<S>
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
    let authenticated = req
      .extensions()
      .get::<Session>()
      .is_some_and(|session| session.is_authenticated());
    let service = Rc::clone(&self.service);

    Box::pin(async move {
      if !authenticated {
        return Err(ApiError::Auth(AuthError::Unauthenticated).into());
      }
      service.call(req).await
    })
  }
}

/// Guard middleware rejecting requests whose session is not an admin.
pub struct RequireAdmin;

impl<S, B> Transform<S, ServiceRequest> for RequireAdmin
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type InitError = ();
  type Transform = RequireAdminService<S>;
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequireAdminService {
      service: Rc::new(service),
    }))
  }
}

pub struct RequireAdminService<S> {
  service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAdminService<S>
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
    let admin = req
      .extensions()
      .get::<Session>()
      .is_some_and(|session| session.session_type().is_admin());
    let service = Rc::clone(&self.service);

    Box::pin(async move {
      if !admin {
        return Err(ApiError::Auth(AuthError::NotAdmin).into());
      }
      service.call(req).await
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::session::SessionValue;
  use crate::domain::auth::value_objects::SessionType;
  use actix_web::error::ResponseError;
  use actix_web::{App, HttpResponse, http::StatusCode, test, web};

  async fn run_behind_authentication_guard(session: Session) -> StatusCode {
    // wrap_fn stands in for the authentication middleware and plants the
    // session into request extensions before the guard sees it.
    let app = test::init_service(
      App::new().service(
        web::resource("/")
          .wrap(RequireAuthentication)
          .wrap_fn(move |req, srv| {
            req.extensions_mut().insert(session.clone());
            srv.call(req)
          })
          .route(web::get().to(|| async { HttpResponse::Ok().finish() })),
      ),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    match test::try_call_service(&app, req).await {
      Ok(res) => res.status(),
      Err(err) => err.error_response().status(),
    }
  }

  #[actix_web::test]
  async fn test_unauthenticated_session_is_rejected() {
    let status =
      run_behind_authentication_guard(Session::unauthenticated(None, None, None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
  }

  #[actix_web::test]
  async fn test_authenticated_session_passes() {
    let session = Session::user("u1", None, None).unwrap();
    let status = run_behind_authentication_guard(session).await;
    assert_eq!(status, StatusCode::OK);
  }

  #[actix_web::test]
  async fn test_admin_guard() {
    let admin = Session::new(SessionValue {
      id: None,
      session_type: SessionType::Admin,
      distinct_id: "root".to_string(),
      roles: Vec::new(),
      registered_at: None,
      source: None,
      device: None,
      authorization_status: None,
    })
    .unwrap();
    let plain_user = Session::user("u1", None, None).unwrap();

    for (session, expected) in [
      (admin, StatusCode::OK),
      (plain_user, StatusCode::FORBIDDEN),
    ] {
      let app = test::init_service(
        App::new().service(
          web::resource("/")
            .wrap(RequireAdmin)
            .wrap_fn(move |req, srv| {
              req.extensions_mut().insert(session.clone());
              srv.call(req)
            })
            .route(web::get().to(|| async { HttpResponse::Ok().finish() })),
        ),
      )
      .await;

      let req = test::TestRequest::get().uri("/").to_request();
      let status = match test::try_call_service(&app, req).await {
        Ok(res) => res.status(),
        Err(err) => err.error_response().status(),
      };
      assert_eq!(status, expected);
    }
  }
}
