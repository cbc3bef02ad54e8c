use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::errors::ApiError;
use crate::adapters::http::middleware::SessionExt;
use crate::application::use_case::UseCase;
use crate::application::user::{GetUserByIdQuery, GetUserByIdUseCase};

/// GET /api/users/{user_id}
pub async fn get_user_handler(
  path: web::Path<Uuid>,
  http_req: HttpRequest,
  use_case: web::Data<Arc<GetUserByIdUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let mut session = http_req.session();
  let user = use_case
    .execute(
      GetUserByIdQuery {
        user_id: path.into_inner(),
      },
      &mut session,
    )
    .await?;

  Ok(HttpResponse::Ok().json(user))
}
