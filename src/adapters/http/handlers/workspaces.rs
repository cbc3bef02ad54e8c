use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::dtos::{
  AddUserToWorkspaceRequest, CreateWorkspaceRequest, MembershipResponse, SuccessResponse,
};
use crate::adapters::http::errors::ApiError;
use crate::adapters::http::middleware::SessionExt;
use crate::application::use_case::{UseCase, session_user_id};
use crate::application::workspace::{
  AddUserToWorkspaceCommand, AddUserToWorkspaceUseCase, CreateWorkspaceCommand,
  CreateWorkspaceUseCase, GetUserWorkspacesQuery, GetUserWorkspacesUseCase,
  GetWorkspaceByIdQuery, GetWorkspaceByIdUseCase,
};
use crate::application::workspace_member::{
  CheckWorkspaceMembershipQuery, CheckWorkspaceMembershipUseCase, GetMemberWorkspacesQuery,
  GetMemberWorkspacesUseCase, GetWorkspaceMembersQuery, GetWorkspaceMembersUseCase,
  RemoveWorkspaceMemberCommand, RemoveWorkspaceMemberUseCase,
};
use crate::domain::auth::errors::AuthError;

/// POST /api/workspaces
pub async fn create_workspace_handler(
  request: web::Json<CreateWorkspaceRequest>,
  http_req: HttpRequest,
  use_case: web::Data<Arc<CreateWorkspaceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let mut session = http_req.session();
  let owner_id =
    session_user_id(&session).ok_or(ApiError::Auth(AuthError::Unauthenticated))?;

  let workspace = use_case
    .execute(
      CreateWorkspaceCommand {
        name: request.name.clone(),
        owner_id,
      },
      &mut session,
    )
    .await?;

  Ok(HttpResponse::Created().json(workspace))
}

/// GET /api/workspaces/{workspace_id}
pub async fn get_workspace_handler(
  path: web::Path<Uuid>,
  http_req: HttpRequest,
  use_case: web::Data<Arc<GetWorkspaceByIdUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let mut session = http_req.session();
  let workspace = use_case
    .execute(
      GetWorkspaceByIdQuery {
        workspace_id: path.into_inner(),
      },
      &mut session,
    )
    .await?;

  Ok(HttpResponse::Ok().json(workspace))
}

/// GET /api/workspaces/user/{user_id}
pub async fn get_user_workspaces_handler(
  path: web::Path<Uuid>,
  http_req: HttpRequest,
  use_case: web::Data<Arc<GetUserWorkspacesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let mut session = http_req.session();
  let workspaces = use_case
    .execute(
      GetUserWorkspacesQuery {
        user_id: path.into_inner(),
      },
      &mut session,
    )
    .await?;

  Ok(HttpResponse::Ok().json(workspaces))
}

/// POST /api/workspaces/{workspace_id}/users
pub async fn add_user_to_workspace_handler(
  path: web::Path<Uuid>,
  request: web::Json<AddUserToWorkspaceRequest>,
  http_req: HttpRequest,
  use_case: web::Data<Arc<AddUserToWorkspaceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let mut session = http_req.session();
  use_case
    .execute(
      AddUserToWorkspaceCommand {
        workspace_id: path.into_inner(),
        user_id: request.user_id,
      },
      &mut session,
    )
    .await?;

  Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}

/// GET /api/workspaces/{workspace_id}/members
pub async fn get_workspace_members_handler(
  path: web::Path<Uuid>,
  http_req: HttpRequest,
  use_case: web::Data<Arc<GetWorkspaceMembersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let mut session = http_req.session();
  let members = use_case
    .execute(
      GetWorkspaceMembersQuery {
        workspace_id: path.into_inner(),
      },
      &mut session,
    )
    .await?;

  Ok(HttpResponse::Ok().json(members))
}

/// GET /api/workspaces/{workspace_id}/members/{user_id}
pub async fn check_workspace_membership_handler(
  path: web::Path<(Uuid, Uuid)>,
  http_req: HttpRequest,
  use_case: web::Data<Arc<CheckWorkspaceMembershipUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let (workspace_id, user_id) = path.into_inner();
  let mut session = http_req.session();
  let is_member = use_case
    .execute(
      CheckWorkspaceMembershipQuery {
        workspace_id,
        user_id,
      },
      &mut session,
    )
    .await?;

  Ok(HttpResponse::Ok().json(MembershipResponse { is_member }))
}

/// DELETE /api/workspaces/{workspace_id}/members/{user_id}
pub async fn remove_workspace_member_handler(
  path: web::Path<(Uuid, Uuid)>,
  http_req: HttpRequest,
  use_case: web::Data<Arc<RemoveWorkspaceMemberUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let (workspace_id, user_id) = path.into_inner();
  let mut session = http_req.session();
  use_case
    .execute(
      RemoveWorkspaceMemberCommand {
        workspace_id,
        user_id,
      },
      &mut session,
    )
    .await?;

  Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}

/// GET /api/members/{user_id}/workspaces
pub async fn get_member_workspaces_handler(
  path: web::Path<Uuid>,
  http_req: HttpRequest,
  use_case: web::Data<Arc<GetMemberWorkspacesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let mut session = http_req.session();
  let memberships = use_case
    .execute(
      GetMemberWorkspacesQuery {
        user_id: path.into_inner(),
      },
      &mut session,
    )
    .await?;

  Ok(HttpResponse::Ok().json(memberships))
}
