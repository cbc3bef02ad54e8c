use actix_web::web;
use std::sync::Arc;

use crate::application::account::{CreateAccountUseCase, GetAccountByProviderUseCase};
use crate::application::user::{CreateUserUseCase, GetUserByIdUseCase};
use crate::application::workspace::{
  AddUserToWorkspaceUseCase, CreateWorkspaceUseCase, GetUserWorkspacesUseCase,
  GetWorkspaceByIdUseCase,
};
use crate::application::workspace_member::{
  CheckWorkspaceMembershipUseCase, GetMemberWorkspacesUseCase, GetWorkspaceMembersUseCase,
  RemoveWorkspaceMemberUseCase,
};
use crate::domain::auth::services::AuthenticationService;

use super::handlers::auth::{current_session_handler, login_handler, logout_handler};
use super::handlers::users::get_user_handler;
use super::handlers::workspaces::{
  add_user_to_workspace_handler, check_workspace_membership_handler,
  create_workspace_handler, get_member_workspaces_handler, get_user_workspaces_handler,
  get_workspace_handler, get_workspace_members_handler, remove_workspace_member_handler,
};

/// Use cases behind the authentication routes.
pub struct AuthRouteDependencies {
  pub auth_service: Arc<AuthenticationService>,
  pub get_account: Arc<GetAccountByProviderUseCase>,
  pub create_account: Arc<CreateAccountUseCase>,
  pub create_user: Arc<CreateUserUseCase>,
  pub get_user: Arc<GetUserByIdUseCase>,
}

/// Configure authentication routes
///
/// Mounts the identity-exchange endpoints. Mount under `/api/auth`.
///
/// # Routes
///
/// - POST /login - Exchange an externally verified identity for a session
/// - POST /logout - Clear the session cookie
/// - GET /me - Current session projection
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig, deps: AuthRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.auth_service))
    .app_data(web::Data::new(deps.get_account))
    .app_data(web::Data::new(deps.create_account))
    .app_data(web::Data::new(deps.create_user))
    .app_data(web::Data::new(deps.get_user))
    .route("/login", web::post().to(login_handler))
    .route("/logout", web::post().to(logout_handler))
    .route("/me", web::get().to(current_session_handler));
}

/// Use cases behind the workspace routes.
pub struct WorkspaceRouteDependencies {
  pub create_workspace: Arc<CreateWorkspaceUseCase>,
  pub get_workspace: Arc<GetWorkspaceByIdUseCase>,
  pub get_user_workspaces: Arc<GetUserWorkspacesUseCase>,
  pub add_user: Arc<AddUserToWorkspaceUseCase>,
  pub get_members: Arc<GetWorkspaceMembersUseCase>,
  pub check_membership: Arc<CheckWorkspaceMembershipUseCase>,
  pub remove_member: Arc<RemoveWorkspaceMemberUseCase>,
}

/// Configure workspace routes
///
/// Mount under `/api/workspaces`.
///
/// # Routes
///
/// - POST / - Create a workspace (owner = session user)
/// - GET /user/{user_id} - Workspaces a user belongs to
/// - GET /{workspace_id} - One workspace
/// - POST /{workspace_id}/users - Add a user to a workspace
/// - GET /{workspace_id}/members - Membership records
/// - GET /{workspace_id}/members/{user_id} - Membership check
/// - DELETE /{workspace_id}/members/{user_id} - Remove a member
pub fn configure_workspace_routes(
  cfg: &mut web::ServiceConfig,
  deps: WorkspaceRouteDependencies,
) {
  cfg
    .app_data(web::Data::new(deps.create_workspace))
    .app_data(web::Data::new(deps.get_workspace))
    .app_data(web::Data::new(deps.get_user_workspaces))
    .app_data(web::Data::new(deps.add_user))
    .app_data(web::Data::new(deps.get_members))
    .app_data(web::Data::new(deps.check_membership))
    .app_data(web::Data::new(deps.remove_member))
    .route("", web::post().to(create_workspace_handler))
    .route("/user/{user_id}", web::get().to(get_user_workspaces_handler))
    .route("/{workspace_id}", web::get().to(get_workspace_handler))
    .route(
      "/{workspace_id}/users",
      web::post().to(add_user_to_workspace_handler),
    )
    .route(
      "/{workspace_id}/members",
      web::get().to(get_workspace_members_handler),
    )
    .service(
      web::resource("/{workspace_id}/members/{user_id}")
        .route(web::get().to(check_workspace_membership_handler))
        .route(web::delete().to(remove_workspace_member_handler)),
    );
}

/// Configure member routes
///
/// Mount under `/api/members`.
pub fn configure_member_routes(
  cfg: &mut web::ServiceConfig,
  get_member_workspaces: Arc<GetMemberWorkspacesUseCase>,
) {
  cfg
    .app_data(web::Data::new(get_member_workspaces))
    .route(
      "/{user_id}/workspaces",
      web::get().to(get_member_workspaces_handler),
    );
}

/// Configure user routes
///
/// Mount under `/api/users`.
pub fn configure_user_routes(cfg: &mut web::ServiceConfig, get_user: Arc<GetUserByIdUseCase>) {
  cfg
    .app_data(web::Data::new(get_user))
    .route("/{user_id}", web::get().to(get_user_handler));
}
