pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorResponse, LoginRequest, LoginResponse, SuccessResponse};
pub use errors::ApiError;
pub use middleware::{
  AuthenticationMiddleware, RequireAdmin, RequireAuthentication, SessionExt,
};
pub use routes::{
  AuthRouteDependencies, WorkspaceRouteDependencies, configure_auth_routes,
  configure_member_routes, configure_user_routes, configure_workspace_routes,
};
