use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::UseCase;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::workspace::entities::Workspace;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::ports::WorkspaceRepository;

#[derive(Debug, Clone)]
pub struct GetUserWorkspacesQuery {
  pub user_id: Uuid,
}

/// Lists the workspaces a user belongs to; a user can only list their own.
pub struct GetUserWorkspacesUseCase {
  workspaces: Arc<dyn WorkspaceRepository>,
}

impl GetUserWorkspacesUseCase {
  pub fn new(workspaces: Arc<dyn WorkspaceRepository>) -> Self {
    Self { workspaces }
  }
}

#[async_trait]
impl UseCase for GetUserWorkspacesUseCase {
  type Params = GetUserWorkspacesQuery;
  type Output = Vec<Workspace>;
  type Error = WorkspaceError;

  async fn authorize(
    &self,
    params: &GetUserWorkspacesQuery,
    session: &Session,
  ) -> Result<(), WorkspaceError> {
    if !session.is_authenticated() {
      return Err(AuthError::Unauthenticated.into());
    }
    if !session.is_user_with_id(&params.user_id.to_string()) {
      return Err(WorkspaceError::UnauthorizedAccess);
    }
    Ok(())
  }

  async fn handle(
    &self,
    params: GetUserWorkspacesQuery,
  ) -> Result<Vec<Workspace>, WorkspaceError> {
    self.workspaces.find_by_user_id(params.user_id).await
  }
}
