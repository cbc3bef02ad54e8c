use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::{UseCase, session_user_id};
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::workspace::entities::Workspace;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::ports::WorkspaceRepository;

#[derive(Debug, Clone)]
pub struct GetWorkspaceByIdQuery {
  pub workspace_id: Uuid,
}

/// Reads a single workspace; visible to its users only.
pub struct GetWorkspaceByIdUseCase {
  workspaces: Arc<dyn WorkspaceRepository>,
}

impl GetWorkspaceByIdUseCase {
  pub fn new(workspaces: Arc<dyn WorkspaceRepository>) -> Self {
    Self { workspaces }
  }
}

#[async_trait]
impl UseCase for GetWorkspaceByIdUseCase {
  type Params = GetWorkspaceByIdQuery;
  type Output = Workspace;
  type Error = WorkspaceError;

  async fn authorize(
    &self,
    params: &GetWorkspaceByIdQuery,
    session: &Session,
  ) -> Result<(), WorkspaceError> {
    if !session.is_authenticated() {
      return Err(AuthError::Unauthenticated.into());
    }

    let workspace = self
      .workspaces
      .find_by_id(params.workspace_id)
      .await?
      .ok_or(WorkspaceError::NotFound)?;

    let requester = session_user_id(session).ok_or(WorkspaceError::UnauthorizedAccess)?;
    if !workspace.has_user(requester) {
      return Err(WorkspaceError::UnauthorizedAccess);
    }
    Ok(())
  }

  async fn handle(&self, params: GetWorkspaceByIdQuery) -> Result<Workspace, WorkspaceError> {
    self
      .workspaces
      .find_by_id(params.workspace_id)
      .await?
      .ok_or(WorkspaceError::NotFound)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemoryWorkspaceRepository;

  #[tokio::test]
  async fn test_user_reads_own_workspace() {
    let repository = Arc::new(InMemoryWorkspaceRepository::new());
    let use_case = GetWorkspaceByIdUseCase::new(repository.clone());
    let owner = Uuid::new_v4();
    let workspace = repository
      .save(Workspace::new("Design".to_string(), owner))
      .await
      .unwrap();

    let mut session = Session::user(owner.to_string(), None, None).unwrap();
    let found = use_case
      .execute(
        GetWorkspaceByIdQuery {
          workspace_id: workspace.id,
        },
        &mut session,
      )
      .await
      .unwrap();

    assert_eq!(found.id, workspace.id);
  }

  #[tokio::test]
  async fn test_outsider_is_rejected() {
    let repository = Arc::new(InMemoryWorkspaceRepository::new());
    let use_case = GetWorkspaceByIdUseCase::new(repository.clone());
    let workspace = repository
      .save(Workspace::new("Design".to_string(), Uuid::new_v4()))
      .await
      .unwrap();

    let mut session = Session::user(Uuid::new_v4().to_string(), None, None).unwrap();
    let result = use_case
      .execute(
        GetWorkspaceByIdQuery {
          workspace_id: workspace.id,
        },
        &mut session,
      )
      .await;

    assert!(matches!(result, Err(WorkspaceError::UnauthorizedAccess)));
  }

  #[tokio::test]
  async fn test_missing_workspace_is_not_found() {
    let repository = Arc::new(InMemoryWorkspaceRepository::new());
    let use_case = GetWorkspaceByIdUseCase::new(repository);

    let mut session = Session::user(Uuid::new_v4().to_string(), None, None).unwrap();
    let result = use_case
      .execute(
        GetWorkspaceByIdQuery {
          workspace_id: Uuid::new_v4(),
        },
        &mut session,
      )
      .await;

    assert!(matches!(result, Err(WorkspaceError::NotFound)));
  }
}
