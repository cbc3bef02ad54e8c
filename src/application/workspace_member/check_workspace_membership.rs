use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::UseCase;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::workspace_member::errors::WorkspaceMemberError;
use crate::domain::workspace_member::ports::WorkspaceMemberRepository;

#[derive(Debug, Clone)]
pub struct CheckWorkspaceMembershipQuery {
  pub workspace_id: Uuid,
  pub user_id: Uuid,
}

/// Answers whether a user belongs to a workspace.
pub struct CheckWorkspaceMembershipUseCase {
  members: Arc<dyn WorkspaceMemberRepository>,
}

impl CheckWorkspaceMembershipUseCase {
  pub fn new(members: Arc<dyn WorkspaceMemberRepository>) -> Self {
    Self { members }
  }
}

#[async_trait]
impl UseCase for CheckWorkspaceMembershipUseCase {
  type Params = CheckWorkspaceMembershipQuery;
  type Output = bool;
  type Error = WorkspaceMemberError;

  async fn authorize(
    &self,
    _params: &CheckWorkspaceMembershipQuery,
    session: &Session,
  ) -> Result<(), WorkspaceMemberError> {
    if !session.is_authenticated() {
      return Err(AuthError::Unauthenticated.into());
    }
    Ok(())
  }

  async fn handle(
    &self,
    params: CheckWorkspaceMembershipQuery,
  ) -> Result<bool, WorkspaceMemberError> {
    self
      .members
      .is_member(params.workspace_id, params.user_id)
      .await
  }
}
