use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::{UseCase, session_user_id};
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::workspace_member::errors::WorkspaceMemberError;
use crate::domain::workspace_member::ports::WorkspaceMemberRepository;

#[derive(Debug, Clone)]
pub struct RemoveWorkspaceMemberCommand {
  pub workspace_id: Uuid,
  pub user_id: Uuid,
}

/// Removes a membership record; fails when it does not exist.
pub struct RemoveWorkspaceMemberUseCase {
  members: Arc<dyn WorkspaceMemberRepository>,
}

impl RemoveWorkspaceMemberUseCase {
  pub fn new(members: Arc<dyn WorkspaceMemberRepository>) -> Self {
    Self { members }
  }
}

#[async_trait]
impl UseCase for RemoveWorkspaceMemberUseCase {
  type Params = RemoveWorkspaceMemberCommand;
  type Output = ();
  type Error = WorkspaceMemberError;

  async fn authorize(
    &self,
    params: &RemoveWorkspaceMemberCommand,
    session: &Session,
  ) -> Result<(), WorkspaceMemberError> {
    if !session.is_authenticated() {
      return Err(AuthError::Unauthenticated.into());
    }

    let requester = session_user_id(session)
      .ok_or(WorkspaceMemberError::UnauthorizedOperation)?;
    if !self.members.is_member(params.workspace_id, requester).await? {
      return Err(WorkspaceMemberError::UnauthorizedOperation);
    }
    Ok(())
  }

  async fn handle(
    &self,
    params: RemoveWorkspaceMemberCommand,
  ) -> Result<(), WorkspaceMemberError> {
    self
      .members
      .find_member(params.workspace_id, params.user_id)
      .await?
      .ok_or(WorkspaceMemberError::NotFound)?;

    self
      .members
      .remove_member(params.workspace_id, params.user_id)
      .await
  }
}
