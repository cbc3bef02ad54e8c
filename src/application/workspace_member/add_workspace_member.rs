use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::{UseCase, session_user_id};
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::workspace_member::entities::{MemberRole, WorkspaceMember};
use crate::domain::workspace_member::errors::WorkspaceMemberError;
use crate::domain::workspace_member::ports::WorkspaceMemberRepository;

#[derive(Debug, Clone)]
pub struct AddWorkspaceMemberCommand {
  pub workspace_id: Uuid,
  pub user_id: Uuid,
  pub role: MemberRole,
}

/// Records a user's membership in a workspace.
///
/// Idempotent: adding an existing member with the same role is a no-op;
/// a different role updates the record in place.
pub struct AddWorkspaceMemberUseCase {
  members: Arc<dyn WorkspaceMemberRepository>,
}

impl AddWorkspaceMemberUseCase {
  pub fn new(members: Arc<dyn WorkspaceMemberRepository>) -> Self {
    Self { members }
  }
}

#[async_trait]
impl UseCase for AddWorkspaceMemberUseCase {
  type Params = AddWorkspaceMemberCommand;
  type Output = ();
  type Error = WorkspaceMemberError;

  async fn authorize(
    &self,
    params: &AddWorkspaceMemberCommand,
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

  async fn handle(&self, params: AddWorkspaceMemberCommand) -> Result<(), WorkspaceMemberError> {
    match self
      .members
      .find_member(params.workspace_id, params.user_id)
      .await?
    {
      Some(existing) if existing.role == params.role => Ok(()),
      Some(_) => {
        self
          .members
          .update_member_role(params.workspace_id, params.user_id, params.role)
          .await
      }
      None => {
        self
          .members
          .add_member(WorkspaceMember::new(
            params.workspace_id,
            params.user_id,
            params.role,
          ))
          .await
      }
    }
  }
}
