use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::{UseCase, session_user_id};
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::workspace_member::entities::WorkspaceMember;
use crate::domain::workspace_member::errors::WorkspaceMemberError;
use crate::domain::workspace_member::ports::WorkspaceMemberRepository;

#[derive(Debug, Clone)]
pub struct GetWorkspaceMembersQuery {
  pub workspace_id: Uuid,
}

/// Lists the membership records of a workspace; visible to members only.
pub struct GetWorkspaceMembersUseCase {
  members: Arc<dyn WorkspaceMemberRepository>,
}

impl GetWorkspaceMembersUseCase {
  pub fn new(members: Arc<dyn WorkspaceMemberRepository>) -> Self {
    Self { members }
  }
}

#[async_trait]
impl UseCase for GetWorkspaceMembersUseCase {
  type Params = GetWorkspaceMembersQuery;
  type Output = Vec<WorkspaceMember>;
  type Error = WorkspaceMemberError;

  async fn authorize(
    &self,
    params: &GetWorkspaceMembersQuery,
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
    params: GetWorkspaceMembersQuery,
  ) -> Result<Vec<WorkspaceMember>, WorkspaceMemberError> {
    self.members.find_by_workspace_id(params.workspace_id).await
  }
}
