use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::UseCase;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::workspace_member::entities::WorkspaceMember;
use crate::domain::workspace_member::errors::WorkspaceMemberError;
use crate::domain::workspace_member::ports::WorkspaceMemberRepository;

#[derive(Debug, Clone)]
pub struct GetMemberWorkspacesQuery {
  pub user_id: Uuid,
}

/// Lists a user's membership records; a user can only read their own.
pub struct GetMemberWorkspacesUseCase {
  members: Arc<dyn WorkspaceMemberRepository>,
}

impl GetMemberWorkspacesUseCase {
  pub fn new(members: Arc<dyn WorkspaceMemberRepository>) -> Self {
    Self { members }
  }
}

#[async_trait]
impl UseCase for GetMemberWorkspacesUseCase {
  type Params = GetMemberWorkspacesQuery;
  type Output = Vec<WorkspaceMember>;
  type Error = WorkspaceMemberError;

  async fn authorize(
    &self,
    params: &GetMemberWorkspacesQuery,
    session: &Session,
  ) -> Result<(), WorkspaceMemberError> {
    if !session.is_authenticated() {
      return Err(AuthError::Unauthenticated.into());
    }
    if !session.is_user_with_id(&params.user_id.to_string()) {
      return Err(WorkspaceMemberError::UnauthorizedOperation);
    }
    Ok(())
  }

  async fn handle(
    &self,
    params: GetMemberWorkspacesQuery,
  ) -> Result<Vec<WorkspaceMember>, WorkspaceMemberError> {
    self.members.find_by_user_id(params.user_id).await
  }
}
