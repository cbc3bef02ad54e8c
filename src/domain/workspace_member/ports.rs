use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{MemberRole, WorkspaceMember};
use super::errors::WorkspaceMemberError;

/// Document-store contract for workspace memberships. One record per
/// `(workspace_id, user_id)` pair, enforced by the store; absence is
/// `None`/`false`, never an error.
#[async_trait]
pub trait WorkspaceMemberRepository: Send + Sync {
  /// Inserts a membership record; fails with `AlreadyExists` when the
  /// unique `(workspace_id, user_id)` constraint is violated.
  async fn add_member(&self, member: WorkspaceMember) -> Result<(), WorkspaceMemberError>;
  async fn remove_member(
    &self,
    workspace_id: Uuid,
    user_id: Uuid,
  ) -> Result<(), WorkspaceMemberError>;
  async fn find_by_workspace_id(
    &self,
    workspace_id: Uuid,
  ) -> Result<Vec<WorkspaceMember>, WorkspaceMemberError>;
  async fn find_by_user_id(
    &self,
    user_id: Uuid,
  ) -> Result<Vec<WorkspaceMember>, WorkspaceMemberError>;
  async fn find_member(
    &self,
    workspace_id: Uuid,
    user_id: Uuid,
  ) -> Result<Option<WorkspaceMember>, WorkspaceMemberError>;
  async fn is_member(
    &self,
    workspace_id: Uuid,
    user_id: Uuid,
  ) -> Result<bool, WorkspaceMemberError>;
  async fn update_member_role(
    &self,
    workspace_id: Uuid,
    user_id: Uuid,
    role: MemberRole,
  ) -> Result<(), WorkspaceMemberError>;
}
