use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::workspace_member::entities::{MemberRole, WorkspaceMember};
use crate::domain::workspace_member::errors::WorkspaceMemberError;
use crate::domain::workspace_member::ports::WorkspaceMemberRepository;

/// In-memory document store for memberships. The `(workspace_id, user_id)`
/// key doubles as the unique-membership constraint.
#[derive(Default)]
pub struct InMemoryWorkspaceMemberRepository {
  documents: RwLock<HashMap<(Uuid, Uuid), WorkspaceMember>>,
}

impl InMemoryWorkspaceMemberRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl WorkspaceMemberRepository for InMemoryWorkspaceMemberRepository {
  async fn add_member(&self, member: WorkspaceMember) -> Result<(), WorkspaceMemberError> {
    let mut documents = self.documents.write().await;
    let key = (member.workspace_id, member.user_id);
    if documents.contains_key(&key) {
      return Err(WorkspaceMemberError::AlreadyExists);
    }
    documents.insert(key, member);
    Ok(())
  }

  async fn remove_member(
    &self,
    workspace_id: Uuid,
    user_id: Uuid,
  ) -> Result<(), WorkspaceMemberError> {
    self
      .documents
      .write()
      .await
      .remove(&(workspace_id, user_id));
    Ok(())
  }

  async fn find_by_workspace_id(
    &self,
    workspace_id: Uuid,
  ) -> Result<Vec<WorkspaceMember>, WorkspaceMemberError> {
    Ok(
      self
        .documents
        .read()
        .await
        .values()
        .filter(|member| member.workspace_id == workspace_id)
        .cloned()
        .collect(),
    )
  }

  async fn find_by_user_id(
    &self,
    user_id: Uuid,
  ) -> Result<Vec<WorkspaceMember>, WorkspaceMemberError> {
    Ok(
      self
        .documents
        .read()
        .await
        .values()
        .filter(|member| member.user_id == user_id)
        .cloned()
        .collect(),
    )
  }

  async fn find_member(
    &self,
    workspace_id: Uuid,
    user_id: Uuid,
  ) -> Result<Option<WorkspaceMember>, WorkspaceMemberError> {
    Ok(
      self
        .documents
        .read()
        .await
        .get(&(workspace_id, user_id))
        .cloned(),
    )
  }

  async fn is_member(
    &self,
    workspace_id: Uuid,
    user_id: Uuid,
  ) -> Result<bool, WorkspaceMemberError> {
    Ok(
      self
        .documents
        .read()
        .await
        .contains_key(&(workspace_id, user_id)),
    )
  }

  async fn update_member_role(
    &self,
    workspace_id: Uuid,
    user_id: Uuid,
    role: MemberRole,
  ) -> Result<(), WorkspaceMemberError> {
    let mut documents = self.documents.write().await;
    let member = documents
      .get_mut(&(workspace_id, user_id))
      .ok_or(WorkspaceMemberError::NotFound)?;
    member.role = role;
    member.updated_at = Utc::now();
    Ok(())
  }
}
