use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::workspace::entities::Workspace;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::ports::WorkspaceRepository;

/// In-memory document store for workspaces, keyed by id.
#[derive(Default)]
pub struct InMemoryWorkspaceRepository {
  documents: RwLock<HashMap<Uuid, Workspace>>,
}

impl InMemoryWorkspaceRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
  async fn save(&self, workspace: Workspace) -> Result<Workspace, WorkspaceError> {
    self
      .documents
      .write()
      .await
      .insert(workspace.id, workspace.clone());
    Ok(workspace)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Workspace>, WorkspaceError> {
    Ok(self.documents.read().await.get(&id).cloned())
  }

  async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Workspace>, WorkspaceError> {
    Ok(
      self
        .documents
        .read()
        .await
        .values()
        .filter(|workspace| workspace.has_user(user_id))
        .cloned()
        .collect(),
    )
  }

  async fn add_user(&self, workspace_id: Uuid, user_id: Uuid) -> Result<(), WorkspaceError> {
    let mut documents = self.documents.write().await;
    let workspace = documents
      .get_mut(&workspace_id)
      .ok_or(WorkspaceError::NotFound)?;
    if !workspace.has_user(user_id) {
      workspace.user_ids.push(user_id);
      workspace.updated_at = Utc::now();
    }
    Ok(())
  }
}
