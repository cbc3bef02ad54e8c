use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Workspace;
use super::errors::WorkspaceError;

/// Document-store contract for workspaces. Absence is `None`, never an
/// error.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
  async fn save(&self, workspace: Workspace) -> Result<Workspace, WorkspaceError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Workspace>, WorkspaceError>;
  async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Workspace>, WorkspaceError>;

  /// Adds `user_id` to the workspace's user list; a no-op when already
  /// present.
  async fn add_user(&self, workspace_id: Uuid, user_id: Uuid) -> Result<(), WorkspaceError>;
}
