use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::UseCase;
use crate::application::workspace_member::{
  AddWorkspaceMemberCommand, AddWorkspaceMemberUseCase,
};
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::workspace::entities::Workspace;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::ports::WorkspaceRepository;
use crate::domain::workspace_member::entities::MemberRole;

#[derive(Debug, Clone)]
pub struct CreateWorkspaceCommand {
  pub name: String,
  pub owner_id: Uuid,
}

/// Creates a workspace and records the owner's membership through the
/// workspace-member module.
pub struct CreateWorkspaceUseCase {
  workspaces: Arc<dyn WorkspaceRepository>,
  add_member: Arc<AddWorkspaceMemberUseCase>,
}

impl CreateWorkspaceUseCase {
  pub fn new(
    workspaces: Arc<dyn WorkspaceRepository>,
    add_member: Arc<AddWorkspaceMemberUseCase>,
  ) -> Self {
    Self {
      workspaces,
      add_member,
    }
  }
}

#[async_trait]
impl UseCase for CreateWorkspaceUseCase {
  type Params = CreateWorkspaceCommand;
  type Output = Workspace;
  type Error = WorkspaceError;

  async fn authorize(
    &self,
    _params: &CreateWorkspaceCommand,
    session: &Session,
  ) -> Result<(), WorkspaceError> {
    if !session.is_authenticated() {
      return Err(AuthError::Unauthenticated.into());
    }
    Ok(())
  }

  async fn handle(&self, params: CreateWorkspaceCommand) -> Result<Workspace, WorkspaceError> {
    let workspace = self
      .workspaces
      .save(Workspace::new(params.name, params.owner_id))
      .await?;

    // Trusted internal call: membership bookkeeping goes straight to the
    // member module's handler, skipping its authorize gate.
    self
      .add_member
      .handle(AddWorkspaceMemberCommand {
        workspace_id: workspace.id,
        user_id: params.owner_id,
        role: MemberRole::Owner,
      })
      .await?;

    Ok(workspace)
  }
}
