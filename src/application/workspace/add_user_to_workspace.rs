use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::{UseCase, session_user_id};
use crate::application::workspace_member::{
  AddWorkspaceMemberCommand, AddWorkspaceMemberUseCase,
};
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::ports::WorkspaceRepository;
use crate::domain::workspace_member::entities::MemberRole;

#[derive(Debug, Clone)]
pub struct AddUserToWorkspaceCommand {
  pub workspace_id: Uuid,
  pub user_id: Uuid,
}

/// Adds a user to a workspace's user list and records the membership
/// through the workspace-member module.
pub struct AddUserToWorkspaceUseCase {
  workspaces: Arc<dyn WorkspaceRepository>,
  add_member: Arc<AddWorkspaceMemberUseCase>,
}

impl AddUserToWorkspaceUseCase {
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
impl UseCase for AddUserToWorkspaceUseCase {
  type Params = AddUserToWorkspaceCommand;
  type Output = ();
  type Error = WorkspaceError;

  async fn authorize(
    &self,
    params: &AddUserToWorkspaceCommand,
    session: &Session,
  ) -> Result<(), WorkspaceError> {
    if !session.is_authenticated() {
      return Err(AuthError::Unauthenticated.into());
    }

    let workspace = self
      .workspaces
      .find_by_id(params.workspace_id)
      .await?
      .ok_or(WorkspaceError::NotFound)?;

    // Only existing workspace users may add others.
    let requester = session_user_id(session).ok_or(WorkspaceError::UnauthorizedAccess)?;
    if !workspace.has_user(requester) {
      return Err(WorkspaceError::UnauthorizedAccess);
    }
    Ok(())
  }

  async fn handle(&self, params: AddUserToWorkspaceCommand) -> Result<(), WorkspaceError> {
    let workspace = self
      .workspaces
      .find_by_id(params.workspace_id)
      .await?
      .ok_or(WorkspaceError::NotFound)?;

    if workspace.has_user(params.user_id) {
      return Err(WorkspaceError::UserAlreadyInWorkspace);
    }

    self
      .workspaces
      .add_user(params.workspace_id, params.user_id)
      .await?;

    // Trusted internal call into the member module, skipping its gate.
    self
      .add_member
      .handle(AddWorkspaceMemberCommand {
        workspace_id: params.workspace_id,
        user_id: params.user_id,
        role: MemberRole::Member,
      })
      .await?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::workspace::entities::Workspace;
  use crate::domain::workspace_member::ports::WorkspaceMemberRepository;
  use crate::infrastructure::persistence::memory::{
    InMemoryWorkspaceMemberRepository, InMemoryWorkspaceRepository,
  };

  struct Fixture {
    workspaces: Arc<InMemoryWorkspaceRepository>,
    members: Arc<InMemoryWorkspaceMemberRepository>,
    use_case: AddUserToWorkspaceUseCase,
  }

  fn fixture() -> Fixture {
    let workspaces = Arc::new(InMemoryWorkspaceRepository::new());
    let members = Arc::new(InMemoryWorkspaceMemberRepository::new());
    let use_case = AddUserToWorkspaceUseCase::new(
      workspaces.clone(),
      Arc::new(AddWorkspaceMemberUseCase::new(members.clone())),
    );
    Fixture {
      workspaces,
      members,
      use_case,
    }
  }

  #[tokio::test]
  async fn test_member_adds_user_to_workspace() {
    let fixture = fixture();
    let owner = Uuid::new_v4();
    let newcomer = Uuid::new_v4();
    let workspace = fixture
      .workspaces
      .save(Workspace::new("Design".to_string(), owner))
      .await
      .unwrap();

    let mut session = Session::user(owner.to_string(), None, None).unwrap();
    fixture
      .use_case
      .execute(
        AddUserToWorkspaceCommand {
          workspace_id: workspace.id,
          user_id: newcomer,
        },
        &mut session,
      )
      .await
      .unwrap();

    let updated = fixture
      .workspaces
      .find_by_id(workspace.id)
      .await
      .unwrap()
      .unwrap();
    assert!(updated.has_user(newcomer));

    let membership = fixture
      .members
      .find_member(workspace.id, newcomer)
      .await
      .unwrap()
      .unwrap();
    assert_eq!(membership.role, MemberRole::Member);
  }

  #[tokio::test]
  async fn test_adding_existing_user_conflicts() {
    let fixture = fixture();
    let owner = Uuid::new_v4();
    let workspace = fixture
      .workspaces
      .save(Workspace::new("Design".to_string(), owner))
      .await
      .unwrap();

    let mut session = Session::user(owner.to_string(), None, None).unwrap();
    let result = fixture
      .use_case
      .execute(
        AddUserToWorkspaceCommand {
          workspace_id: workspace.id,
          user_id: owner,
        },
        &mut session,
      )
      .await;

    assert!(matches!(result, Err(WorkspaceError::UserAlreadyInWorkspace)));
  }

  #[tokio::test]
  async fn test_outsider_cannot_add_users() {
    let fixture = fixture();
    let workspace = fixture
      .workspaces
      .save(Workspace::new("Design".to_string(), Uuid::new_v4()))
      .await
      .unwrap();

    let mut session = Session::user(Uuid::new_v4().to_string(), None, None).unwrap();
    let result = fixture
      .use_case
      .execute(
        AddUserToWorkspaceCommand {
          workspace_id: workspace.id,
          user_id: Uuid::new_v4(),
        },
        &mut session,
      )
      .await;

    assert!(matches!(result, Err(WorkspaceError::UnauthorizedAccess)));
  }

  #[tokio::test]
  async fn test_missing_workspace_is_not_found() {
    let fixture = fixture();
    let mut session = Session::user(Uuid::new_v4().to_string(), None, None).unwrap();

    let result = fixture
      .use_case
      .execute(
        AddUserToWorkspaceCommand {
          workspace_id: Uuid::new_v4(),
          user_id: Uuid::new_v4(),
        },
        &mut session,
      )
      .await;

    assert!(matches!(result, Err(WorkspaceError::NotFound)));
  }
}
