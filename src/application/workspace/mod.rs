pub mod add_user_to_workspace;
pub mod create_workspace;
pub mod get_user_workspaces;
pub mod get_workspace_by_id;

pub use add_user_to_workspace::{AddUserToWorkspaceCommand, AddUserToWorkspaceUseCase};
pub use create_workspace::{CreateWorkspaceCommand, CreateWorkspaceUseCase};
pub use get_user_workspaces::{GetUserWorkspacesQuery, GetUserWorkspacesUseCase};
pub use get_workspace_by_id::{GetWorkspaceByIdQuery, GetWorkspaceByIdUseCase};
