pub mod add_workspace_member;
pub mod check_workspace_membership;
pub mod get_member_workspaces;
pub mod get_workspace_members;
pub mod remove_workspace_member;

pub use add_workspace_member::{AddWorkspaceMemberCommand, AddWorkspaceMemberUseCase};
pub use check_workspace_membership::{
  CheckWorkspaceMembershipQuery, CheckWorkspaceMembershipUseCase,
};
pub use get_member_workspaces::{GetMemberWorkspacesQuery, GetMemberWorkspacesUseCase};
pub use get_workspace_members::{GetWorkspaceMembersQuery, GetWorkspaceMembersUseCase};
pub use remove_workspace_member::{
  RemoveWorkspaceMemberCommand, RemoveWorkspaceMemberUseCase,
};
