pub mod account_repository;
pub mod user_repository;
pub mod workspace_member_repository;
pub mod workspace_repository;

pub use account_repository::InMemoryAccountRepository;
pub use user_repository::InMemoryUserRepository;
pub use workspace_member_repository::InMemoryWorkspaceMemberRepository;
pub use workspace_repository::InMemoryWorkspaceRepository;
