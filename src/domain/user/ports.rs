use async_trait::async_trait;
use uuid::Uuid;

use super::entities::User;
use super::errors::UserError;

/// Document-store contract for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn save(&self, user: User) -> Result<User, UserError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserError>;
}
