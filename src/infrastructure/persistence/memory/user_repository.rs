use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::entities::User;
use crate::domain::user::errors::UserError;
use crate::domain::user::ports::UserRepository;

/// In-memory document store for users, keyed by id.
#[derive(Default)]
pub struct InMemoryUserRepository {
  documents: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn save(&self, user: User) -> Result<User, UserError> {
    self.documents.write().await.insert(user.id, user.clone());
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserError> {
    Ok(self.documents.read().await.get(&id).cloned())
  }
}
