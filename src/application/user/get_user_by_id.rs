use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::UseCase;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::session::Session;
use crate::domain::user::entities::User;
use crate::domain::user::errors::UserError;
use crate::domain::user::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetUserByIdQuery {
  pub user_id: Uuid,
}

/// Reads a user profile; a user can only read their own.
pub struct GetUserByIdUseCase {
  users: Arc<dyn UserRepository>,
}

impl GetUserByIdUseCase {
  pub fn new(users: Arc<dyn UserRepository>) -> Self {
    Self { users }
  }
}

#[async_trait]
impl UseCase for GetUserByIdUseCase {
  type Params = GetUserByIdQuery;
  type Output = User;
  type Error = UserError;

  async fn authorize(
    &self,
    params: &GetUserByIdQuery,
    session: &Session,
  ) -> Result<(), UserError> {
    if !session.is_authenticated() {
      return Err(AuthError::Unauthenticated.into());
    }
    if !session.is_user_with_id(&params.user_id.to_string()) {
      return Err(UserError::CanNotAccessUser);
    }
    Ok(())
  }

  async fn handle(&self, params: GetUserByIdQuery) -> Result<User, UserError> {
    self
      .users
      .find_by_id(params.user_id)
      .await?
      .ok_or(UserError::NotFound)
  }
}
