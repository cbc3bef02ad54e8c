use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::UseCase;
use crate::domain::auth::session::Session;
use crate::domain::user::entities::User;
use crate::domain::user::errors::UserError;
use crate::domain::user::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
  pub user_id: Uuid,
  pub email: Option<String>,
  pub first_name: String,
  pub last_name: String,
  pub picture: String,
}

/// Stores a user profile. Runs inside the identity exchange, before a
/// session exists, so the gate admits every caller.
pub struct CreateUserUseCase {
  users: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
  pub fn new(users: Arc<dyn UserRepository>) -> Self {
    Self { users }
  }
}

#[async_trait]
impl UseCase for CreateUserUseCase {
  type Params = CreateUserCommand;
  type Output = User;
  type Error = UserError;

  async fn authorize(
    &self,
    _params: &CreateUserCommand,
    _session: &Session,
  ) -> Result<(), UserError> {
    Ok(())
  }

  async fn handle(&self, params: CreateUserCommand) -> Result<User, UserError> {
    self
      .users
      .save(User::new(
        params.user_id,
        params.first_name,
        params.last_name,
        params.picture,
        params.email,
      ))
      .await
  }
}
