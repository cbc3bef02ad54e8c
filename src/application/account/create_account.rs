use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_case::UseCase;
use crate::domain::account::entities::{Account, Provider};
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::AccountRepository;
use crate::domain::auth::session::Session;

#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
  pub user_id: Uuid,
  pub provider: Provider,
  pub provider_account_id: String,
}

/// Links an external identity to a local user id. Runs inside the identity
/// exchange, before a session exists, so the gate admits every caller.
pub struct CreateAccountUseCase {
  accounts: Arc<dyn AccountRepository>,
}

impl CreateAccountUseCase {
  pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
    Self { accounts }
  }
}

#[async_trait]
impl UseCase for CreateAccountUseCase {
  type Params = CreateAccountCommand;
  type Output = Account;
  type Error = AccountError;

  async fn authorize(
    &self,
    _params: &CreateAccountCommand,
    _session: &Session,
  ) -> Result<(), AccountError> {
    Ok(())
  }

  async fn handle(&self, params: CreateAccountCommand) -> Result<Account, AccountError> {
    self
      .accounts
      .save(Account::new(
        params.user_id,
        params.provider,
        params.provider_account_id,
      ))
      .await
  }
}
