use async_trait::async_trait;
use std::sync::Arc;

use crate::application::use_case::UseCase;
use crate::domain::account::entities::{Account, Provider};
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::AccountRepository;
use crate::domain::auth::session::Session;

#[derive(Debug, Clone)]
pub struct GetAccountByProviderQuery {
  pub provider: Provider,
  pub provider_account_id: String,
}

/// Looks up the identity link for an external account, `None` when the
/// identity has never logged in.
pub struct GetAccountByProviderUseCase {
  accounts: Arc<dyn AccountRepository>,
}

impl GetAccountByProviderUseCase {
  pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
    Self { accounts }
  }
}

#[async_trait]
impl UseCase for GetAccountByProviderUseCase {
  type Params = GetAccountByProviderQuery;
  type Output = Option<Account>;
  type Error = AccountError;

  async fn authorize(
    &self,
    _params: &GetAccountByProviderQuery,
    _session: &Session,
  ) -> Result<(), AccountError> {
    Ok(())
  }

  async fn handle(
    &self,
    params: GetAccountByProviderQuery,
  ) -> Result<Option<Account>, AccountError> {
    self
      .accounts
      .find_by_provider_and_provider_account_id(params.provider, &params.provider_account_id)
      .await
  }
}
