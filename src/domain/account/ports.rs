use async_trait::async_trait;

use super::entities::{Account, Provider};
use super::errors::AccountError;

/// Document-store contract for external identity links. One record per
/// `(provider, provider_account_id)` pair.
#[async_trait]
pub trait AccountRepository: Send + Sync {
  /// Inserts an account link; fails with `AlreadyExists` when the unique
  /// `(provider, provider_account_id)` constraint is violated.
  async fn save(&self, account: Account) -> Result<Account, AccountError>;
  async fn find_by_provider_and_provider_account_id(
    &self,
    provider: Provider,
    provider_account_id: &str,
  ) -> Result<Option<Account>, AccountError>;
}
