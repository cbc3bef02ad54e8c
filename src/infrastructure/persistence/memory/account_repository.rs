use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::account::entities::{Account, Provider};
use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::AccountRepository;

/// In-memory document store for identity links. The `(provider,
/// provider_account_id)` key doubles as the unique constraint.
#[derive(Default)]
pub struct InMemoryAccountRepository {
  documents: RwLock<HashMap<(Provider, String), Account>>,
}

impl InMemoryAccountRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
  async fn save(&self, account: Account) -> Result<Account, AccountError> {
    let mut documents = self.documents.write().await;
    let key = (account.provider, account.provider_account_id.clone());
    if documents.contains_key(&key) {
      return Err(AccountError::AlreadyExists);
    }
    documents.insert(key, account.clone());
    Ok(account)
  }

  async fn find_by_provider_and_provider_account_id(
    &self,
    provider: Provider,
    provider_account_id: &str,
  ) -> Result<Option<Account>, AccountError> {
    Ok(
      self
        .documents
        .read()
        .await
        .get(&(provider, provider_account_id.to_string()))
        .cloned(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use uuid::Uuid;

  #[tokio::test]
  async fn test_save_and_find() {
    let repository = InMemoryAccountRepository::new();
    let account = repository
      .save(Account::new(
        Uuid::new_v4(),
        Provider::Github,
        "4217".to_string(),
      ))
      .await
      .unwrap();

    let found = repository
      .find_by_provider_and_provider_account_id(Provider::Github, "4217")
      .await
      .unwrap()
      .unwrap();
    assert_eq!(found.user_id, account.user_id);

    let absent = repository
      .find_by_provider_and_provider_account_id(Provider::Google, "4217")
      .await
      .unwrap();
    assert!(absent.is_none());
  }

  #[tokio::test]
  async fn test_duplicate_link_is_rejected() {
    let repository = InMemoryAccountRepository::new();
    repository
      .save(Account::new(Uuid::new_v4(), Provider::Github, "4217".to_string()))
      .await
      .unwrap();
    let duplicate = repository
      .save(Account::new(Uuid::new_v4(), Provider::Github, "4217".to_string()))
      .await;
    assert!(matches!(duplicate, Err(AccountError::AlreadyExists)));
  }
}
