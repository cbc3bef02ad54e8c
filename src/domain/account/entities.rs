use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::errors::AccountError;

/// Supported external identity providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
  Google,
  Github,
}

impl Provider {
  pub fn parse(value: &str) -> Result<Self, AccountError> {
    match value {
      "google" => Ok(Self::Google),
      "github" => Ok(Self::Github),
      other => Err(AccountError::InvalidProvider {
        value: other.to_string(),
      }),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Google => "google",
      Self::Github => "github",
    }
  }
}

impl fmt::Display for Provider {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Link between an external identity and a local user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
  pub id: Uuid,
  pub user_id: Uuid,
  pub provider: Provider,
  pub provider_account_id: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Account {
  pub fn new(user_id: Uuid, provider: Provider, provider_account_id: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      user_id,
      provider,
      provider_account_id,
      created_at: now,
      updated_at: now,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_provider_parse() {
    assert_eq!(Provider::parse("google").unwrap(), Provider::Google);
    assert_eq!(Provider::parse("github").unwrap(), Provider::Github);
    assert!(matches!(
      Provider::parse("gitlab"),
      Err(AccountError::InvalidProvider { .. })
    ));
  }
}
