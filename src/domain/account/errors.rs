use thiserror::Error;

use crate::domain::auth::errors::AuthError;

/// Account domain errors.
#[derive(Debug, Error)]
pub enum AccountError {
  #[error("Account already exists")]
  AlreadyExists,

  #[error("{value} - invalid provider")]
  InvalidProvider { value: String },

  #[error(transparent)]
  Auth(#[from] AuthError),

  /// Document store failure; a bug or outage, not a user-facing condition.
  #[error("Storage failure: {0}")]
  Storage(String),
}

impl AccountError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::AlreadyExists => "account-already-exists",
      Self::InvalidProvider { .. } => "invalid-provider",
      Self::Auth(error) => error.code(),
      Self::Storage(_) => "account-storage-failure",
    }
  }
}
