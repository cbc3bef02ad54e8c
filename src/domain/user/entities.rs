use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User profile created during the identity exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
  pub picture: String,
  pub email: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Create a user with a caller-supplied id; the id is allocated together
  /// with the account record that links the external identity.
  pub fn new(
    id: Uuid,
    first_name: String,
    last_name: String,
    picture: String,
    email: Option<String>,
  ) -> Self {
    let now = Utc::now();
    Self {
      id,
      first_name,
      last_name,
      picture,
      email,
      created_at: now,
      updated_at: now,
    }
  }
}
