use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workspace aggregate: a named space and the ids of the users in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
  pub id: Uuid,
  pub name: String,
  pub user_ids: Vec<Uuid>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Workspace {
  /// Create a new workspace with `owner_id` as its first user.
  pub fn new(name: String, owner_id: Uuid) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      user_ids: vec![owner_id],
      created_at: now,
      updated_at: now,
    }
  }

  pub fn has_user(&self, user_id: Uuid) -> bool {
    self.user_ids.contains(&user_id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_workspace_contains_owner() {
    let owner = Uuid::new_v4();
    let workspace = Workspace::new("Design".to_string(), owner);
    assert!(workspace.has_user(owner));
    assert!(!workspace.has_user(Uuid::new_v4()));
    assert_eq!(workspace.user_ids.len(), 1);
  }
}
