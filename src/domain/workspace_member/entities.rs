use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::errors::WorkspaceMemberError;

/// Role of a user inside a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
  Owner,
  Member,
}

impl MemberRole {
  pub fn parse(value: &str) -> Result<Self, WorkspaceMemberError> {
    match value {
      "owner" => Ok(Self::Owner),
      "member" => Ok(Self::Member),
      other => Err(WorkspaceMemberError::InvalidRole {
        value: other.to_string(),
      }),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Owner => "owner",
      Self::Member => "member",
    }
  }
}

impl fmt::Display for MemberRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Membership record linking a user to a workspace with a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMember {
  pub id: Uuid,
  pub workspace_id: Uuid,
  pub user_id: Uuid,
  pub role: MemberRole,
  pub joined_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl WorkspaceMember {
  pub fn new(workspace_id: Uuid, user_id: Uuid, role: MemberRole) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      workspace_id,
      user_id,
      role,
      joined_at: now,
      updated_at: now,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_member_role_parse() {
    assert_eq!(MemberRole::parse("owner").unwrap(), MemberRole::Owner);
    assert_eq!(MemberRole::parse("member").unwrap(), MemberRole::Member);
    assert!(matches!(
      MemberRole::parse("admin"),
      Err(WorkspaceMemberError::InvalidRole { .. })
    ));
  }

  #[test]
  fn test_new_member() {
    let workspace_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let member = WorkspaceMember::new(workspace_id, user_id, MemberRole::Member);
    assert_eq!(member.workspace_id, workspace_id);
    assert_eq!(member.user_id, user_id);
    assert_eq!(member.joined_at, member.updated_at);
  }
}
