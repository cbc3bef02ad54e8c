use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::AuthError;
use super::value_objects::{
  SessionAuthorizationStatus, SessionDevice, SessionSource, SessionType,
};

/// Plain serializable shape of a session: what goes into a signed token and
/// what [`Session::new`] accepts back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionValue {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(rename = "type")]
  pub session_type: SessionType,
  pub distinct_id: String,
  #[serde(default)]
  pub roles: Vec<String>,
  #[serde(default)]
  pub registered_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub source: Option<SessionSource>,
  #[serde(default)]
  pub device: Option<SessionDevice>,
  #[serde(default)]
  pub authorization_status: Option<SessionAuthorizationStatus>,
}

/// Per-request identity and authorization context.
///
/// Constructed fresh for every request (or explicitly for login flows and
/// event replay) and discarded at the end of it; never persisted. The only
/// mutation is the forward-only authorization status.
#[derive(Debug, Clone)]
pub struct Session {
  id: String,
  session_type: SessionType,
  distinct_id: String,
  roles: Vec<String>,
  registered_at: Option<DateTime<Utc>>,
  source: Option<SessionSource>,
  device: Option<SessionDevice>,
  authorization_status: SessionAuthorizationStatus,
}

impl Session {
  /// Builds a session from its serializable shape, generating an id when
  /// absent and defaulting the authorization status to unauthorized.
  ///
  /// # Errors
  ///
  /// `AuthError::InvalidSession` when a user-class session (authenticated or
  /// admin) carries an empty distinct id.
  pub fn new(value: SessionValue) -> Result<Self, AuthError> {
    let session = Self {
      id: value.id.unwrap_or_else(generate_session_id),
      session_type: value.session_type,
      distinct_id: value.distinct_id,
      roles: value.roles,
      registered_at: value.registered_at,
      source: value.source,
      device: value.device,
      authorization_status: value
        .authorization_status
        .unwrap_or(SessionAuthorizationStatus::Unauthorized),
    };
    if session.session_type.is_user() && session.distinct_id.is_empty() {
      return Err(AuthError::InvalidSession);
    }
    Ok(session)
  }

  // Named constructors
  // ------------------

  /// Anonymous session for a request without a valid token.
  pub fn unauthenticated(
    id: Option<String>,
    device: Option<SessionDevice>,
    source: Option<SessionSource>,
  ) -> Self {
    Self {
      id: id.unwrap_or_else(generate_session_id),
      session_type: SessionType::Unauthenticated,
      distinct_id: String::new(),
      roles: Vec::new(),
      registered_at: None,
      source,
      device,
      authorization_status: SessionAuthorizationStatus::Unauthorized,
    }
  }

  /// First-class logged-in user session.
  ///
  /// # Errors
  ///
  /// `AuthError::InvalidSession` when `distinct_id` is empty.
  pub fn user(
    distinct_id: impl Into<String>,
    device: Option<SessionDevice>,
    source: Option<SessionSource>,
  ) -> Result<Self, AuthError> {
    let distinct_id = distinct_id.into();
    Self::new(SessionValue {
      id: None,
      session_type: SessionType::Authenticated,
      roles: vec![format!("user-{distinct_id}")],
      distinct_id,
      registered_at: None,
      source,
      device: Some(device.unwrap_or_else(SessionDevice::undetectable)),
      authorization_status: None,
    })
  }

  /// Rebuilds a session for asynchronous event processing: identity and
  /// device carry over, the source is fixed to `event` and transport-only
  /// state (roles, client session id) is dropped.
  pub fn from_event(session: &Session) -> Self {
    Self {
      id: generate_session_id(),
      session_type: session.session_type,
      distinct_id: session.distinct_id.clone(),
      roles: Vec::new(),
      registered_at: session.registered_at,
      source: Some(SessionSource::Event),
      device: session.device.clone(),
      authorization_status: SessionAuthorizationStatus::Unauthorized,
    }
  }

  // Read accessors
  // --------------

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn session_type(&self) -> SessionType {
    self.session_type
  }

  pub fn is_authenticated(&self) -> bool {
    self.session_type.is_authenticated()
  }

  pub fn distinct_id(&self) -> &str {
    &self.distinct_id
  }

  pub fn roles(&self) -> &[String] {
    &self.roles
  }

  pub fn is_from_event(&self) -> bool {
    self.source.is_some_and(|source| source.is_event())
  }

  pub fn is_user_with_id(&self, user_id: &str) -> bool {
    self.distinct_id == user_id
  }

  pub fn device(&self) -> Option<&SessionDevice> {
    self.device.as_ref()
  }

  // Authorization status
  // --------------------

  pub fn authorization_status(&self) -> SessionAuthorizationStatus {
    self.authorization_status
  }

  pub fn is_unauthorized(&self) -> bool {
    self.authorization_status.is_unauthorized()
  }

  pub fn is_authorizing(&self) -> bool {
    self.authorization_status.is_authorizing()
  }

  pub fn is_authorized(&self) -> bool {
    self.authorization_status.is_authorized()
  }

  pub fn set_as_authorizing(&mut self) {
    self.authorization_status = SessionAuthorizationStatus::Authorizing;
  }

  pub fn set_as_authorized(&mut self) {
    self.authorization_status = SessionAuthorizationStatus::Authorized;
  }

  /// Serializes the full entity, nested value objects included.
  pub fn to_value(&self) -> SessionValue {
    SessionValue {
      id: Some(self.id.clone()),
      session_type: self.session_type,
      distinct_id: self.distinct_id.clone(),
      roles: self.roles.clone(),
      registered_at: self.registered_at,
      source: self.source,
      device: self.device.clone(),
      authorization_status: Some(self.authorization_status),
    }
  }
}

fn generate_session_id() -> String {
  Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_user_session_requires_distinct_id() {
    for session_type in [SessionType::Authenticated, SessionType::Admin] {
      let result = Session::new(SessionValue {
        id: None,
        session_type,
        distinct_id: String::new(),
        roles: Vec::new(),
        registered_at: None,
        source: None,
        device: None,
        authorization_status: None,
      });
      assert!(matches!(result, Err(AuthError::InvalidSession)));
    }
  }

  #[test]
  fn test_user_session_with_distinct_id_succeeds() {
    for session_type in [
      SessionType::Unauthenticated,
      SessionType::Authenticated,
      SessionType::Admin,
    ] {
      let distinct_id = if session_type.is_user() { "u1" } else { "" };
      let session = Session::new(SessionValue {
        id: None,
        session_type,
        distinct_id: distinct_id.to_string(),
        roles: Vec::new(),
        registered_at: None,
        source: None,
        device: None,
        authorization_status: None,
      })
      .unwrap();
      assert_eq!(session.session_type(), session_type);
    }
  }

  #[test]
  fn test_unauthenticated_session_defaults() {
    let session = Session::unauthenticated(None, None, None);
    assert!(!session.is_authenticated());
    assert_eq!(session.distinct_id(), "");
    assert!(session.roles().is_empty());
    assert!(session.is_unauthorized());
    assert!(!session.id().is_empty());
  }

  #[test]
  fn test_unauthenticated_session_keeps_client_id() {
    let session = Session::unauthenticated(Some("client-1".to_string()), None, None);
    assert_eq!(session.id(), "client-1");
  }

  #[test]
  fn test_user_session() {
    let session = Session::user("u1", None, None).unwrap();
    assert!(session.is_authenticated());
    assert!(session.is_user_with_id("u1"));
    assert!(!session.is_user_with_id("u2"));
    assert_eq!(session.roles(), ["user-u1"]);
  }

  #[test]
  fn test_user_session_empty_id_fails() {
    assert!(matches!(
      Session::user("", None, None),
      Err(AuthError::InvalidSession)
    ));
  }

  #[test]
  fn test_from_event_fixes_source_and_keeps_identity() {
    let device = SessionDevice::browser_user_agent("Mozilla/5.0", None, None);
    let original = Session::user(
      "u1",
      Some(device.clone()),
      Some(SessionSource::HttpRequest),
    )
    .unwrap();

    let replayed = Session::from_event(&original);
    assert!(replayed.is_from_event());
    assert_eq!(replayed.distinct_id(), "u1");
    assert_eq!(replayed.device(), Some(&device));
    assert!(replayed.roles().is_empty());
    assert!(replayed.is_unauthorized());
  }

  #[test]
  fn test_authorization_transitions() {
    let mut session = Session::unauthenticated(None, None, None);
    assert!(session.is_unauthorized());
    assert!(!session.is_authorized());

    session.set_as_authorizing();
    assert!(session.is_authorizing());

    session.set_as_authorized();
    assert!(session.is_authorized());
    assert!(!session.is_unauthorized());
  }

  #[test]
  fn test_explicitly_authorized_construction() {
    let session = Session::new(SessionValue {
      id: None,
      session_type: SessionType::Authenticated,
      distinct_id: "u1".to_string(),
      roles: Vec::new(),
      registered_at: None,
      source: None,
      device: None,
      authorization_status: Some(SessionAuthorizationStatus::Authorized),
    })
    .unwrap();
    assert!(session.is_authorized());
  }

  #[test]
  fn test_to_value_round_trip() {
    let device = SessionDevice::browser_user_agent(
      "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
      Some("1280"),
      None,
    );
    let session = Session::user(
      "u1",
      Some(device),
      Some(SessionSource::HttpRequest),
    )
    .unwrap();

    let rebuilt = Session::new(session.to_value()).unwrap();
    assert_eq!(rebuilt.id(), session.id());
    assert_eq!(rebuilt.is_authenticated(), session.is_authenticated());
    assert_eq!(rebuilt.distinct_id(), session.distinct_id());
    assert_eq!(rebuilt.device(), session.device());
    assert_eq!(
      rebuilt.authorization_status(),
      session.authorization_status()
    );
  }

  #[test]
  fn test_value_serializes_wire_names() {
    let session = Session::user("u1", None, Some(SessionSource::HttpRequest)).unwrap();
    let json = serde_json::to_value(session.to_value()).unwrap();
    assert_eq!(json["type"], "authenticated");
    assert_eq!(json["distinctId"], "u1");
    assert_eq!(json["source"], "httpRequest");
    assert_eq!(json["authorizationStatus"], "unauthorized");
  }
}
