use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::AuthError;

// ============================================================================
// SessionType
// ============================================================================

/// Coarse-grained identity class of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
  Unauthenticated,
  Authenticated,
  Admin,
}

impl SessionType {
  /// Parses a wire value, rejecting anything outside the fixed enumeration.
  pub fn parse(value: &str) -> Result<Self, AuthError> {
    match value {
      "unauthenticated" => Ok(Self::Unauthenticated),
      "authenticated" => Ok(Self::Authenticated),
      "admin" => Ok(Self::Admin),
      other => Err(AuthError::InvalidSessionType {
        value: other.to_string(),
      }),
    }
  }

  pub fn is_unauthenticated(&self) -> bool {
    matches!(self, Self::Unauthenticated)
  }

  pub fn is_authenticated(&self) -> bool {
    matches!(self, Self::Authenticated)
  }

  pub fn is_admin(&self) -> bool {
    matches!(self, Self::Admin)
  }

  /// A user-class session: authenticated or admin.
  pub fn is_user(&self) -> bool {
    self.is_authenticated() || self.is_admin()
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Unauthenticated => "unauthenticated",
      Self::Authenticated => "authenticated",
      Self::Admin => "admin",
    }
  }
}

impl fmt::Display for SessionType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ============================================================================
// SessionSource
// ============================================================================

/// Where a session was created, distinguishing synthetic sessions built for
/// internal event processing from real request sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionSource {
  #[serde(rename = "httpRequest")]
  HttpRequest,
  #[serde(rename = "commandOrQuery")]
  CommandOrQuery,
  #[serde(rename = "event")]
  Event,
}

impl SessionSource {
  pub fn parse(value: &str) -> Result<Self, AuthError> {
    match value {
      "httpRequest" => Ok(Self::HttpRequest),
      "commandOrQuery" => Ok(Self::CommandOrQuery),
      "event" => Ok(Self::Event),
      other => Err(AuthError::InvalidSessionSource {
        value: other.to_string(),
      }),
    }
  }

  pub fn is_http_request(&self) -> bool {
    matches!(self, Self::HttpRequest)
  }

  pub fn is_command_or_query(&self) -> bool {
    matches!(self, Self::CommandOrQuery)
  }

  pub fn is_event(&self) -> bool {
    matches!(self, Self::Event)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::HttpRequest => "httpRequest",
      Self::CommandOrQuery => "commandOrQuery",
      Self::Event => "event",
    }
  }
}

impl fmt::Display for SessionSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ============================================================================
// SessionAuthorizationStatus
// ============================================================================

/// Progress of the per-request authorization check, independent of
/// authentication. Transitions only move forward; a failed check is signaled
/// by an error, not a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionAuthorizationStatus {
  Unauthorized,
  Authorizing,
  Authorized,
}

impl SessionAuthorizationStatus {
  pub fn parse(value: &str) -> Result<Self, AuthError> {
    match value {
      "unauthorized" => Ok(Self::Unauthorized),
      "authorizing" => Ok(Self::Authorizing),
      "authorized" => Ok(Self::Authorized),
      other => Err(AuthError::InvalidSessionAuthorizationStatus {
        value: other.to_string(),
      }),
    }
  }

  pub fn is_unauthorized(&self) -> bool {
    matches!(self, Self::Unauthorized)
  }

  pub fn is_authorizing(&self) -> bool {
    matches!(self, Self::Authorizing)
  }

  pub fn is_authorized(&self) -> bool {
    matches!(self, Self::Authorized)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Unauthorized => "unauthorized",
      Self::Authorizing => "authorizing",
      Self::Authorized => "authorized",
    }
  }
}

impl fmt::Display for SessionAuthorizationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ============================================================================
// SessionDevice
// ============================================================================

const PLATFORM_BROWSER: &str = "browser";

/// Device fingerprint derived from request headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDevice {
  pub user_agent: String,
  pub platform: String,
  pub name: String,
  pub version: String,
  pub os: String,
  pub screen_width: Option<u32>,
  pub screen_height: Option<u32>,
}

impl SessionDevice {
  /// The all-empty device used when a request carries no user agent.
  pub fn undetectable() -> Self {
    Self::default()
  }

  /// Derives browser name, version and OS from a raw user-agent string.
  /// The platform stays `"browser"` even when nothing is recognizable.
  pub fn browser_user_agent(
    user_agent: &str,
    screen_width: Option<&str>,
    screen_height: Option<&str>,
  ) -> Self {
    let (name, version, os) = parse_user_agent(user_agent);
    Self {
      user_agent: user_agent.to_string(),
      platform: PLATFORM_BROWSER.to_string(),
      name,
      version,
      os,
      screen_width: screen_width.and_then(|w| w.trim().parse().ok()),
      screen_height: screen_height.and_then(|h| h.trim().parse().ok()),
    }
  }

  pub fn is_detected(&self) -> bool {
    !self.platform.is_empty()
  }
}

/// Best-effort user-agent parsing. Unrecognized agents yield empty strings.
fn parse_user_agent(user_agent: &str) -> (String, String, String) {
  let os = if user_agent.contains("Windows NT") {
    "Windows"
  } else if user_agent.contains("iPhone") || user_agent.contains("iPad") {
    "iOS"
  } else if user_agent.contains("Android") {
    "Android"
  } else if user_agent.contains("Mac OS X") {
    "Mac OS"
  } else if user_agent.contains("Linux") {
    "Linux"
  } else {
    ""
  };

  // Order matters: Chromium-derived agents also advertise Chrome and Safari.
  let browsers = [
    ("Edg/", "edge"),
    ("OPR/", "opera"),
    ("Firefox/", "firefox"),
    ("Chrome/", "chrome"),
    ("Version/", "safari"),
  ];

  for (marker, name) in browsers {
    if let Some(position) = user_agent.find(marker) {
      if name == "safari" && !user_agent.contains("Safari/") {
        continue;
      }
      let version = user_agent[position + marker.len()..]
        .split([' ', ';', ')'])
        .next()
        .unwrap_or("")
        .to_string();
      return (name.to_string(), version, os.to_string());
    }
  }

  (String::new(), String::new(), os.to_string())
}
