use thiserror::Error;

/// Authentication and session errors.
///
/// Every variant is an operational error with a stable machine code and an
/// HTTP-style status; the transport boundary maps them to wire responses.
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("{value} - invalid session type")]
  InvalidSessionType { value: String },

  #[error("{value} - invalid session source")]
  InvalidSessionSource { value: String },

  #[error("{value} - invalid session authorization status")]
  InvalidSessionAuthorizationStatus { value: String },

  /// A user-class session was constructed without a distinct id.
  #[error("Invalid session")]
  InvalidSession,

  #[error("Unauthenticated")]
  Unauthenticated,

  #[error("Not admin")]
  NotAdmin,

  /// Signing failed (bad key, algorithm mismatch). Indicates a deployment
  /// or programming problem rather than a user-facing condition.
  #[error("Token signing failed: {0}")]
  TokenSigning(String),

  /// Verification failed: bad signature, wrong algorithm, malformed or
  /// expired token. Callers treat this as "no valid session", never fatal.
  #[error("Token verification failed: {0}")]
  TokenVerification(String),
}

impl AuthError {
  /// Stable machine code for clients and logs.
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidSessionType { .. } => "invalid-session-type",
      Self::InvalidSessionSource { .. } => "invalid-session-source",
      Self::InvalidSessionAuthorizationStatus { .. } => {
        "invalid-session-authorization-status"
      }
      Self::InvalidSession => "invalid-session",
      Self::Unauthenticated => "unauthenticated",
      Self::NotAdmin => "not-admin",
      Self::TokenSigning(_) => "token-signing-failed",
      Self::TokenVerification(_) => "token-verification-failed",
    }
  }

  /// HTTP-style status used by the transport boundary.
  pub fn status_code(&self) -> u16 {
    match self {
      Self::InvalidSessionType { .. }
      | Self::InvalidSessionSource { .. }
      | Self::InvalidSessionAuthorizationStatus { .. }
      | Self::InvalidSession => 400,
      Self::Unauthenticated | Self::NotAdmin => 403,
      Self::TokenVerification(_) => 401,
      Self::TokenSigning(_) => 500,
    }
  }
}
