pub mod errors;
pub mod ports;
pub mod services;
pub mod session;
pub mod value_objects;

// Re-export commonly used types
pub use errors::AuthError;
pub use ports::{SessionClaims, TokenClaims, TokenOptions, TokenService};
pub use services::{
  AuthenticationArtifacts, AuthenticationConfig, AuthenticationService, CookieWrite,
  TokenAlgorithm, TokenExpiration,
};
pub use session::{Session, SessionValue};
pub use value_objects::{
  SessionAuthorizationStatus, SessionDevice, SessionSource, SessionType,
};
