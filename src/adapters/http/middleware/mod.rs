pub mod authentication;
pub mod authorization;

pub use authentication::{AuthenticationMiddleware, SessionExt, session_cookie};
pub use authorization::{RequireAdmin, RequireAuthentication};
