//! Workspace collaboration backend: accounts, third-party identity linking,
//! workspaces and workspace membership behind cookie/JWT session
//! authentication.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
