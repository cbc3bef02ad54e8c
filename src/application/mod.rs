//! Application layer
//!
//! Use cases orchestrating domain logic, each implementing the
//! authorize-then-handle contract in [`use_case::UseCase`].

pub mod account;
pub mod use_case;
pub mod user;
pub mod workspace;
pub mod workspace_member;

pub use use_case::UseCase;
