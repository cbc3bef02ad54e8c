pub mod create_account;
pub mod get_account_by_provider;

pub use create_account::{CreateAccountCommand, CreateAccountUseCase};
pub use get_account_by_provider::{GetAccountByProviderQuery, GetAccountByProviderUseCase};
