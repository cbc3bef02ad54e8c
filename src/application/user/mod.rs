pub mod create_user;
pub mod get_user_by_id;

pub use create_user::{CreateUserCommand, CreateUserUseCase};
pub use get_user_by_id::{GetUserByIdQuery, GetUserByIdUseCase};
