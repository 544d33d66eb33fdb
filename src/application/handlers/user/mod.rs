//! User management handlers.
//!
//! Plain CRUD over the `UserRepository`. Passwords are hashed on the way in;
//! nothing here ever returns them.

mod create_user;
mod delete_user;
mod get_user;
mod update_user;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use delete_user::{DeleteUserCommand, DeleteUserHandler};
pub use get_user::{GetUserHandler, GetUserQuery, ListUsersHandler};
pub use update_user::{UpdateUserCommand, UpdateUserHandler};
