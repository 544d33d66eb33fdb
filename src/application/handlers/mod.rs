//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod auth;
pub mod catalog;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{
    ChangePasswordCommand, ChangePasswordHandler, LoginCommand, LoginHandler, LoginResult,
    LogoutCommand, LogoutHandler, RegisterCommand, RegisterHandler, RegisterResult,
};
pub use catalog::{
    GetProductHandler, GetProductQuery, ListProductsHandler, ListProductsQuery, ProductFilter,
    SeedOutcome, SeedProductsError, SeedProductsHandler,
};
pub use user::{
    CreateUserCommand, CreateUserHandler, DeleteUserCommand, DeleteUserHandler, GetUserHandler,
    GetUserQuery, ListUsersHandler, UpdateUserCommand, UpdateUserHandler,
};
