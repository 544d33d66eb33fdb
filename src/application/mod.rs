//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (register, login, user writes, seeding) are kept apart
//! from query handlers (user lookups, catalog browsing).

pub mod handlers;

pub use handlers::{
    // Auth handlers
    ChangePasswordCommand, ChangePasswordHandler,
    LoginCommand, LoginHandler, LoginResult,
    LogoutCommand, LogoutHandler,
    RegisterCommand, RegisterHandler, RegisterResult,
    // User handlers
    CreateUserCommand, CreateUserHandler,
    DeleteUserCommand, DeleteUserHandler,
    GetUserHandler, GetUserQuery, ListUsersHandler,
    UpdateUserCommand, UpdateUserHandler,
    // Catalog handlers
    GetProductHandler, GetProductQuery,
    ListProductsHandler, ListProductsQuery, ProductFilter,
    SeedOutcome, SeedProductsError, SeedProductsHandler,
};
