//! Authentication handlers.
//!
//! Registration and login issue a session through the `SessionStore`;
//! logout revokes it. Password changes go straight to the repository.

mod change_password;
mod login;
mod logout;
mod register;

pub use change_password::{ChangePasswordCommand, ChangePasswordHandler};
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use logout::{LogoutCommand, LogoutHandler};
pub use register::{RegisterCommand, RegisterHandler, RegisterResult};
