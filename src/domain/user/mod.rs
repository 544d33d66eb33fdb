//! User module - registered accounts.
//!
//! Users are the principals behind session identities: a session is
//! issued for a user's email after registration or login.

mod account;

pub use account::{NewUser, User, UserChanges, UserRecord};
