//! Storefront - game catalog backend with bearer-session authentication.
//!
//! Every request passes an authentication gate. Routes under the public
//! prefixes (`/auth`, `/actuator` by default) go straight through; all
//! others need `Authorization: Bearer <token>` with a token issued at
//! registration or login and held in an in-process session store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
