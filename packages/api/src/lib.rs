//! # API crate — typed client for the remote users service
//!
//! The sign-up screen talks to a REST backend that it does not own. This crate holds
//! everything needed to talk to it:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL of the backend, read from `API_BASE_URL` |
//! | [`error`] | [`RegisterError`] (conflict / server / network) and [`ConfigError`] |
//! | [`models`] | Wire payloads: [`NewUser`] and the failure [`ErrorBody`] |
//! | [`users`] | The [`UsersApi`] trait and its HTTP implementation [`UsersClient`] |
//!
//! The trait exists so the UI can be exercised against fakes; production code always
//! goes through [`UsersClient`].

pub mod config;
pub mod error;
pub mod models;
pub mod users;

pub use config::ApiConfig;
pub use error::{ConfigError, RegisterError};
pub use models::{ErrorBody, NewUser};
pub use users::{UsersApi, UsersClient};
