//! Wire payloads for the users API.

mod user;

pub use user::{ErrorBody, NewUser};
