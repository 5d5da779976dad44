//! # Payloads for `POST /users`
//!
//! ## [`NewUser`]
//!
//! The request body: `name`, `email` and `password`, serialized as a flat JSON object.
//! The sign-up form also collects a repeated password, but it is checked on the client
//! and has no field here, so it can never be sent. `Debug` redacts the password so the
//! payload can appear in logs.
//!
//! ## [`ErrorBody`]
//!
//! The shape of a failure response, `{"error": "..."}`. Only the `error` text is used;
//! any other keys are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account creation request.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
