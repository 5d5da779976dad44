//! # Sign-up form state
//!
//! [`FormState`] is the in-memory record of the four text inputs. It is a plain value:
//! every edit produces a new state through [`FormState::with_field`], which copies the
//! three untouched fields as they were and swaps in the new text for the edited one.
//!
//! [`Field`] names one of the inputs. Its wire name ([`Field::name`]) is the HTML `name`
//! attribute of the matching `<input>`, so events can be routed back to a field with
//! [`Field::from_str`](std::str::FromStr).

use std::fmt;
use std::str::FromStr;

use api::NewUser;
use thiserror::Error;

/// One of the four sign-up inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordRepeat,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::PasswordRepeat,
    ];

    /// The input's `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordRepeat => "passwordRepeat",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field {0:?}")]
pub struct FieldParseError(pub String);

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

/// The values currently typed into the form. All fields start empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_repeat: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordRepeat => &self.password_repeat,
        }
    }

    /// A copy of this state with `field` replaced by `value`.
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            Field::Name => &mut next.name,
            Field::Email => &mut next.email,
            Field::Password => &mut next.password,
            Field::PasswordRepeat => &mut next.password_repeat,
        };
        *slot = value.into();
        next
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.password_repeat
    }

    /// The request body. The repeated password is left behind.
    pub fn to_new_user(&self) -> NewUser {
        NewUser::new(&self.name, &self.email, &self.password)
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_repeat", &"<redacted>")
            .finish()
    }
}
