//! This crate contains all shared UI for the sign-up screen: form state, the
//! submission flow, localized text, toasts, and form primitives.

use dioxus::prelude::*;

pub mod components;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
}

pub const COMPONENTS_CSS: Asset = asset!("/assets/components.css");

mod services;
pub use services::{Navigator, Notifier, Severity};

pub mod form;
pub use form::{Field, FieldParseError, FormState};

pub mod i18n;
pub use i18n::{Labels, Locale, Message};

pub mod registration;
pub use registration::{RegistrationForm, SubmitOutcome, LOGIN_PATH, ME_PATH};

mod toaster;
pub use toaster::{use_toaster, Toast, Toaster, ToasterProvider, Toasts, MAX_TOASTS, TOAST_DURATION, TOAST_TICK};
