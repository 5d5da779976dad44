//! Capabilities the sign-up screen needs from its host.
//!
//! The screen never talks to a toast renderer or a router directly. It is handed a
//! [`Notifier`] and a [`Navigator`] when it is built, so tests can pass recorders and
//! the web app can pass the toaster and the browser location.

use std::fmt;

/// How loudly a notification should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Surfaces a transient, severity-tagged message to the user.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);
}

/// Changes the active screen.
pub trait Navigator {
    fn go_to(&self, path: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, severity: Severity, message: &str) {
        (**self).notify(severity, message)
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn go_to(&self, path: &str) {
        (**self).go_to(path)
    }
}
