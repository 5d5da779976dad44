//! # Toast notifications
//!
//! [`ToasterProvider`] owns a [`Signal<Toasts>`] in context and renders the stack above
//! its children. Anything below it can grab a [`Toaster`] with [`use_toaster`] and
//! raise a toast through the [`Notifier`] trait. Each toast disappears on click or
//! after [`TOAST_DURATION`].
//!
//! Expiry is driven by a timer owned by the provider, so toasts still expire after
//! the component that raised them is gone.

use std::time::Duration;

use dioxus::prelude::*;

use crate::services::{Notifier, Severity};

const TOASTER_CSS: Asset = asset!("/assets/toaster.css");

/// How long a toast stays up.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Interval of the provider's expiry timer.
pub const TOAST_TICK: Duration = Duration::from_millis(500);

const TOAST_TICKS: u32 = (TOAST_DURATION.as_millis() / TOAST_TICK.as_millis()) as u32;

/// Toasts kept on screen; the oldest goes first.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    /// Timer ticks until the toast expires.
    pub ticks_left: u32,
}

/// The toasts currently shown, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    /// Add a toast and return its id.
    pub fn push(&mut self, severity: Severity, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            severity,
            message: message.to_string(),
            ticks_left: TOAST_TICKS,
        });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    /// Remove the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    /// Advance every toast by one timer tick and drop the expired ones.
    /// Returns how many were dropped.
    pub fn tick(&mut self) -> usize {
        let before = self.items.len();
        for toast in &mut self.items {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
        }
        self.items.retain(|toast| toast.ticks_left > 0);
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Handle for raising toasts. Cheap to copy into closures and tasks.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    toasts: Signal<Toasts>,
}

impl Notifier for Toaster {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Warn => tracing::warn!("toast: {}", message),
            Severity::Error => tracing::error!("toast: {}", message),
        }

        let mut toasts = self.toasts;
        toasts.write().push(severity, message);
    }
}

/// Get the toaster provided by the nearest [`ToasterProvider`].
pub fn use_toaster() -> Toaster {
    Toaster {
        toasts: use_context::<Signal<Toasts>>(),
    }
}

/// Provides the toaster context and draws the toast stack.
#[component]
pub fn ToasterProvider(children: Element) -> Element {
    let mut toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    use_effect(move || {
        spawn(async move {
            loop {
                sleep(TOAST_TICK).await;
                if !toasts.peek().is_empty() {
                    toasts.write().tick();
                }
            }
        });
    });

    rsx! {
        document::Stylesheet { href: TOASTER_CSS }
        {children}
        ToastStack {}
    }
}

#[component]
fn ToastStack() -> Element {
    let mut toasts = use_context::<Signal<Toasts>>();
    let shown: Vec<Toast> = toasts().iter().cloned().collect();

    rsx! {
        div {
            class: "toaster",
            role: "status",
            for toast in shown {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        Severity::Warn => "toast toast--warn",
                        Severity::Error => "toast toast--error",
                    },
                    onclick: move |_| {
                        toasts.write().dismiss(toast.id);
                    },
                    "{toast.message}"
                }
            }
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
