//! [`ui::Navigator`] backed by the app router.

use dioxus::router::Navigator as RouterNavigator;

use crate::Route;

/// Pushes in-app routes through the router. On the web, paths the router does not know
/// fall back to a full document navigation.
#[derive(Clone, Copy)]
pub struct LocationNavigator {
    router: RouterNavigator,
}

impl LocationNavigator {
    pub fn new(router: RouterNavigator) -> Self {
        Self { router }
    }
}

impl ui::Navigator for LocationNavigator {
    fn go_to(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                self.router.push(route);
            }
            Err(_) => navigate_document(path),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn navigate_document(path: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!("No window to navigate to {}", path);
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        tracing::error!("Failed to navigate to {}: {:?}", path, e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn navigate_document(path: &str) {
    tracing::warn!("{} is not served by this app", path);
}
