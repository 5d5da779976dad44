use dioxus::prelude::*;

use config::AppConfig;
use ui::ToasterProvider;
use views::{Login, Me, Register};

mod config;
mod navigation;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
    #[route("/me")]
    Me {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return;
        }
    };
    tracing::info!(
        api = %config.api.base_url(),
        locale = ?config.locale,
        "starting sign-up app"
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Stylesheet { href: ui::COMPONENTS_CSS }

        ToasterProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/register`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Register {});
    rsx! {}
}
