//! Log-in screen placeholder, the target of the sign-up page's link.

use dioxus::prelude::*;
use ui::Labels;

use crate::config::AppConfig;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let config = use_context::<AppConfig>();
    let labels = Labels::for_locale(config.locale);

    rsx! {
        div {
            class: "register",
            div {
                class: "register__panel",
                h1 { class: "register__heading", "{labels.login_heading}" }
                div {
                    class: "register__footer",
                    "{labels.no_account} "
                    Link { to: Route::Register {}, "{labels.submit}" }
                }
            }
        }
    }
}
