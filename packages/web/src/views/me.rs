//! Landing screen after a successful sign-up.

use dioxus::prelude::*;
use ui::Labels;

use crate::config::AppConfig;

#[component]
pub fn Me() -> Element {
    let config = use_context::<AppConfig>();
    let labels = Labels::for_locale(config.locale);

    rsx! {
        div {
            class: "register",
            div {
                class: "register__panel",
                h1 { class: "register__heading", "{labels.me_heading}" }
                p { class: "register__footer", "{labels.me_welcome}" }
            }
        }
    }
}
