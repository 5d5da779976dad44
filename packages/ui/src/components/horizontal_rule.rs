use dioxus::prelude::*;

/// A divider line with optional text in the middle ("or").
#[component]
pub fn HorizontalRule(
    #[props(into, default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "horizontal-rule {class}",
            span { class: "horizontal-rule__text", {children} }
        }
    }
}
