use dioxus::prelude::*;

/// Controlled text input.
#[component]
pub fn Input(
    #[props(into)] id: String,
    #[props(into)] name: String,
    #[props(into, default = "text".to_string())] r#type: String,
    #[props(into, default = "".to_string())] placeholder: String,
    #[props(into, default = "".to_string())] class: String,
    #[props(into)] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            id: "{id}",
            name: "{name}",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
