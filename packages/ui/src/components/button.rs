use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Outline => "button button--outline",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(into, default = "submit".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(into, default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let variant_class = variant.class();

    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: r#type,
            disabled: disabled,
            {children}
        }
    }
}
