//! Registration page view with name/email/password form.

use api::UsersClient;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, HorizontalRule, Input, Label};
use ui::icons::FaGoogle;
use ui::{use_toaster, Field, FormState, Icon, Labels, RegistrationForm};

use crate::config::AppConfig;
use crate::navigation::LocationNavigator;
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let config = use_context::<AppConfig>();
    let toaster = use_toaster();
    let navigator = LocationNavigator::new(use_navigator());
    let labels = Labels::for_locale(config.locale);

    let registration = use_hook(|| {
        RegistrationForm::new(UsersClient::new(config.api.clone()), toaster, navigator)
            .with_locale(config.locale)
    });
    let mut form = use_signal(FormState::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let registration = registration.clone();
        submitting.set(true);
        spawn(async move {
            let outcome = registration.submit(&form()).await;
            tracing::debug!(?outcome, "sign-up attempt finished");
            if outcome.ends_submission() {
                submitting.set(false);
            }
        });
    };

    let mut update = move |field: Field, evt: FormEvent| {
        let next = form.peek().with_field(field, evt.value());
        form.set(next);
    };

    rsx! {
        div {
            class: "register",

            div {
                class: "register__panel",

                h1 { class: "register__heading", "{labels.heading}" }

                // Not wired to an identity provider.
                Button {
                    variant: ButtonVariant::Outline,
                    r#type: "button",
                    Icon { icon: FaGoogle, width: 16, height: 16 }
                    "{labels.google}"
                }

                HorizontalRule { "{labels.or}" }

                form {
                    class: "register__form",
                    onsubmit: handle_submit,

                    Label { html_for: Field::Name.name(), "{labels.name}" }
                    Input {
                        id: Field::Name.name(),
                        name: Field::Name.name(),
                        r#type: "text",
                        placeholder: labels.name_placeholder,
                        value: form.read().name.clone(),
                        oninput: move |evt| update(Field::Name, evt),
                    }

                    Label { html_for: Field::Email.name(), "{labels.email}" }
                    Input {
                        id: Field::Email.name(),
                        name: Field::Email.name(),
                        r#type: "email",
                        placeholder: "example@email.com",
                        value: form.read().email.clone(),
                        oninput: move |evt| update(Field::Email, evt),
                    }

                    Label { html_for: Field::Password.name(), "{labels.password}" }
                    Input {
                        id: Field::Password.name(),
                        name: Field::Password.name(),
                        r#type: "password",
                        placeholder: labels.password,
                        value: form.read().password.clone(),
                        oninput: move |evt| update(Field::Password, evt),
                    }

                    Label { html_for: Field::PasswordRepeat.name(), "{labels.password_repeat}" }
                    Input {
                        id: Field::PasswordRepeat.name(),
                        name: Field::PasswordRepeat.name(),
                        r#type: "password",
                        placeholder: labels.password_repeat,
                        value: form.read().password_repeat.clone(),
                        oninput: move |evt| update(Field::PasswordRepeat, evt),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "{labels.submitting}" } else { "{labels.submit}" }
                    }

                    div {
                        class: "register__footer",
                        "{labels.have_account} "
                        Link { to: Route::Login {}, "{labels.log_in}" }
                    }
                }
            }
        }
    }
}
