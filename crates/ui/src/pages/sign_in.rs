//! Sign in page

use dioxus::prelude::*;
use procurex_controller::Route;

use crate::components::{NotificationBanner, TextInput};
use crate::state::use_shell;

#[component]
pub fn SignInPage() -> Element {
    let shell = use_shell();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let session = shell.session();
    let notification = session.read().notification().cloned();
    let busy = session.read().is_busy();

    let submit = move || shell.sign_in(email(), password());

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h1 { class: "auth-title", "Sign in to ProcureX" }

                NotificationBanner { notification }

                TextInput {
                    value: email(),
                    label: Some("Email".to_string()),
                    input_type: "email".to_string(),
                    placeholder: Some("you@company.com".to_string()),
                    required: true,
                    disabled: busy,
                    on_change: move |value| email.set(value),
                }

                TextInput {
                    value: password(),
                    label: Some("Password".to_string()),
                    input_type: "password".to_string(),
                    required: true,
                    disabled: busy,
                    on_change: move |value| password.set(value),
                    on_enter: move |_| submit(),
                }

                button {
                    r#type: "button",
                    class: "btn btn-primary btn-block",
                    disabled: busy,
                    onclick: move |_| submit(),
                    if busy { "Signing in..." } else { "Sign In" }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    button {
                        r#type: "button",
                        class: "btn btn-link",
                        onclick: move |_| shell.navigate(Route::SignUp),
                        "Sign up"
                    }
                }
            }
        }
    }
}
