//! Sign up page

use dioxus::prelude::*;
use procurex_client::SignUpRequest;
use procurex_controller::Route;

use crate::components::{NotificationBanner, TextInput};
use crate::state::use_shell;

#[component]
pub fn SignUpPage() -> Element {
    let shell = use_shell();
    let mut form = use_signal(SignUpRequest::default);

    let session = shell.session();
    let notification = session.read().notification().cloned();
    let busy = session.read().is_busy();
    let current = form();

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h1 { class: "auth-title", "Create an account" }

                NotificationBanner { notification }

                TextInput {
                    value: current.email.clone(),
                    label: Some("Email".to_string()),
                    input_type: "email".to_string(),
                    required: true,
                    disabled: busy,
                    on_change: move |value| form.write().email = value,
                }

                TextInput {
                    value: current.password.clone(),
                    label: Some("Password".to_string()),
                    input_type: "password".to_string(),
                    required: true,
                    disabled: busy,
                    on_change: move |value| form.write().password = value,
                }

                TextInput {
                    value: current.confirm_password.clone(),
                    label: Some("Confirm Password".to_string()),
                    input_type: "password".to_string(),
                    required: true,
                    disabled: busy,
                    on_change: move |value| form.write().confirm_password = value,
                    on_enter: move |_| shell.sign_up(form()),
                }

                button {
                    r#type: "button",
                    class: "btn btn-primary btn-block",
                    disabled: busy,
                    onclick: move |_| shell.sign_up(form()),
                    if busy { "Creating account..." } else { "Sign Up" }
                }

                p {
                    class: "auth-switch",
                    "Already registered? "
                    button {
                        r#type: "button",
                        class: "btn btn-link",
                        onclick: move |_| shell.navigate(Route::SignIn),
                        "Sign in"
                    }
                }
            }
        }
    }
}
