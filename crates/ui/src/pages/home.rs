//! Product launcher

use dioxus::prelude::*;
use procurex_controller::Route;
use procurex_schema::catalog::PRODUCT;

use crate::components::{EntityForm, NotificationBanner};
use crate::hooks::use_crud;
use crate::state::use_shell;

#[component]
pub fn HomePage() -> Element {
    let shell = use_shell();
    let crud = use_crud(&PRODUCT, None);
    let state = crud.state();
    let notification = state.read().notification().cloned();
    let count = state.read().items().len();
    let email = shell.session().read().email().unwrap_or_default().to_string();

    rsx! {
        div {
            class: "page home-page",

            header {
                class: "page-header",
                h1 { "Launch a Product" }
                if !email.is_empty() {
                    p { class: "page-subtitle", "Signed in as {email}" }
                }
            }

            NotificationBanner {
                notification,
                on_dismiss: move |_| crud.dismiss_notification(),
            }

            EntityForm { crud, title: Some("New Product".to_string()) }

            div {
                class: "home-footer",
                span { "{count} products tracked" }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| shell.navigate(Route::Products),
                    "View all products"
                }
            }
        }
    }
}
