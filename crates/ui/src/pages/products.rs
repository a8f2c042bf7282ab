//! Product list

use dioxus::prelude::*;
use procurex_controller::Route;
use procurex_core::RecordId;
use procurex_schema::catalog::PRODUCT;

use crate::components::CrudSection;
use crate::hooks::use_crud;
use crate::state::use_shell;

#[component]
pub fn ProductsPage() -> Element {
    let shell = use_shell();
    let crud = use_crud(&PRODUCT, None);

    rsx! {
        div {
            class: "page products-page",

            header {
                class: "page-header",
                h1 { "Products" }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| crud.load(),
                    "Refresh"
                }
            }

            CrudSection {
                crud,
                on_open: move |id: RecordId| shell.navigate(Route::ProductDetail(id)),
            }
        }
    }
}
