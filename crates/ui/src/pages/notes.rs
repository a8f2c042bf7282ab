//! Product notes

use dioxus::prelude::*;
use procurex_controller::Route;
use procurex_core::RecordId;
use procurex_schema::catalog::NOTE;

use crate::components::CrudSection;
use crate::hooks::use_crud;
use crate::state::use_shell;

#[component]
pub fn NotesPage(id: RecordId) -> Element {
    let shell = use_shell();
    let notes = use_crud(&NOTE, Some(id.clone()));
    let back = id.clone();

    rsx! {
        div {
            class: "page notes-page",

            header {
                class: "page-header",
                h1 { "Notes for product #{id}" }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| shell.navigate(Route::ProductDetail(back.clone())),
                    "Back to product"
                }
            }

            CrudSection { crud: notes }
        }
    }
}
