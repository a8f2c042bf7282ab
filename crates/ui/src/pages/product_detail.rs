//! Product detail: product info, vendors and allotments

use dioxus::prelude::*;
use procurex_controller::Route;
use procurex_core::RecordId;
use procurex_schema::catalog::{
    CONTENT_ALLOTMENT, LISTING_ALLOTMENT, PHOTOSHOOT_ALLOTMENT, PRODUCT, VENDOR,
};

use crate::components::{CrudSection, EntityForm, NotificationBanner};
use crate::hooks::{UseCrud, use_crud};
use crate::state::use_shell;

#[component]
pub fn ProductDetailPage(id: RecordId) -> Element {
    let shell = use_shell();
    let products = use_crud(&PRODUCT, None);
    let vendors = use_crud(&VENDOR, Some(id.clone()));
    let photoshoots = use_crud(&PHOTOSHOOT_ALLOTMENT, Some(id.clone()));
    let listings = use_crud(&LISTING_ALLOTMENT, Some(id.clone()));
    let content = use_crud(&CONTENT_ALLOTMENT, Some(id.clone()));

    let notes_id = id.clone();
    let growth_id = id.clone();

    rsx! {
        div {
            class: "page product-detail-page",

            header {
                class: "page-header",
                h1 { "Product #{id}" }
                nav {
                    class: "page-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| shell.navigate(Route::Products),
                        "All products"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| shell.navigate(Route::ProductNotes(notes_id.clone())),
                        "Notes"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| shell.navigate(Route::ProductGrowth(growth_id.clone())),
                        "Growth"
                    }
                }
            }

            ProductInfo { crud: products, id: id.clone() }

            CrudSection {
                crud: vendors,
                on_open: move |vendor: RecordId| shell.navigate(Route::VendorDetail(vendor)),
            }

            FinalizedVendors { crud: vendors }

            div {
                class: "allotments",
                CrudSection { crud: photoshoots }
                CrudSection { crud: listings }
                CrudSection { crud: content }
            }
        }
    }
}

/// Edit form for the product itself
#[component]
fn ProductInfo(crud: UseCrud, id: RecordId) -> Element {
    let state = crud.state();
    let effect_id = id.clone();

    // Keep the form bound to this product, including after each update
    use_effect(move || {
        let current = state.read();
        if current.is_editing() {
            return;
        }
        let Some(record) = current.item(&effect_id).cloned() else {
            return;
        };
        drop(current);
        crud.edit(&record);
    });

    let current = state.read();
    let found = current.item(&id).is_some();
    let loading = current.is_loading();
    let notification = current.notification().cloned();
    drop(current);

    rsx! {
        section {
            class: "crud-section product-info",

            NotificationBanner {
                notification,
                on_dismiss: move |_| crud.dismiss_notification(),
            }

            if found {
                EntityForm {
                    crud,
                    title: Some("Product Information".to_string()),
                    always_editing: true,
                }
            } else if loading {
                p { class: "placeholder", "Loading..." }
            } else {
                p { class: "placeholder", "Product not found" }
            }
        }
    }
}

/// Vendors currently marked as finalized
#[component]
fn FinalizedVendors(crud: UseCrud) -> Element {
    let state = crud.state();
    let names: Vec<(String, String)> = state
        .read()
        .finalized_view()
        .into_iter()
        .map(|record| (record.text("name"), record.text("company")))
        .collect();

    rsx! {
        section {
            class: "crud-section finalized-vendors",

            h2 { class: "section-title", "Finalized Vendors" }

            if names.is_empty() {
                p { class: "placeholder", "No vendors finalized yet" }
            } else {
                ul {
                    class: "finalized-list",
                    for (index, (name, company)) in names.into_iter().enumerate() {
                        li {
                            key: "{index}",
                            span { class: "finalized-name", "{name}" }
                            if !company.is_empty() {
                                span { class: "finalized-company", " ({company})" }
                            }
                        }
                    }
                }
            }
        }
    }
}
