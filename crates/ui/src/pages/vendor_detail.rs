//! Vendor detail: vendor info, receipts, shipments and payments

use dioxus::prelude::*;
use procurex_controller::Route;
use procurex_core::{Record, RecordId};
use procurex_schema::catalog::{PAYMENT, RECEIPT, SHIPMENT, VENDOR};

use crate::components::CrudSection;
use crate::hooks::use_crud;
use crate::state::use_shell;

#[component]
pub fn VendorDetailPage(id: RecordId) -> Element {
    let receipts = use_crud(&RECEIPT, Some(id.clone()));
    let shipments = use_crud(&SHIPMENT, Some(id.clone()));
    let payments = use_crud(&PAYMENT, Some(id.clone()));

    rsx! {
        div {
            class: "page vendor-detail-page",

            VendorInfo { id: id.clone() }

            CrudSection { crud: receipts }
            CrudSection { crud: shipments }
            CrudSection { crud: payments }
        }
    }
}

/// Read-only vendor card, fetched by id
#[component]
fn VendorInfo(id: RecordId) -> Element {
    let shell = use_shell();
    let fetch_id = id.clone();
    let vendor = use_resource(move || {
        let client = shell.api().resource(&VENDOR);
        let id = fetch_id.clone();
        async move { client.fetch_one(&id).await }
    });

    let body = match &*vendor.read() {
        None => rsx! { p { class: "placeholder", "Loading..." } },
        Some(Err(err)) => {
            let message = err.user_message();
            rsx! { p { class: "notification notification-error", "Error loading vendor: {message}" } }
        }
        Some(Ok(record)) => rsx! { VendorCard { record: record.clone() } },
    };

    rsx! {
        header {
            class: "page-header",
            h1 { "Vendor #{id}" }
        }
        section {
            class: "crud-section vendor-info",
            {body}
        }
    }
}

#[component]
fn VendorCard(record: Record) -> Element {
    let shell = use_shell();
    let product = record.id("product_id");
    let details: Vec<(&'static str, String)> = VENDOR
        .fields
        .iter()
        .map(|field| (field.label, record.text(field.name)))
        .collect();

    rsx! {
        dl {
            class: "detail-list",
            for (label, value) in details {
                div {
                    key: "{label}",
                    class: "detail-row",
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }
        if let Some(product) = product {
            button {
                r#type: "button",
                class: "btn btn-secondary",
                onclick: move |_| shell.navigate(Route::ProductDetail(product.clone())),
                "Back to product"
            }
        }
    }
}
