//! Static schemas of every record kind

use heck::ToSnakeCase;
use procurex_core::{ConsoleError, ConsoleResult};

use crate::entity::{EntitySchema, ParentKey, ResourcePaths, ToggleSpec};
use crate::field::{FieldSpec, MONTHS, SelectOptions};

// ============================================================================
// Products
// ============================================================================

pub static PRODUCT: EntitySchema = EntitySchema {
    name: "product",
    label: "Product",
    plural_label: "Products",
    id_field: "id",
    parent: None,
    fields: &[
        FieldSpec::text("name", "Product Name").required(),
        FieldSpec::textarea("description", "Description").required(),
    ],
    columns: &[],
    paths: ResourcePaths {
        list: "/api/products",
        create: "/api/productAdd",
        item: "/api/products/{id}",
        detail: None,
        finalized: None,
    },
    toggle: None,
    singleton: false,
};

pub static NOTE: EntitySchema = EntitySchema {
    name: "note",
    label: "Note",
    plural_label: "Notes",
    id_field: "note_id",
    parent: Some(ParentKey::product()),
    fields: &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::textarea("note", "Note").required(),
    ],
    columns: &[],
    paths: ResourcePaths {
        list: "/api/notes/{parent}",
        create: "/api/notes/add/{parent}",
        item: "/api/notes/{id}",
        detail: None,
        finalized: None,
    },
    toggle: None,
    singleton: false,
};

pub static PRODUCT_STATUS: EntitySchema = EntitySchema {
    name: "product_status",
    label: "Product Status",
    plural_label: "Product Statuses",
    id_field: "status_id",
    parent: Some(ParentKey::product()),
    fields: &[
        FieldSpec::checkbox("is_assigned_for_advertising", "Assigned for Advertising"),
        FieldSpec::checkbox("is_live", "Live"),
    ],
    columns: &[],
    paths: ResourcePaths::nested("/api/product/status/{parent}", "/api/product/status/{parent}"),
    toggle: None,
    singleton: true,
};

pub static MONTHLY_METRIC: EntitySchema = EntitySchema {
    name: "monthly_metric",
    label: "Monthly Metric",
    plural_label: "Monthly Metrics",
    id_field: "metric_id",
    parent: Some(ParentKey::product()),
    fields: &[
        FieldSpec::select("month", "Month", SelectOptions::Fixed(&MONTHS)).required(),
        FieldSpec::select("year", "Year", SelectOptions::RecentYears(9)).required(),
        FieldSpec::number("spent_amount", "Spent Amount").required(),
        FieldSpec::number("revenue_amount", "Revenue Amount").required(),
    ],
    columns: &[],
    paths: ResourcePaths::nested(
        "/api/product/monthly-metrics/{parent}",
        "/api/product/monthly-metrics/{id}",
    ),
    toggle: None,
    singleton: false,
};

// ============================================================================
// Vendors
// ============================================================================

pub static VENDOR: EntitySchema = EntitySchema {
    name: "vendor",
    label: "Vendor",
    plural_label: "Vendors",
    id_field: "vendor_id",
    parent: Some(ParentKey::product()),
    fields: &[
        FieldSpec::text("name", "Vendor Name").required(),
        FieldSpec::email("contact_email", "Contact Email").required(),
        FieldSpec::tel("contact_phone", "Contact Phone").required(),
        FieldSpec::text("company", "Company").required(),
        FieldSpec::textarea("details", "Details").required(),
        FieldSpec::text("attachment", "Attachment")
            .required()
            .with_placeholder("Link to quotation or catalog"),
        FieldSpec::text("rates", "Rates").required(),
        FieldSpec::textarea("notes", "Notes").required(),
        FieldSpec::textarea("comments", "Comments").required(),
        FieldSpec::checkbox("finalized", "Finalized"),
    ],
    columns: &["name", "company", "contact_email", "contact_phone", "rates"],
    paths: ResourcePaths {
        list: "/api/vendors/{parent}",
        create: "/api/vendors/add",
        item: "/api/vendors/{id}",
        detail: Some("/api/vendorDetails/{id}"),
        finalized: Some("/api/vendors/finalized/{parent}"),
    },
    toggle: Some(ToggleSpec {
        field: "finalized",
        label: "Finalized",
        path: "/api/vendors/{id}/finalize",
    }),
    singleton: false,
};

pub static RECEIPT: EntitySchema = EntitySchema {
    name: "receipt",
    label: "Receipt",
    plural_label: "Receipts",
    id_field: "receipt_id",
    parent: Some(ParentKey::vendor()),
    fields: &[
        FieldSpec::date("receipt_date", "Receipt Date").required(),
        FieldSpec::number("quantity_received", "Quantity Received").required(),
        FieldSpec::textarea("comments", "Comments"),
    ],
    columns: &[],
    paths: ResourcePaths {
        list: "/api/receipts/{parent}",
        create: "/api/receipts/add",
        item: "/api/receipts/{id}",
        detail: None,
        finalized: None,
    },
    toggle: None,
    singleton: false,
};

pub static SHIPMENT: EntitySchema = EntitySchema {
    name: "shipment",
    label: "Shipment",
    plural_label: "Shipments",
    id_field: "shipment_id",
    parent: Some(ParentKey::vendor()),
    fields: &[
        FieldSpec::text("tracking_id", "Tracking ID").required(),
        FieldSpec::checkbox("dispatch", "Dispatched"),
        FieldSpec::text("tracker", "Tracker").with_placeholder("Carrier or tracking URL"),
        FieldSpec::textarea("comments", "Comments"),
    ],
    columns: &[],
    paths: ResourcePaths {
        list: "/api/shipments/{parent}",
        create: "/api/shipments/add",
        item: "/api/shipments/{id}",
        detail: None,
        finalized: None,
    },
    toggle: None,
    singleton: false,
};

pub static PAYMENT: EntitySchema = EntitySchema {
    name: "payment",
    label: "Payment",
    plural_label: "Payments",
    id_field: "payment_id",
    parent: Some(ParentKey::vendor()),
    fields: &[
        FieldSpec::checkbox("mail_sent", "Mail Sent"),
        FieldSpec::checkbox("approval", "Approved"),
        FieldSpec::checkbox("upload_success", "Upload Successful"),
        FieldSpec::date("payment_date", "Payment Date").required(),
        FieldSpec::text("transaction_number", "Transaction Number").required(),
        FieldSpec::textarea("comments", "Comments"),
    ],
    columns: &[],
    paths: ResourcePaths {
        list: "/api/payments/{parent}",
        create: "/api/payments/add",
        item: "/api/payments/{id}",
        detail: None,
        finalized: None,
    },
    toggle: None,
    singleton: false,
};

// ============================================================================
// Allotments
// ============================================================================

const ALLOTMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::date("allotted_date", "Allotted Date").required(),
    FieldSpec::date("timeline_deadline", "Timeline Deadline").required(),
    FieldSpec::date("submission_date", "Submission Date"),
    FieldSpec::textarea("comments", "Comments"),
];

/// The three allotment kinds share one shape and differ only in path segment
macro_rules! allotment_schema {
    ($name:literal, $kind:literal, $label:literal, $plural:literal) => {
        EntitySchema {
            name: $name,
            label: $label,
            plural_label: $plural,
            id_field: "allotment_id",
            parent: Some(ParentKey::product()),
            fields: ALLOTMENT_FIELDS,
            columns: &[],
            paths: ResourcePaths {
                list: concat!("/api/allotment/", $kind, "/{parent}"),
                create: concat!("/api/allotment/", $kind),
                item: concat!("/api/allotment/", $kind, "/{id}"),
                detail: None,
                finalized: None,
            },
            toggle: None,
            singleton: false,
        }
    };
}

pub static PHOTOSHOOT_ALLOTMENT: EntitySchema = allotment_schema!(
    "photoshoot_allotment",
    "photoshoot",
    "Photoshoot Allotment",
    "Photoshoot Allotments"
);

pub static LISTING_ALLOTMENT: EntitySchema = allotment_schema!(
    "listing_allotment",
    "listing",
    "Listing Allotment",
    "Listing Allotments"
);

pub static CONTENT_ALLOTMENT: EntitySchema = allotment_schema!(
    "content_allotment",
    "content",
    "Content Allotment",
    "Content Allotments"
);

// ============================================================================
// Lookup
// ============================================================================

static CATALOG: [&EntitySchema; 11] = [
    &PRODUCT,
    &VENDOR,
    &PHOTOSHOOT_ALLOTMENT,
    &LISTING_ALLOTMENT,
    &CONTENT_ALLOTMENT,
    &NOTE,
    &PRODUCT_STATUS,
    &MONTHLY_METRIC,
    &RECEIPT,
    &SHIPMENT,
    &PAYMENT,
];

/// Every schema, products first
pub fn catalog() -> &'static [&'static EntitySchema] {
    &CATALOG
}

/// Find a schema by name
///
/// Accepts any casing (`Vendor`, `photoshoot-allotment`) and plural labels
/// (`vendors`, `monthly metrics`).
pub fn find(name: &str) -> ConsoleResult<&'static EntitySchema> {
    let key = name.trim().to_snake_case();
    CATALOG
        .iter()
        .copied()
        .find(|schema| schema.name == key || schema.plural_label.to_snake_case() == key)
        .ok_or_else(|| ConsoleError::UnknownEntity(name.to_string()))
}
