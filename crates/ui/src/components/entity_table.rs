//! # Entity Table
//!
//! Lists the items of a [`UseCrud`] workflow with per-row Edit and Delete
//! actions, an optional "Open" action and an optional toggle column.
//! Delete asks for confirmation inside the row first.

use dioxus::prelude::*;
use procurex_controller::CrudState;
use procurex_core::{Record, RecordId};
use procurex_schema::EntitySchema;

use crate::components::dialogs::ConfirmDeleteDialog;
use crate::hooks::UseCrud;

// ============================================================================
// Entity Table
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct EntityTableProps {
    pub crud: UseCrud,

    /// Adds an "Open" action per row
    #[props(default)]
    pub on_open: Option<EventHandler<RecordId>>,
}

#[component]
pub fn EntityTable(props: EntityTableProps) -> Element {
    let crud = props.crud;
    let state = crud.state();
    let current = state.read();
    let schema = current.schema();
    let columns = schema.table_columns();
    let toggle = schema.toggle;
    let placeholder = placeholder_text(&current);
    let deleting = current.deleting_id().cloned();
    let rows = build_rows(&current);
    drop(current);

    // data columns + toggle + actions
    let span = columns.len() + usize::from(toggle.is_some()) + 1;

    rsx! {
        table {
            class: "entity-table",

            thead {
                tr {
                    for column in columns.iter() {
                        th { key: "{column.name}", "{column.label}" }
                    }
                    if let Some(toggle) = toggle {
                        th { "{toggle.label}" }
                    }
                    th { class: "actions-column", "Actions" }
                }
            }

            tbody {
                if let Some(text) = placeholder {
                    tr {
                        class: "placeholder-row",
                        td { colspan: "{span}", "{text}" }
                    }
                }

                for row in rows {
                    tr {
                        key: "{row.key}",
                        class: if row.editing { "editing" } else { "" },

                        for (index, cell) in row.cells.iter().enumerate() {
                            td { key: "{index}", "{cell}" }
                        }

                        if toggle.is_some() {
                            td {
                                class: "toggle-cell",
                                if let Some(id) = row.id.clone() {
                                    input {
                                        r#type: "checkbox",
                                        checked: row.toggled,
                                        onchange: move |e| crud.toggle(id.clone(), e.checked()),
                                    }
                                }
                            }
                        }

                        td {
                            class: "actions-cell",
                            RowActions {
                                crud,
                                schema,
                                row: row.clone(),
                                deleting: row.id.is_some() && row.id == deleting,
                                on_open: props.on_open,
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Row Actions
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct RowActionsProps {
    crud: UseCrud,
    schema: &'static EntitySchema,
    row: RowView,
    deleting: bool,
    on_open: Option<EventHandler<RecordId>>,
}

#[component]
fn RowActions(props: RowActionsProps) -> Element {
    let crud = props.crud;
    let Some(id) = props.row.id.clone() else {
        return rsx! {};
    };

    if props.row.confirming {
        let name = props.row.cells.first().cloned();
        return rsx! {
            ConfirmDeleteDialog {
                label: props.schema.label.to_string(),
                item_name: name,
                deleting: props.deleting,
                on_confirm: move |_| crud.confirm_delete(),
                on_cancel: move |_| crud.cancel_delete(),
            }
        };
    }

    let record = props.row.record.clone();
    let open_id = id.clone();

    rsx! {
        div {
            class: "row-actions",

            if let Some(on_open) = props.on_open {
                button {
                    r#type: "button",
                    class: "btn btn-link btn-small",
                    onclick: move |_| on_open.call(open_id.clone()),
                    "Open"
                }
            }

            button {
                r#type: "button",
                class: "btn btn-secondary btn-small",
                onclick: move |_| crud.edit(&record),
                "Edit"
            }

            button {
                r#type: "button",
                class: "btn btn-danger btn-small",
                onclick: move |_| crud.request_delete(id.clone()),
                "Delete"
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Everything a row needs, read out of the state in one pass
#[derive(Debug, Clone, PartialEq)]
struct RowView {
    key: String,
    id: Option<RecordId>,
    record: Record,
    cells: Vec<String>,
    toggled: bool,
    editing: bool,
    confirming: bool,
}

fn build_rows(state: &CrudState) -> Vec<RowView> {
    let schema = state.schema();
    let columns = schema.table_columns();

    state
        .items()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let id = schema.record_id(record);
            RowView {
                key: id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| format!("row-{index}")),
                editing: id.is_some() && state.editing_id() == id.as_ref(),
                confirming: id.as_ref().is_some_and(|id| state.is_confirming(id)),
                cells: columns.iter().map(|c| record.text(c.name)).collect(),
                toggled: schema.toggle.is_some_and(|t| record.flag(t.field)),
                record: record.clone(),
                id,
            }
        })
        .collect()
}

/// The single placeholder row, if the table has no items to show
fn placeholder_text(state: &CrudState) -> Option<String> {
    if !state.items().is_empty() {
        return None;
    }
    if state.is_loading() {
        Some("Loading...".to_string())
    } else {
        Some(state.schema().empty_text())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use procurex_controller::Ticket;
    use procurex_schema::catalog::{SHIPMENT, VENDOR};

    fn loaded(state: &mut CrudState, items: Vec<Record>) {
        let request = state.begin_load();
        let ticket: Ticket = request.ticket;
        state.complete_load(ticket, Ok(items)).unwrap();
    }

    #[test]
    fn test_placeholder_while_loading_then_empty() {
        let mut state = CrudState::new(&SHIPMENT, Some(RecordId::Int(2)));
        state.begin_load();
        assert_eq!(placeholder_text(&state), Some("Loading...".to_string()));

        loaded(&mut state, Vec::new());
        assert_eq!(placeholder_text(&state), Some("No shipments found".to_string()));
    }

    #[test]
    fn test_no_placeholder_with_items() {
        let mut state = CrudState::new(&SHIPMENT, Some(RecordId::Int(2)));
        loaded(
            &mut state,
            vec![Record::new().with("shipment_id", 1).with("tracking_id", "TRK-1")],
        );
        assert_eq!(placeholder_text(&state), None);
    }

    #[test]
    fn test_rows_track_edit_and_confirm() {
        let mut state = CrudState::new(&VENDOR, Some(RecordId::Int(7)));
        let acme = Record::new()
            .with("vendor_id", 1)
            .with("name", "Acme")
            .with("finalized", true);
        let globex = Record::new().with("vendor_id", 2).with("name", "Globex");
        loaded(&mut state, vec![acme.clone(), globex]);

        state.begin_edit(&acme).unwrap();
        state.request_delete(RecordId::Int(2));

        let rows = build_rows(&state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[0], "Acme");
        assert!(rows[0].editing && rows[0].toggled && !rows[0].confirming);
        assert!(!rows[1].editing && !rows[1].toggled && rows[1].confirming);
        assert_eq!(rows[1].key, "2");
    }
}
