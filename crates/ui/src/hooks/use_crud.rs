//! # CRUD Hook
//!
//! Binds a [`CrudState`] to the [`ResourceClient`] of its schema.

use dioxus::prelude::*;
use procurex_client::{ResourceApi, ResourceClient};
use procurex_controller::{CrudState, SubmitAction, SubmitOutcome};
use procurex_core::{Record, RecordId};
use procurex_schema::EntitySchema;
use serde_json::Value;

use super::settle;
use crate::state::use_shell;

/// Copyable handle to one list/form/delete workflow
#[derive(Clone, Copy, PartialEq)]
pub struct UseCrud {
    state: Signal<CrudState>,
    client: Signal<ResourceClient>,
}

/// Create the workflow for `schema` under `parent` and load it once
///
/// Mount the owning component with a key derived from `parent` so that a
/// new parent starts from a fresh state.
pub fn use_crud(schema: &'static EntitySchema, parent: Option<RecordId>) -> UseCrud {
    let shell = use_shell();
    let state = use_signal(|| CrudState::new(schema, parent));
    let client = use_signal(|| shell.api().resource(schema));
    let crud = UseCrud { state, client };

    use_hook(|| crud.load());

    crud
}

impl UseCrud {
    pub fn state(&self) -> Signal<CrudState> {
        self.state
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.state.read().schema()
    }

    pub fn client(&self) -> ResourceClient {
        self.client.cloned()
    }

    pub fn load(&self) {
        let mut state = self.state;
        let client = self.client();
        let request = state.write().begin_load();

        spawn(async move {
            let result = client.list(request.parent.as_ref()).await;
            settle(state, "Load", |s| s.complete_load(request.ticket, result));
        });
    }

    pub fn update_field(&self, name: &str, value: Value) {
        let mut state = self.state;
        state.write().update_draft_field(name, value);
    }

    pub fn submit(&self) {
        let crud = *self;
        let mut state = self.state;
        let begun = state.write().begin_submit();
        let request = match begun {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("Submit not started: {}", err);
                return;
            }
        };
        let client = self.client();

        spawn(async move {
            let result = match &request.action {
                SubmitAction::Create { parent, payload } => {
                    client.create(parent.as_ref(), payload).await
                }
                SubmitAction::Update { id, payload } => client.update(id, payload).await.map(Some),
            };
            let outcome = settle(state, "Submit", |s| s.complete_submit(request.ticket, result));
            if outcome == Some(SubmitOutcome::NeedsReload) {
                crud.load();
            }
        });
    }

    pub fn edit(&self, record: &Record) {
        let mut state = self.state;
        if let Err(err) = state.write().begin_edit(record) {
            tracing::warn!("Cannot edit record: {}", err);
        }
    }

    pub fn cancel_edit(&self) {
        let mut state = self.state;
        state.write().cancel_edit();
    }

    pub fn request_delete(&self, id: RecordId) {
        let mut state = self.state;
        state.write().request_delete(id);
    }

    pub fn cancel_delete(&self) {
        let mut state = self.state;
        state.write().cancel_delete();
    }

    pub fn confirm_delete(&self) {
        let mut state = self.state;
        let Some(request) = state.write().begin_delete() else {
            return;
        };
        let client = self.client();

        spawn(async move {
            let result = client.remove(&request.id).await;
            settle(state, "Delete", |s| s.complete_delete(request.ticket, result));
        });
    }

    pub fn toggle(&self, id: RecordId, value: bool) {
        let mut state = self.state;
        let begun = state.write().begin_toggle(id, value);
        let request = match begun {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("Toggle not started: {}", err);
                return;
            }
        };
        let client = self.client();

        spawn(async move {
            let result = client.toggle(&request.id, request.value).await;
            settle(state, "Toggle", |s| s.complete_toggle(request.ticket, result));
        });
    }

    pub fn dismiss_notification(&self) {
        let mut state = self.state;
        state.write().dismiss_notification();
    }
}
