//! One-record-per-parent hook (product status)

use dioxus::prelude::*;
use procurex_client::ResourceClient;
use procurex_controller::SingletonState;
use procurex_core::RecordId;
use procurex_schema::EntitySchema;
use serde_json::Value;

use super::settle;
use crate::state::use_shell;

#[derive(Clone, Copy, PartialEq)]
pub struct UseSingleton {
    state: Signal<SingletonState>,
    client: Signal<ResourceClient>,
}

pub fn use_singleton(schema: &'static EntitySchema, parent: RecordId) -> UseSingleton {
    let shell = use_shell();
    let state = use_signal(|| SingletonState::new(schema, parent));
    let client = use_signal(|| shell.api().resource(schema));
    let singleton = UseSingleton { state, client };

    use_hook(|| singleton.load());

    singleton
}

impl UseSingleton {
    pub fn state(&self) -> Signal<SingletonState> {
        self.state
    }

    pub fn load(&self) {
        let mut state = self.state;
        let client = self.client.cloned();
        let ticket = state.write().begin_load();
        let parent = state.read().parent().clone();

        spawn(async move {
            let result = client.fetch_single(&parent).await;
            settle(state, "Load", |s| s.complete_load(ticket, result));
        });
    }

    pub fn set_field(&self, name: &str, value: Value) {
        let mut state = self.state;
        state.write().set_field(name, value);
    }

    pub fn save(&self) {
        let mut state = self.state;
        let begun = state.write().begin_save();
        let Ok((ticket, payload)) = begun else {
            return;
        };
        let client = self.client.cloned();
        let parent = state.read().parent().clone();

        spawn(async move {
            let result = client.store_single(&parent, &payload).await;
            settle(state, "Save", |s| s.complete_save(ticket, result));
        });
    }
}
