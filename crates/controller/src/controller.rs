//! `CrudState` bound to a `ResourceApi`

use procurex_client::ResourceApi;
use procurex_core::{ConsoleResult, Record, RecordId};
use serde_json::Value;

use crate::crud::{CrudState, SubmitAction, SubmitOutcome};

/// Runs each workflow step to completion against a resource
///
/// Useful wherever the caller can hold `&mut self` across the request (CLI,
/// tests). The desktop UI drives `CrudState` directly because it cannot.
///
/// # Example
///
/// ```rust,ignore
/// let api = ApiClient::new(DEFAULT_BASE_URL)?;
/// let mut vendors = CrudController::new(api.resource(&VENDOR), Some(RecordId::Int(7)));
/// vendors.load().await?;
/// vendors.update_draft_field("name", "Acme");
/// vendors.submit().await?;
/// ```
pub struct CrudController<A> {
    api: A,
    state: CrudState,
}

impl<A: ResourceApi> CrudController<A> {
    pub fn new(api: A, parent: Option<RecordId>) -> Self {
        let state = CrudState::new(api.schema(), parent);
        Self { api, state }
    }

    pub fn state(&self) -> &CrudState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn items(&self) -> &[Record] {
        self.state.items()
    }

    /// Fetch the list and replace the items
    pub async fn load(&mut self) -> ConsoleResult<()> {
        let request = self.state.begin_load();
        let result = self.api.list(request.parent.as_ref()).await;
        self.state.complete_load(request.ticket, result)
    }

    pub fn update_draft_field(&mut self, name: &str, value: impl Into<Value>) {
        self.state.update_draft_field(name, value);
    }

    /// Create or update, depending on edit mode
    ///
    /// Re-fetches the list when the server did not return the stored record.
    pub async fn submit(&mut self) -> ConsoleResult<()> {
        let request = self.state.begin_submit()?;
        let result = match &request.action {
            SubmitAction::Create { parent, payload } => {
                self.api.create(parent.as_ref(), payload).await
            }
            SubmitAction::Update { id, payload } => self.api.update(id, payload).await.map(Some),
        };
        match self.state.complete_submit(request.ticket, result)? {
            SubmitOutcome::Applied => Ok(()),
            SubmitOutcome::NeedsReload => self.load().await,
        }
    }

    pub fn begin_edit(&mut self, record: &Record) -> ConsoleResult<()> {
        self.state.begin_edit(record)
    }

    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    pub fn request_delete(&mut self, id: RecordId) {
        self.state.request_delete(id);
    }

    pub fn cancel_delete(&mut self) {
        self.state.cancel_delete();
    }

    /// Delete the record awaiting confirmation; a no-op when there is none
    pub async fn confirm_delete(&mut self) -> ConsoleResult<()> {
        let Some(request) = self.state.begin_delete() else {
            return Ok(());
        };
        let result = self.api.remove(&request.id).await;
        self.state.complete_delete(request.ticket, result)
    }

    pub async fn toggle(&mut self, id: RecordId, value: bool) -> ConsoleResult<()> {
        let request = self.state.begin_toggle(id, value)?;
        let result = self.api.toggle(&request.id, request.value).await;
        self.state.complete_toggle(request.ticket, result)
    }
}
