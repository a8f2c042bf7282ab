//! List, form and delete workflow for one entity schema
//!
//! [`CrudState`] owns everything one table+form pair needs: the loaded
//! items, the form draft, edit mode, the delete awaiting confirmation and
//! the current notification. It performs no I/O. Each network operation is
//! split into `begin_*` (returns what to send) and `complete_*` (applies the
//! response), so the same state drives async UI tasks and plain tests.
//!
//! Items are only mutated after a successful response.

use procurex_core::{ConsoleError, ConsoleResult, Record, RecordId};
use procurex_schema::{EntitySchema, ValidationResult};
use serde_json::Value;

use crate::notification::Notification;
use crate::op::{OpState, Ticket, TicketCounter};

// ============================================================================
// Requests
// ============================================================================

/// Fetch the collection
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub ticket: Ticket,
    pub parent: Option<RecordId>,
}

/// What a submit sends
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    Create {
        parent: Option<RecordId>,
        payload: Record,
    },
    Update {
        id: RecordId,
        payload: Record,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub ticket: Ticket,
    pub action: SubmitAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    pub ticket: Ticket,
    pub id: RecordId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleRequest {
    pub ticket: Ticket,
    pub id: RecordId,
    pub value: bool,
}

/// What a successful submit left for the caller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The stored record is already in `items`
    Applied,
    /// The server stored the record without returning it; re-fetch the list
    NeedsReload,
}

/// Submit currently awaiting a response
#[derive(Debug, Clone, PartialEq)]
enum InFlightSubmit {
    Create,
    Update(RecordId),
}

// ============================================================================
// CrudState
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CrudState {
    schema: &'static EntitySchema,
    parent: Option<RecordId>,

    items: Vec<Record>,
    draft: Record,
    editing_id: Option<RecordId>,
    pending_delete: Option<RecordId>,
    notification: Option<Notification>,
    validation: ValidationResult,

    load: OpState,
    submit: OpState,
    delete: OpState,
    toggle: OpState,

    tickets: TicketCounter,
    submitting: Option<InFlightSubmit>,
    deleting: Option<RecordId>,
    toggling: Option<(RecordId, bool)>,
}

impl CrudState {
    /// Empty state scoped to `parent`
    pub fn new(schema: &'static EntitySchema, parent: Option<RecordId>) -> Self {
        Self {
            schema,
            draft: schema.blank_draft(parent.as_ref()),
            parent,
            items: Vec::new(),
            editing_id: None,
            pending_delete: None,
            notification: None,
            validation: ValidationResult::ok(schema.name),
            load: OpState::Idle,
            submit: OpState::Idle,
            delete: OpState::Idle,
            toggle: OpState::Idle,
            tickets: TicketCounter::default(),
            submitting: None,
            deleting: None,
            toggling: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    pub fn parent(&self) -> Option<&RecordId> {
        self.parent.as_ref()
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn draft(&self) -> &Record {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        self.editing_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn pending_delete(&self) -> Option<&RecordId> {
        self.pending_delete.as_ref()
    }

    /// Whether the confirmation prompt belongs to this row
    pub fn is_confirming(&self, id: &RecordId) -> bool {
        self.pending_delete.as_ref() == Some(id)
    }

    /// Id whose delete request is in flight
    pub fn deleting_id(&self) -> Option<&RecordId> {
        self.deleting.as_ref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn load_state(&self) -> &OpState {
        &self.load
    }

    pub fn submit_state(&self) -> &OpState {
        &self.submit
    }

    pub fn delete_state(&self) -> &OpState {
        &self.delete
    }

    pub fn toggle_state(&self) -> &OpState {
        &self.toggle
    }

    /// Collection not yet known
    pub fn is_loading(&self) -> bool {
        self.load.is_pending()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_pending()
    }

    /// Current validation message for a field
    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.validation
            .errors_for(name)
            .next()
            .map(|e| e.message.as_str())
    }

    /// Items whose toggle field is set (finalized vendors)
    pub fn finalized_view(&self) -> Vec<&Record> {
        match self.schema.toggle {
            Some(toggle) => self.items.iter().filter(|r| r.flag(toggle.field)).collect(),
            None => Vec::new(),
        }
    }

    /// Find a loaded item by id
    pub fn item(&self, id: &RecordId) -> Option<&Record> {
        self.items
            .iter()
            .find(|r| self.schema.record_id(r).as_ref() == Some(id))
    }

    // ========================================================================
    // Load
    // ========================================================================

    pub fn begin_load(&mut self) -> LoadRequest {
        let ticket = self.tickets.issue();
        self.load = OpState::Pending(ticket);
        LoadRequest {
            ticket,
            parent: self.parent.clone(),
        }
    }

    /// Replace the items with the fetched list
    pub fn complete_load(
        &mut self,
        ticket: Ticket,
        result: ConsoleResult<Vec<Record>>,
    ) -> ConsoleResult<()> {
        if !self.load.awaits(ticket) {
            tracing::debug!("Dropping stale {} list response", self.schema.name);
            return Ok(());
        }
        self.load.settle(&result);

        match result {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Loading {} failed: {}", self.schema.plural_label, err);
                self.notification = Some(Notification::failure(
                    "loading",
                    self.schema.plural_label,
                    &err,
                ));
                Err(err)
            }
        }
    }

    // ========================================================================
    // Draft
    // ========================================================================

    /// Merge one value into the draft
    ///
    /// The id and parent key are never taken from the form.
    pub fn update_draft_field(&mut self, name: &str, value: impl Into<Value>) {
        if self.schema.is_protected(name) {
            tracing::warn!("Ignoring edit of protected field {}.{}", self.schema.name, name);
            return;
        }
        self.draft.set(name, value);
        self.validation.errors.retain(|e| e.field != name);
    }

    /// Switch to edit mode with a copy of `record`
    pub fn begin_edit(&mut self, record: &Record) -> ConsoleResult<()> {
        let id = self.schema.record_id(record).ok_or_else(|| {
            ConsoleError::validation(format!(
                "{} record has no '{}'",
                self.schema.label, self.schema.id_field
            ))
        })?;
        self.draft = self.schema.draft_from(record, self.parent.as_ref());
        self.editing_id = Some(id);
        self.validation = ValidationResult::ok(self.schema.name);
        Ok(())
    }

    /// Back to create mode with a blank draft
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.reset_draft();
    }

    fn reset_draft(&mut self) {
        self.draft = self.schema.blank_draft(self.parent.as_ref());
        self.validation = ValidationResult::ok(self.schema.name);
    }

    // ========================================================================
    // Submit
    // ========================================================================

    /// Validate the draft and build the create or update request
    ///
    /// Validation failures set an error notification and return the error
    /// without touching anything else.
    pub fn begin_submit(&mut self) -> ConsoleResult<SubmitRequest> {
        if self.submit.is_pending() {
            return Err(ConsoleError::in_progress("Submit"));
        }

        let check = self.schema.validate_draft(&self.draft);
        if !check.is_valid() {
            self.validation = check.clone();
            let err = check.to_result().err().unwrap_or_else(|| {
                ConsoleError::internal("validation failed without errors")
            });
            self.notification = Some(Notification::error(err.user_message()));
            return Err(err);
        }

        let built = match &self.editing_id {
            Some(id) => self
                .schema
                .update_payload(&self.draft, id, self.parent.as_ref())
                .map(|payload| {
                    (
                        InFlightSubmit::Update(id.clone()),
                        SubmitAction::Update {
                            id: id.clone(),
                            payload,
                        },
                    )
                }),
            None => self
                .schema
                .create_payload(&self.draft, self.parent.as_ref())
                .map(|payload| {
                    (
                        InFlightSubmit::Create,
                        SubmitAction::Create {
                            parent: self.parent.clone(),
                            payload,
                        },
                    )
                }),
        };

        let (in_flight, action) = match built {
            Ok(built) => built,
            Err(err) => {
                self.notification = Some(Notification::error(err.user_message()));
                return Err(err);
            }
        };

        let ticket = self.tickets.issue();
        self.submit = OpState::Pending(ticket);
        self.submitting = Some(in_flight);
        Ok(SubmitRequest { ticket, action })
    }

    /// Apply the stored record returned by create or update
    ///
    /// `Ok(None)` is a success whose response did not carry the record.
    pub fn complete_submit(
        &mut self,
        ticket: Ticket,
        result: ConsoleResult<Option<Record>>,
    ) -> ConsoleResult<SubmitOutcome> {
        if !self.submit.awaits(ticket) {
            tracing::debug!("Dropping stale {} submit response", self.schema.name);
            return Ok(SubmitOutcome::Applied);
        }
        self.submit.settle(&result);
        let in_flight = self.submitting.take();
        let label = self.schema.label;

        match (in_flight, result) {
            (Some(InFlightSubmit::Create), Ok(stored)) => {
                let outcome = match stored {
                    Some(stored) => {
                        self.items.push(stored);
                        SubmitOutcome::Applied
                    }
                    None => SubmitOutcome::NeedsReload,
                };
                self.notification = Some(Notification::success(format!(
                    "{label} added successfully!"
                )));
                // an edit started while the create was in flight keeps its draft
                if self.editing_id.is_none() {
                    self.reset_draft();
                }
                Ok(outcome)
            }
            (Some(InFlightSubmit::Update(id)), Ok(stored)) => {
                let outcome = match stored {
                    Some(stored) => {
                        let schema = self.schema;
                        if let Some(slot) = self
                            .items
                            .iter_mut()
                            .find(|r| schema.record_id(r).as_ref() == Some(&id))
                        {
                            *slot = stored;
                        }
                        SubmitOutcome::Applied
                    }
                    None => SubmitOutcome::NeedsReload,
                };
                self.notification = Some(Notification::success(format!(
                    "{label} updated successfully!"
                )));
                if self.editing_id.as_ref() == Some(&id) {
                    self.cancel_edit();
                }
                Ok(outcome)
            }
            (in_flight, Err(err)) => {
                let action = match in_flight {
                    Some(InFlightSubmit::Update(_)) => "updating",
                    _ => "adding",
                };
                tracing::warn!("Submitting {} failed: {}", self.schema.name, err);
                self.notification = Some(Notification::failure(action, label, &err));
                Err(err)
            }
            (None, Ok(_)) => Err(ConsoleError::internal("submit completed without a request")),
        }
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: RecordId) {
        self.pending_delete = Some(id);
    }

    /// Dismiss the confirmation prompt
    pub fn cancel_delete(&mut self) {
        if self.deleting.is_none() {
            self.pending_delete = None;
        }
    }

    /// Start deleting the confirmed id
    ///
    /// Returns `None` when nothing awaits confirmation or a delete is
    /// already in flight.
    pub fn begin_delete(&mut self) -> Option<DeleteRequest> {
        if self.delete.is_pending() {
            return None;
        }
        let id = self.pending_delete.clone()?;
        let ticket = self.tickets.issue();
        self.delete = OpState::Pending(ticket);
        self.deleting = Some(id.clone());
        Some(DeleteRequest { ticket, id })
    }

    pub fn complete_delete(&mut self, ticket: Ticket, result: ConsoleResult<()>) -> ConsoleResult<()> {
        if !self.delete.awaits(ticket) {
            tracing::debug!("Dropping stale {} delete response", self.schema.name);
            return Ok(());
        }
        self.delete.settle(&result);
        let Some(id) = self.deleting.take() else {
            return Err(ConsoleError::internal("delete completed without a request"));
        };
        if self.pending_delete.as_ref() == Some(&id) {
            self.pending_delete = None;
        }

        match result {
            Ok(()) => {
                let schema = self.schema;
                self.items
                    .retain(|r| schema.record_id(r).as_ref() != Some(&id));
                if self.editing_id.as_ref() == Some(&id) {
                    self.cancel_edit();
                }
                self.notification = Some(Notification::success(format!(
                    "{} deleted successfully!",
                    schema.label
                )));
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Deleting {} {} failed: {}", self.schema.name, id, err);
                self.notification = Some(Notification::failure("deleting", self.schema.label, &err));
                Err(err)
            }
        }
    }

    // ========================================================================
    // Toggle
    // ========================================================================

    /// Start setting the schema's toggle field on one item
    pub fn begin_toggle(&mut self, id: RecordId, value: bool) -> ConsoleResult<ToggleRequest> {
        if self.schema.toggle.is_none() {
            return Err(ConsoleError::internal(format!(
                "{} has no toggle",
                self.schema.name
            )));
        }
        if self.toggle.is_pending() {
            return Err(ConsoleError::in_progress("Update"));
        }
        let ticket = self.tickets.issue();
        self.toggle = OpState::Pending(ticket);
        self.toggling = Some((id.clone(), value));
        Ok(ToggleRequest { ticket, id, value })
    }

    pub fn complete_toggle(&mut self, ticket: Ticket, result: ConsoleResult<()>) -> ConsoleResult<()> {
        if !self.toggle.awaits(ticket) {
            return Ok(());
        }
        self.toggle.settle(&result);
        let (Some((id, value)), Some(toggle)) = (self.toggling.take(), self.schema.toggle) else {
            return Err(ConsoleError::internal("toggle completed without a request"));
        };
        let label = self.schema.label;

        match result {
            Ok(()) => {
                let schema = self.schema;
                if let Some(item) = self
                    .items
                    .iter_mut()
                    .find(|r| schema.record_id(r).as_ref() == Some(&id))
                {
                    item.set(toggle.field, value);
                }
                let state = if value { "" } else { "not " };
                self.notification = Some(Notification::success(format!(
                    "{label} marked as {state}{}",
                    toggle.label.to_lowercase()
                )));
                Ok(())
            }
            Err(err) => {
                self.notification = Some(Notification::failure("updating", label, &err));
                Err(err)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use procurex_schema::catalog::{NOTE, PRODUCT, VENDOR};
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::try_from(value).unwrap()
    }

    fn loaded(schema: &'static EntitySchema, parent: Option<RecordId>, items: Vec<Record>) -> CrudState {
        let mut state = CrudState::new(schema, parent);
        let request = state.begin_load();
        state.complete_load(request.ticket, Ok(items)).unwrap();
        state
    }

    fn fill_note(state: &mut CrudState, title: &str) {
        state.update_draft_field("title", title);
        state.update_draft_field("note", "body");
    }

    #[test]
    fn test_load_replaces_items_and_clears_loading() {
        let mut state = CrudState::new(&PRODUCT, None);
        let request = state.begin_load();
        assert!(state.is_loading());

        state
            .complete_load(request.ticket, Ok(vec![record(json!({"id": 1, "name": "Lamp"}))]))
            .unwrap();
        assert!(!state.is_loading());
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_failed_load_clears_loading_and_notifies() {
        let mut state = CrudState::new(&PRODUCT, None);
        let request = state.begin_load();
        let err = state
            .complete_load(request.ticket, Err(ConsoleError::network("offline")))
            .unwrap_err();

        assert!(err.is_network());
        assert!(!state.is_loading());
        assert!(state.notification().unwrap().is_error());
        assert_eq!(state.load_state().error(), Some(&err));
    }

    #[test]
    fn test_empty_product_list() {
        let state = loaded(&PRODUCT, None, vec![]);
        assert!(state.items().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.schema().empty_text(), "No products found");
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut state = CrudState::new(&PRODUCT, None);
        let first = state.begin_load();
        let second = state.begin_load();

        state
            .complete_load(second.ticket, Ok(vec![record(json!({"id": 2}))]))
            .unwrap();
        state
            .complete_load(first.ticket, Ok(vec![record(json!({"id": 1})), record(json!({"id": 3}))]))
            .unwrap();

        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].id("id"), Some(RecordId::Int(2)));
    }

    #[test]
    fn test_create_appends_after_success_and_resets_draft() {
        let parent = RecordId::Int(4);
        let mut state = loaded(&NOTE, Some(parent.clone()), vec![]);
        fill_note(&mut state, "Pricing");

        let request = state.begin_submit().unwrap();
        assert!(state.items().is_empty());
        let SubmitAction::Create { payload, parent: sent_parent } = &request.action else {
            panic!("expected a create");
        };
        assert_eq!(sent_parent.as_ref(), Some(&parent));
        assert_eq!(payload.get("product_id"), Some(&json!(4)));

        let stored = payload.clone().with("note_id", 10);
        let outcome = state.complete_submit(request.ticket, Ok(Some(stored))).unwrap();

        assert_eq!(outcome, SubmitOutcome::Applied);
        assert_eq!(state.items().len(), 1);
        assert_eq!(
            state.notification(),
            Some(&Notification::success("Note added successfully!"))
        );
        assert_eq!(state.draft(), &NOTE.blank_draft(Some(&parent)));
    }

    #[test]
    fn test_create_without_returned_record_asks_for_reload() {
        let parent = RecordId::Int(4);
        let mut state = loaded(&NOTE, Some(parent.clone()), vec![]);
        fill_note(&mut state, "Pricing");

        let request = state.begin_submit().unwrap();
        let outcome = state.complete_submit(request.ticket, Ok(None)).unwrap();

        assert_eq!(outcome, SubmitOutcome::NeedsReload);
        assert!(state.items().is_empty());
        assert!(!state.is_submitting());
        assert_eq!(
            state.notification(),
            Some(&Notification::success("Note added successfully!"))
        );
        assert_eq!(state.draft(), &NOTE.blank_draft(Some(&parent)));
    }

    #[test]
    fn test_failed_create_keeps_items_and_draft() {
        let mut state = loaded(&NOTE, Some(RecordId::Int(4)), vec![]);
        fill_note(&mut state, "Pricing");
        let draft_before = state.draft().clone();

        let request = state.begin_submit().unwrap();
        let err = state
            .complete_submit(request.ticket, Err(ConsoleError::server(500, "db down")))
            .unwrap_err();

        assert!(err.is_server());
        assert!(state.items().is_empty());
        assert_eq!(state.draft(), &draft_before);
        assert_eq!(
            state.notification().map(|n| n.message.as_str()),
            Some("Error adding note: db down")
        );
    }

    #[test]
    fn test_validation_blocks_submit() {
        let mut state = loaded(&NOTE, Some(RecordId::Int(4)), vec![]);
        state.update_draft_field("title", "Only a title");

        let err = state.begin_submit().unwrap_err();
        assert!(err.is_validation());
        assert!(!state.is_submitting());
        assert_eq!(state.field_error("note"), Some("Note is required"));
        assert_eq!(state.field_error("title"), None);

        state.update_draft_field("note", "now filled");
        assert_eq!(state.field_error("note"), None);
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn test_second_submit_while_pending() {
        let mut state = loaded(&NOTE, Some(RecordId::Int(4)), vec![]);
        fill_note(&mut state, "Pricing");
        state.begin_submit().unwrap();
        assert_eq!(
            state.begin_submit().unwrap_err(),
            ConsoleError::in_progress("Submit")
        );
    }

    #[test]
    fn test_update_replaces_in_place() {
        let parent = RecordId::Int(4);
        let items = vec![
            record(json!({"note_id": 1, "title": "A", "note": "a", "product_id": 4})),
            record(json!({"note_id": 2, "title": "B", "note": "b", "product_id": 4})),
        ];
        let mut state = loaded(&NOTE, Some(parent.clone()), items);

        state.begin_edit(&state.items()[1].clone()).unwrap();
        assert_eq!(state.editing_id(), Some(&RecordId::Int(2)));
        state.update_draft_field("title", "B2");

        let request = state.begin_submit().unwrap();
        let SubmitAction::Update { id, payload } = &request.action else {
            panic!("expected an update");
        };
        assert_eq!(id, &RecordId::Int(2));
        assert_eq!(payload.get("note_id"), Some(&json!(2)));
        assert_eq!(payload.get("title"), Some(&json!("B2")));

        let stored = payload.clone();
        state.complete_submit(request.ticket, Ok(Some(stored))).unwrap();

        assert_eq!(state.items().len(), 2);
        assert_eq!(state.items()[1].text("title"), "B2");
        assert_eq!(state.items()[0].text("title"), "A");
        assert!(!state.is_editing());
        assert_eq!(state.draft(), &NOTE.blank_draft(Some(&parent)));
        assert_eq!(
            state.notification().map(|n| n.message.as_str()),
            Some("Note updated successfully!")
        );
    }

    #[test]
    fn test_failed_update_stays_in_edit_mode() {
        let items = vec![record(json!({"note_id": 1, "title": "A", "note": "a"}))];
        let mut state = loaded(&NOTE, Some(RecordId::Int(4)), items);
        state.begin_edit(&state.items()[0].clone()).unwrap();

        let request = state.begin_submit().unwrap();
        state
            .complete_submit(request.ticket, Err(ConsoleError::network("reset")))
            .unwrap_err();

        assert!(state.is_editing());
        assert_eq!(state.items().len(), 1);
        assert!(state.notification().unwrap().message.starts_with("Error updating note"));
    }

    #[test]
    fn test_begin_edit_copies_record_and_keeps_parent() {
        let parent = RecordId::Int(7);
        let vendor = record(json!({
            "vendor_id": 3, "product_id": 7, "name": "Acme", "contact_email": "a@x.com",
            "contact_phone": "1", "company": "Acme", "details": "d", "attachment": "f",
            "rates": "r", "notes": "n", "comments": "c", "finalized": false
        }));
        let mut state = loaded(&VENDOR, Some(parent), vec![vendor.clone()]);

        state.begin_edit(&vendor).unwrap();
        state.cancel_delete();

        for field in VENDOR.fields {
            assert_eq!(state.draft().get(field.name), vendor.get(field.name));
        }
        assert_eq!(state.draft().get("product_id"), Some(&json!(7)));
    }

    #[test]
    fn test_protected_fields_are_not_editable() {
        let mut state = CrudState::new(&VENDOR, Some(RecordId::Int(7)));
        state.update_draft_field("product_id", 99);
        state.update_draft_field("vendor_id", 5);
        assert_eq!(state.draft().get("product_id"), Some(&json!(7)));
        assert!(!state.draft().contains("vendor_id"));
    }

    #[test]
    fn test_begin_edit_without_id() {
        let mut state = CrudState::new(&PRODUCT, None);
        assert!(state.begin_edit(&record(json!({"name": "x"}))).is_err());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_double_request_delete_removes_once() {
        let items = vec![
            record(json!({"id": 1})),
            record(json!({"id": 3})),
            record(json!({"id": 5})),
        ];
        let mut state = loaded(&PRODUCT, None, items);

        state.request_delete(RecordId::Int(3));
        state.request_delete(RecordId::Int(3));
        assert!(state.is_confirming(&RecordId::Int(3)));
        assert!(!state.is_confirming(&RecordId::Int(1)));

        let request = state.begin_delete().unwrap();
        assert_eq!(request.id, RecordId::Int(3));
        assert!(state.begin_delete().is_none());
        state.complete_delete(request.ticket, Ok(())).unwrap();

        let ids: Vec<_> = state.items().iter().filter_map(|r| r.id("id")).collect();
        assert_eq!(ids, vec![RecordId::Int(1), RecordId::Int(5)]);
        assert_eq!(state.pending_delete(), None);

        // nothing pending any more
        assert!(state.begin_delete().is_none());
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn test_failed_delete_keeps_item() {
        let mut state = loaded(&PRODUCT, None, vec![record(json!({"id": 1}))]);
        state.request_delete(RecordId::Int(9));
        let request = state.begin_delete().unwrap();
        let err = state
            .complete_delete(request.ticket, Err(ConsoleError::server(404, "Product not found")))
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.pending_delete(), None);
        assert_eq!(
            state.notification().map(|n| n.message.as_str()),
            Some("Error deleting product: Product not found")
        );
    }

    #[test]
    fn test_cancel_delete() {
        let mut state = loaded(&PRODUCT, None, vec![record(json!({"id": 1}))]);
        state.request_delete(RecordId::Int(1));
        state.cancel_delete();
        assert_eq!(state.pending_delete(), None);
        assert!(state.begin_delete().is_none());
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_deleting_edited_record_leaves_edit_mode() {
        let mut state = loaded(&PRODUCT, None, vec![record(json!({"id": 1, "name": "Lamp"}))]);
        state.begin_edit(&state.items()[0].clone()).unwrap();
        state.request_delete(RecordId::Int(1));
        let request = state.begin_delete().unwrap();
        state.complete_delete(request.ticket, Ok(())).unwrap();
        assert!(!state.is_editing());
    }

    #[test]
    fn test_toggle_and_finalized_view() {
        let items = vec![
            record(json!({"vendor_id": 1, "finalized": false})),
            record(json!({"vendor_id": 2, "finalized": true})),
        ];
        let mut state = loaded(&VENDOR, Some(RecordId::Int(7)), items);
        assert_eq!(state.finalized_view().len(), 1);

        let request = state.begin_toggle(RecordId::Int(1), true).unwrap();
        assert_eq!(state.finalized_view().len(), 1);
        state.complete_toggle(request.ticket, Ok(())).unwrap();

        assert_eq!(state.finalized_view().len(), 2);
        assert_eq!(
            state.notification().map(|n| n.message.as_str()),
            Some("Vendor marked as finalized")
        );
    }

    #[test]
    fn test_failed_toggle_changes_nothing() {
        let items = vec![record(json!({"vendor_id": 1, "finalized": false}))];
        let mut state = loaded(&VENDOR, Some(RecordId::Int(7)), items);
        let request = state.begin_toggle(RecordId::Int(1), true).unwrap();
        state
            .complete_toggle(request.ticket, Err(ConsoleError::network("offline")))
            .unwrap_err();
        assert!(state.finalized_view().is_empty());
    }

    #[test]
    fn test_toggle_requires_toggle_field() {
        let mut state = CrudState::new(&PRODUCT, None);
        assert!(state.begin_toggle(RecordId::Int(1), true).is_err());
        assert!(state.finalized_view().is_empty());
    }

    #[test]
    fn test_notification_is_single_slot() {
        let mut state = loaded(&PRODUCT, None, vec![record(json!({"id": 1})), record(json!({"id": 2}))]);
        for id in [1, 2] {
            state.request_delete(RecordId::Int(id));
            let request = state.begin_delete().unwrap();
            state.complete_delete(request.ticket, Ok(())).unwrap();
        }
        assert_eq!(
            state.notification(),
            Some(&Notification::success("Product deleted successfully!"))
        );
        state.dismiss_notification();
        assert_eq!(state.notification(), None);
    }
}
