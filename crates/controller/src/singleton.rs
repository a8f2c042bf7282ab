//! One-record-per-parent resources (product status)

use procurex_core::{ConsoleError, ConsoleResult, Record, RecordId};
use procurex_schema::EntitySchema;
use serde_json::Value;

use crate::notification::Notification;
use crate::op::{OpState, Ticket, TicketCounter};

/// Form state for a record that always exists once per parent
#[derive(Debug, Clone, PartialEq)]
pub struct SingletonState {
    schema: &'static EntitySchema,
    parent: RecordId,
    record: Record,
    notification: Option<Notification>,
    load: OpState,
    save: OpState,
    tickets: TicketCounter,
}

impl SingletonState {
    pub fn new(schema: &'static EntitySchema, parent: RecordId) -> Self {
        Self {
            schema,
            record: schema.blank_draft(Some(&parent)),
            parent,
            notification: None,
            load: OpState::Idle,
            save: OpState::Idle,
            tickets: TicketCounter::default(),
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    pub fn parent(&self) -> &RecordId {
        &self.parent
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Nothing known yet
    pub fn is_loading(&self) -> bool {
        matches!(self.load, OpState::Idle | OpState::Pending(_))
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_pending()
    }

    pub fn begin_load(&mut self) -> Ticket {
        let ticket = self.tickets.issue();
        self.load = OpState::Pending(ticket);
        ticket
    }

    pub fn complete_load(&mut self, ticket: Ticket, result: ConsoleResult<Record>) -> ConsoleResult<()> {
        if !self.load.awaits(ticket) {
            return Ok(());
        }
        self.load.settle(&result);
        match result {
            Ok(record) => {
                self.record = self.schema.draft_from(&record, Some(&self.parent));
                Ok(())
            }
            Err(err) => {
                self.notification = Some(Notification::failure("loading", self.schema.label, &err));
                Err(err)
            }
        }
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) {
        if self.schema.is_protected(name) {
            return;
        }
        self.record.set(name, value);
    }

    /// Build the payload to store
    pub fn begin_save(&mut self) -> ConsoleResult<(Ticket, Record)> {
        if self.save.is_pending() {
            return Err(ConsoleError::in_progress("Save"));
        }
        let payload = match self.schema.create_payload(&self.record, Some(&self.parent)) {
            Ok(payload) => payload,
            Err(err) => {
                self.notification = Some(Notification::error(err.user_message()));
                return Err(err);
            }
        };
        let ticket = self.tickets.issue();
        self.save = OpState::Pending(ticket);
        Ok((ticket, payload))
    }

    pub fn complete_save(&mut self, ticket: Ticket, result: ConsoleResult<Record>) -> ConsoleResult<()> {
        if !self.save.awaits(ticket) {
            return Ok(());
        }
        self.save.settle(&result);
        match result {
            Ok(stored) => {
                self.record = self.schema.draft_from(&stored, Some(&self.parent));
                self.notification = Some(Notification::success(format!(
                    "{} updated successfully!",
                    self.schema.label
                )));
                Ok(())
            }
            Err(err) => {
                self.notification = Some(Notification::failure("updating", self.schema.label, &err));
                Err(err)
            }
        }
    }
}
