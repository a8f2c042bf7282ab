//! In-memory `ResourceApi` for controller tests

use std::sync::Mutex;

use async_trait::async_trait;
use procurex_client::ResourceApi;
use procurex_core::{ConsoleError, ConsoleResult, Record, RecordId};
use procurex_schema::EntitySchema;

/// Stores records in a vector and assigns increasing integer ids
pub struct MemoryResource {
    schema: &'static EntitySchema,
    records: Mutex<Vec<Record>>,
    next_id: Mutex<i64>,
    /// Payloads passed to `create`, in call order
    pub created: Mutex<Vec<Record>>,
    /// Error returned by the next call, whatever it is
    fail_next: Mutex<Option<ConsoleError>>,
    /// Store created records but answer without them
    silent_create: bool,
}

impl MemoryResource {
    pub fn new(schema: &'static EntitySchema) -> Self {
        Self {
            schema,
            records: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            created: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
            silent_create: false,
        }
    }

    /// Answer creates with an acknowledgement only
    pub fn with_silent_create(mut self) -> Self {
        self.silent_create = true;
        self
    }

    pub fn with_records(self, records: Vec<Record>) -> Self {
        let max = records
            .iter()
            .filter_map(|r| match self.schema.record_id(r) {
                Some(RecordId::Int(n)) => Some(n),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        *self.next_id.lock().unwrap() = max + 1;
        *self.records.lock().unwrap() = records;
        self
    }

    pub fn fail_next(&self, err: ConsoleError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub fn stored(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    fn check_failure(&self) -> ConsoleResult<()> {
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn position(&self, records: &[Record], id: &RecordId) -> ConsoleResult<usize> {
        records
            .iter()
            .position(|r| self.schema.record_id(r).as_ref() == Some(id))
            .ok_or_else(|| ConsoleError::server(404, format!("{} not found", self.schema.label)))
    }
}

#[async_trait]
impl ResourceApi for MemoryResource {
    fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    async fn list(&self, parent: Option<&RecordId>) -> ConsoleResult<Vec<Record>> {
        self.check_failure()?;
        let records = self.records.lock().unwrap();
        Ok(match (self.schema.parent, parent) {
            (Some(key), Some(parent)) => records
                .iter()
                .filter(|r| r.id(key.field).as_ref() == Some(parent))
                .cloned()
                .collect(),
            _ => records.clone(),
        })
    }

    async fn create(
        &self,
        _parent: Option<&RecordId>,
        payload: &Record,
    ) -> ConsoleResult<Option<Record>> {
        self.check_failure()?;
        self.created.lock().unwrap().push(payload.clone());

        let mut next_id = self.next_id.lock().unwrap();
        let stored = payload.clone().with(self.schema.id_field, *next_id);
        *next_id += 1;
        self.records.lock().unwrap().push(stored.clone());
        Ok((!self.silent_create).then_some(stored))
    }

    async fn update(&self, id: &RecordId, payload: &Record) -> ConsoleResult<Record> {
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        let index = self.position(&records, id)?;
        records[index] = payload.clone();
        Ok(payload.clone())
    }

    async fn remove(&self, id: &RecordId) -> ConsoleResult<()> {
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        let index = self.position(&records, id)?;
        records.remove(index);
        Ok(())
    }

    async fn toggle(&self, id: &RecordId, value: bool) -> ConsoleResult<()> {
        self.check_failure()?;
        let field = self
            .schema
            .toggle
            .map(|t| t.field)
            .ok_or_else(|| ConsoleError::internal("no toggle"))?;
        let mut records = self.records.lock().unwrap();
        let index = self.position(&records, id)?;
        records[index].set(field, value);
        Ok(())
    }
}
