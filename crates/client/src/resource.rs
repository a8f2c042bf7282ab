//! Per-entity REST access

use async_trait::async_trait;
use procurex_core::{ConsoleError, ConsoleResult, Record, RecordId};
use procurex_schema::EntitySchema;
use reqwest::Method;
use serde_json::{Value, json};

use crate::http::ApiClient;

// ============================================================================
// ResourceApi Trait
// ============================================================================

/// Collection operations for one entity kind
///
/// `create` and `update` take ready-made payloads (see
/// `EntitySchema::create_payload`); the implementation only moves them over
/// the wire.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// Schema this client serves
    fn schema(&self) -> &'static EntitySchema;

    /// Fetch the collection, scoped to `parent` for child resources
    async fn list(&self, parent: Option<&RecordId>) -> ConsoleResult<Vec<Record>>;

    /// Store a new record and return it with its server-assigned id
    ///
    /// `None` means the server accepted the record without echoing it back;
    /// the caller has to re-fetch the list to see it.
    async fn create(
        &self,
        parent: Option<&RecordId>,
        payload: &Record,
    ) -> ConsoleResult<Option<Record>>;

    /// Replace a stored record
    async fn update(&self, id: &RecordId, payload: &Record) -> ConsoleResult<Record>;

    /// Delete a stored record
    async fn remove(&self, id: &RecordId) -> ConsoleResult<()>;

    /// Flip the schema's toggle field on one record
    async fn toggle(&self, id: &RecordId, value: bool) -> ConsoleResult<()> {
        let _ = (id, value);
        Err(ConsoleError::internal(format!(
            "{} has no toggle",
            self.schema().name
        )))
    }
}

// ============================================================================
// ResourceClient
// ============================================================================

/// `ResourceApi` over HTTP
#[derive(Debug, Clone)]
pub struct ResourceClient {
    api: ApiClient,
    schema: &'static EntitySchema,
}

impl ApiClient {
    /// Client for one entity schema
    pub fn resource(&self, schema: &'static EntitySchema) -> ResourceClient {
        ResourceClient {
            api: self.clone(),
            schema,
        }
    }
}

impl ResourceClient {
    /// Server-filtered finalized subset (`/api/vendors/finalized/{parent}`)
    pub async fn list_finalized(&self, parent: &RecordId) -> ConsoleResult<Vec<Record>> {
        let path = self.schema.finalized_path(parent)?;
        records_from(self.api.get(&path).await?)
    }

    /// Fetch one record by id
    pub async fn fetch_one(&self, id: &RecordId) -> ConsoleResult<Record> {
        let path = self.schema.detail_path(id)?;
        let value = self.api.get(&path).await?;
        first_record(value, self.schema.id_field)
            .ok_or_else(|| ConsoleError::server(404, format!("{} {id} not found", self.schema.label)))
    }

    /// Fetch the single record of a 1:1 resource
    ///
    /// A parent without a stored record yields a blank draft.
    pub async fn fetch_single(&self, parent: &RecordId) -> ConsoleResult<Record> {
        let path = self.schema.list_path(Some(parent))?;
        let value = self.api.get(&path).await?;
        Ok(first_object(value)
            .map(|record| self.schema.draft_from(&record, Some(parent)))
            .unwrap_or_else(|| self.schema.blank_draft(Some(parent))))
    }

    /// Store the single record of a 1:1 resource
    pub async fn store_single(&self, parent: &RecordId, payload: &Record) -> ConsoleResult<Record> {
        let path = self.schema.create_path(Some(parent))?;
        let body = payload.clone().into_value();
        let response = self.api.execute(Method::PUT, &path, Some(&body)).await?;
        response.check_status(None)?;
        Ok(body_json(&response.body)
            .and_then(first_object)
            .unwrap_or_else(|| payload.clone()))
    }
}

#[async_trait]
impl ResourceApi for ResourceClient {
    fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    async fn list(&self, parent: Option<&RecordId>) -> ConsoleResult<Vec<Record>> {
        let path = self.schema.list_path(parent)?;
        let records = records_from(self.api.get(&path).await?)?;
        tracing::debug!("Loaded {} {}", records.len(), self.schema.plural_label);
        Ok(records)
    }

    async fn create(
        &self,
        parent: Option<&RecordId>,
        payload: &Record,
    ) -> ConsoleResult<Option<Record>> {
        let path = self.schema.create_path(parent)?;
        let body = payload.clone().into_value();
        let response = self.api.execute(Method::POST, &path, Some(&body)).await?;
        response.check_status(None)?;

        let stored = body_json(&response.body).and_then(|v| first_record(v, self.schema.id_field));
        match &stored {
            Some(record) => tracing::info!(
                "Created {} {}",
                self.schema.name,
                self.schema.record_id(record).map(|id| id.to_string()).unwrap_or_default()
            ),
            None => tracing::info!("Created {} (no record in response)", self.schema.name),
        }
        Ok(stored)
    }

    async fn update(&self, id: &RecordId, payload: &Record) -> ConsoleResult<Record> {
        let path = self.schema.item_path(id)?;
        let body = payload.clone().into_value();
        let response = self.api.execute(Method::PUT, &path, Some(&body)).await?;
        response.check_status(None)?;

        // Some endpoints answer with a message only; the payload is the full record.
        let mut stored = body_json(&response.body)
            .and_then(|v| first_record(v, self.schema.id_field))
            .unwrap_or_else(|| payload.clone());
        if !stored.contains(self.schema.id_field) {
            stored.set(self.schema.id_field, id.to_value());
        }
        Ok(stored)
    }

    async fn remove(&self, id: &RecordId) -> ConsoleResult<()> {
        let path = self.schema.item_path(id)?;
        self.api.delete(&path).await?;
        tracing::info!("Deleted {} {}", self.schema.name, id);
        Ok(())
    }

    async fn toggle(&self, id: &RecordId, value: bool) -> ConsoleResult<()> {
        let toggle = self
            .schema
            .toggle
            .ok_or_else(|| ConsoleError::internal(format!("{} has no toggle", self.schema.name)))?;
        let path = self.schema.toggle_path(id)?;
        let mut body = serde_json::Map::new();
        body.insert(toggle.field.to_string(), json!(value));
        self.api
            .execute(Method::PUT, &path, Some(&Value::Object(body)))
            .await?
            .check_status(None)
    }
}

// ============================================================================
// Response Shapes
// ============================================================================

/// Accept `[...]` or `{ "data": [...] }`
fn records_from(value: Value) -> ConsoleResult<Vec<Record>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ConsoleError::Decode(
                    "expected a JSON array of records".to_string(),
                ));
            }
        },
        Value::Null => Vec::new(),
        other => {
            return Err(ConsoleError::Decode(format!(
                "expected a JSON array of records, found {other}"
            )));
        }
    };
    items.into_iter().map(Record::try_from).collect()
}

/// Success body as JSON, if it is JSON at all
fn body_json(body: &str) -> Option<Value> {
    serde_json::from_str(body).ok()
}

/// The record carrying `id_field`: the body itself, or one object nested in it
fn first_record(value: Value, id_field: &str) -> Option<Record> {
    match value {
        Value::Object(map) if map.contains_key(id_field) => Some(Record::from(map)),
        Value::Object(map) => map.into_iter().find_map(|(_, v)| first_record(v, id_field)),
        Value::Array(items) => items.into_iter().find_map(|v| first_record(v, id_field)),
        _ => None,
    }
}

/// The body object, or the first element of an array body
fn first_object(value: Value) -> Option<Record> {
    match value {
        Value::Object(map) => Some(Record::from(map)),
        Value::Array(items) => items.into_iter().find_map(first_object),
        _ => None,
    }
}
