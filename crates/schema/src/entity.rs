//! Entity schemas and endpoint templates

use procurex_core::{ConsoleError, ConsoleResult, Record, RecordId};

use crate::field::FieldSpec;

// ============================================================================
// Parent Keys
// ============================================================================

/// Which record kind scopes a child resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentKind {
    Product,
    Vendor,
}

impl ParentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ParentKind::Product => "Product",
            ParentKind::Vendor => "Vendor",
        }
    }
}

/// Foreign key linking a child record to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentKey {
    /// JSON key carrying the parent id
    pub field: &'static str,
    pub kind: ParentKind,
}

impl ParentKey {
    pub const fn product() -> Self {
        Self {
            field: "product_id",
            kind: ParentKind::Product,
        }
    }

    pub const fn vendor() -> Self {
        Self {
            field: "vendor_id",
            kind: ParentKind::Vendor,
        }
    }
}

// ============================================================================
// Endpoint Templates
// ============================================================================

/// REST paths of one resource
///
/// Templates may contain `{parent}` and `{id}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePaths {
    /// `GET` collection
    pub list: &'static str,
    /// `POST` new record
    pub create: &'static str,
    /// `PUT` / `DELETE` one record
    pub item: &'static str,
    /// `GET` one record, when it differs from `item`
    pub detail: Option<&'static str>,
    /// `GET` the server-filtered finalized subset
    pub finalized: Option<&'static str>,
}

impl ResourcePaths {
    /// Same template for list and create
    pub const fn nested(list: &'static str, item: &'static str) -> Self {
        Self {
            list,
            create: list,
            item,
            detail: None,
            finalized: None,
        }
    }
}

/// A boolean field with its own endpoint (vendor finalization)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSpec {
    pub field: &'static str,
    pub label: &'static str,
    /// `PUT` path taking `{id}`, body `{ field: bool }`
    pub path: &'static str,
}

// ============================================================================
// EntitySchema
// ============================================================================

/// Everything the console knows about one record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    /// Catalog key, snake_case
    pub name: &'static str,
    pub label: &'static str,
    pub plural_label: &'static str,
    /// Key holding the server-assigned id
    pub id_field: &'static str,
    pub parent: Option<ParentKey>,
    /// Form fields, in display order
    pub fields: &'static [FieldSpec],
    /// Table columns by field name; empty means every field
    pub columns: &'static [&'static str],
    pub paths: ResourcePaths,
    pub toggle: Option<ToggleSpec>,
    /// Exactly one record per parent, fetched and stored in place
    pub singleton: bool,
}

impl EntitySchema {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields shown as table columns
    pub fn table_columns(&self) -> Vec<&'static FieldSpec> {
        if self.columns.is_empty() {
            return self.fields.iter().collect();
        }
        self.columns.iter().filter_map(|c| self.field(c)).collect()
    }

    /// Placeholder for an empty table
    pub fn empty_text(&self) -> String {
        format!("No {} found", self.plural_label.to_lowercase())
    }

    /// Read the identifier of a stored record
    pub fn record_id(&self, record: &Record) -> Option<RecordId> {
        record.id(self.id_field)
    }

    /// Keys the user can never edit: the id and the parent key
    pub fn is_protected(&self, name: &str) -> bool {
        name == self.id_field || self.parent.is_some_and(|p| p.field == name)
    }

    // ------------------------------------------------------------------------
    // Paths
    // ------------------------------------------------------------------------

    pub fn list_path(&self, parent: Option<&RecordId>) -> ConsoleResult<String> {
        self.fill(self.paths.list, parent, None)
    }

    pub fn create_path(&self, parent: Option<&RecordId>) -> ConsoleResult<String> {
        self.fill(self.paths.create, parent, None)
    }

    pub fn item_path(&self, id: &RecordId) -> ConsoleResult<String> {
        self.fill(self.paths.item, None, Some(id))
    }

    pub fn detail_path(&self, id: &RecordId) -> ConsoleResult<String> {
        self.fill(self.paths.detail.unwrap_or(self.paths.item), None, Some(id))
    }

    pub fn finalized_path(&self, parent: &RecordId) -> ConsoleResult<String> {
        let template = self.paths.finalized.ok_or_else(|| {
            ConsoleError::internal(format!("{} has no finalized listing", self.name))
        })?;
        self.fill(template, Some(parent), None)
    }

    pub fn toggle_path(&self, id: &RecordId) -> ConsoleResult<String> {
        let toggle = self
            .toggle
            .ok_or_else(|| ConsoleError::internal(format!("{} has no toggle", self.name)))?;
        self.fill(toggle.path, None, Some(id))
    }

    fn fill(
        &self,
        template: &str,
        parent: Option<&RecordId>,
        id: Option<&RecordId>,
    ) -> ConsoleResult<String> {
        let mut path = template.to_string();
        if path.contains("{parent}") {
            let parent = parent.ok_or_else(|| ConsoleError::MissingParent {
                entity: self.name.to_string(),
            })?;
            path = path.replace("{parent}", &parent.to_string());
        }
        if path.contains("{id}") {
            let id = id.ok_or_else(|| {
                ConsoleError::internal(format!("path '{template}' needs a record id"))
            })?;
            path = path.replace("{id}", &id.to_string());
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NOTE, PRODUCT, VENDOR};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paths_substitute_placeholders() {
        let product = RecordId::Int(7);
        let vendor = RecordId::Int(3);

        assert_eq!(VENDOR.list_path(Some(&product)).unwrap(), "/api/vendors/7");
        assert_eq!(VENDOR.create_path(Some(&product)).unwrap(), "/api/vendors/add");
        assert_eq!(VENDOR.item_path(&vendor).unwrap(), "/api/vendors/3");
        assert_eq!(VENDOR.detail_path(&vendor).unwrap(), "/api/vendorDetails/3");
        assert_eq!(VENDOR.toggle_path(&vendor).unwrap(), "/api/vendors/3/finalize");
        assert_eq!(
            VENDOR.finalized_path(&product).unwrap(),
            "/api/vendors/finalized/7"
        );
        assert_eq!(NOTE.create_path(Some(&product)).unwrap(), "/api/notes/add/7");
    }

    #[test]
    fn test_missing_parent() {
        let err = VENDOR.list_path(None).unwrap_err();
        assert_eq!(
            err,
            ConsoleError::MissingParent {
                entity: "vendor".into()
            }
        );
        assert_eq!(PRODUCT.list_path(None).unwrap(), "/api/products");
    }

    #[test]
    fn test_paths_without_extras() {
        assert!(PRODUCT.toggle_path(&RecordId::Int(1)).is_err());
        assert!(PRODUCT.finalized_path(&RecordId::Int(1)).is_err());
        assert_eq!(PRODUCT.detail_path(&RecordId::Int(1)).unwrap(), "/api/products/1");
    }

    #[test]
    fn test_protected_fields_and_columns() {
        assert!(VENDOR.is_protected("vendor_id"));
        assert!(VENDOR.is_protected("product_id"));
        assert!(!VENDOR.is_protected("name"));

        let columns: Vec<_> = PRODUCT.table_columns().iter().map(|f| f.name).collect();
        assert_eq!(columns, vec!["name", "description"]);
        assert_eq!(PRODUCT.empty_text(), "No products found");
    }
}
