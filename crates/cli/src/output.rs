//! Terminal rendering for records and notifications

use colored::Colorize;
use procurex_controller::Notification;
use procurex_core::Record;
use procurex_schema::EntitySchema;

/// Table of the entity kinds in the catalog
pub fn entities_table(schemas: &[&EntitySchema]) -> String {
    let rows = schemas
        .iter()
        .map(|schema| {
            vec![
                schema.name.to_string(),
                schema.plural_label.to_string(),
                schema
                    .parent
                    .map(|parent| parent.kind.display_name().to_string())
                    .unwrap_or_else(|| "-".to_string()),
                schema.paths.list.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    render_table(&["NAME", "LABEL", "PARENT", "LIST PATH"], &rows)
}

/// Table of records using the schema's listed columns
pub fn records_table(schema: &EntitySchema, records: &[Record]) -> String {
    if records.is_empty() {
        return format!("{}\n", schema.empty_text());
    }

    let columns = schema.table_columns();
    let mut headers = vec!["ID".to_string()];
    headers.extend(columns.iter().map(|field| field.label.to_uppercase()));
    if let Some(toggle) = schema.toggle {
        headers.push(toggle.label.to_uppercase());
    }

    let rows = records
        .iter()
        .map(|record| {
            let mut row = vec![record.text(schema.id_field)];
            row.extend(columns.iter().map(|field| record.text(field.name)));
            if let Some(toggle) = schema.toggle {
                let flag = if record.flag(toggle.field) { "Yes" } else { "No" };
                row.push(flag.to_string());
            }
            row
        })
        .collect::<Vec<_>>();

    let headers = headers.iter().map(String::as_str).collect::<Vec<_>>();
    render_table(&headers, &rows)
}

/// One record as aligned label and value lines
pub fn record_details(schema: &EntitySchema, record: &Record) -> String {
    let width = schema
        .fields
        .iter()
        .map(|field| field.label.len())
        .max()
        .unwrap_or(0);

    schema
        .fields
        .iter()
        .map(|field| format!("{:<width$}  {}\n", field.label, record.text(field.name)))
        .collect()
}

pub fn print_notification(notification: Option<&Notification>) {
    let Some(notification) = notification else {
        return;
    };
    if notification.is_error() {
        eprintln!("{} {}", "error:".red().bold(), notification.message);
    } else {
        println!("{} {}", "ok:".green().bold(), notification.message);
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "ok:".green().bold(), message);
}

/// Left-aligned columns separated by two spaces
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        let padded = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let headers = headers.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();

    let mut out = line(&headers);
    out.push_str(&line(&rule));
    for row in rows {
        out.push_str(&line(row));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use procurex_schema::catalog::{PRODUCT, VENDOR};

    #[test]
    fn test_render_table_pads_columns() {
        let rows = vec![
            vec!["1".to_string(), "Widget".to_string()],
            vec!["22".to_string(), "Gadget Pro".to_string()],
        ];
        let table = render_table(&["ID", "NAME"], &rows);
        assert_eq!(
            table,
            "ID  NAME\n--  ----------\n1   Widget\n22  Gadget Pro\n"
        );
    }

    #[test]
    fn test_records_table_empty() {
        assert_eq!(records_table(&PRODUCT, &[]), format!("{}\n", PRODUCT.empty_text()));
    }

    #[test]
    fn test_records_table_includes_toggle_column() {
        let record = Record::new()
            .with("vendor_id", 3)
            .with("name", "Acme")
            .with("finalized", true);
        let table = records_table(&VENDOR, &[record]);
        let header = table.lines().next().unwrap_or_default();
        assert!(header.starts_with("ID"));
        assert!(header.ends_with("FINALIZED"));
        assert!(table.contains("Acme"));
        assert!(table.lines().last().unwrap_or_default().ends_with("Yes"));
    }

    #[test]
    fn test_record_details_lists_every_field() {
        let record = Record::new().with("name", "Widget").with("description", "Blue");
        let details = record_details(&PRODUCT, &record);
        assert_eq!(details.lines().count(), PRODUCT.fields.len());
        assert!(details.contains("Product Name"));
        assert!(details.contains("Blue"));
    }

    #[test]
    fn test_entities_table_lists_catalog() {
        let table = entities_table(procurex_schema::catalog());
        assert!(table.starts_with("NAME"));
        assert!(table.contains("vendor"));
        assert!(table.contains("/api/products"));
    }
}
