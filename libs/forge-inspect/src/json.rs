//! JSON table viewer
//!
//! An array of objects becomes a table: columns are the union of keys in
//! first-seen order, cells are flat strings (nested values rendered
//! compactly). Anything else is shown as a pretty-printed tree. Tables
//! export to CSV.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InspectError, Result};

/// Rendered view of a JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JsonView {
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Tree {
        pretty: String,
    },
}

/// Parse a JSON document into a table or tree view
///
/// # Examples
/// ```
/// use forge_inspect::json::{view, JsonView};
///
/// let v = view(r#"[{"a": 1, "b": 2}, {"a": 3, "c": 4}]"#).unwrap();
/// let JsonView::Table { columns, rows } = v else { panic!() };
/// assert_eq!(columns, ["a", "b", "c"]);
/// assert_eq!(rows[1], ["3", "", "4"]);
/// ```
pub fn view(input: &str) -> Result<JsonView> {
    let value: Value = serde_json::from_str(input)?;

    if let Value::Array(items) = &value {
        if !items.is_empty() && items.iter().all(Value::is_object) {
            return Ok(table_view(items));
        }
    }

    Ok(JsonView::Tree {
        pretty: serde_json::to_string_pretty(&value)?,
    })
}

fn table_view(items: &[Value]) -> JsonView {
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    let rows = items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|column| item.get(column).map_or_else(String::new, cell))
                .collect()
        })
        .collect();

    JsonView::Table { columns, rows }
}

/// Flatten one cell value to display text
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Export a table view to CSV
pub fn to_csv(columns: &[String], rows: &[Vec<String>]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(columns)
        .map_err(|e| InspectError::Csv(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| InspectError::Csv(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| InspectError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| InspectError::Csv(e.to_string()))
}
