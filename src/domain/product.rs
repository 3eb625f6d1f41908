//! Normalization of raw barcode-lookup responses into [`ProductRecord`]s.

use serde_json::Value;
use tracing::debug;

/// Product metadata projected from the first match of a lookup response.
///
/// Never persisted. Fields missing upstream stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(dead_code)]
pub struct ProductRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub category: Option<String>,
    pub weight: Option<String>,
    pub images: Vec<String>,
    /// The barcode as echoed by the provider.
    pub upc: Option<String>,
}

impl ProductRecord {
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Projects `items[0]` of a lookup response.
///
/// Returns `None` when `items` is missing, empty, or starts with `null`:
/// that is the provider saying "no match", not an error.
pub fn normalize(raw: &Value) -> Option<ProductRecord> {
    let first = raw.get("items")?.as_array()?.first()?;
    if first.is_null() {
        return None;
    }

    let record = ProductRecord {
        name: text(first, "title"),
        description: text(first, "description"),
        brand: text(first, "brand"),
        model: text(first, "model"),
        category: text(first, "category"),
        weight: text(first, "weight"),
        images: first
            .get("images")
            .and_then(Value::as_array)
            .map(|images| images.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect())
            .unwrap_or_default(),
        upc: text(first, "upc"),
    };

    debug!(?record, "Normalized lookup response");
    Some(record)
}

// Strings verbatim; other scalars keep their JSON spelling.
fn text(entry: &Value, field: &str) -> Option<String> {
    match entry.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
