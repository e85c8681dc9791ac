//! Free-text search over loaded records.
//!
//! A record matches when the lowercased query is contained in any scalar
//! field or in any scalar field of a directly nested object. Deeper levels
//! and arrays are not searched.

use serde::Serialize;
use serde_json::Value;

/// Normalized query; `None` when there is nothing to search for
pub fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.to_lowercase()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `needle` must already be lowercased
pub fn value_matches(value: &Value, needle: &str) -> bool {
    let Value::Object(fields) = value else {
        return scalar_text(value).is_some_and(|t| t.contains(needle));
    };

    fields.values().any(|field| match field {
        Value::Object(nested) => nested
            .values()
            .filter_map(scalar_text)
            .any(|t| t.contains(needle)),
        other => scalar_text(other).is_some_and(|t| t.contains(needle)),
    })
}

pub fn record_matches<T: Serialize>(record: &T, needle: &str) -> bool {
    serde_json::to_value(record)
        .map(|v| value_matches(&v, needle))
        .unwrap_or(false)
}

/// Keeps the records matching `query`; an empty query keeps everything
pub fn search_records<T: Serialize + Clone>(records: &[T], query: &str) -> Vec<T> {
    match normalize_query(query) {
        None => records.to_vec(),
        Some(needle) => records
            .iter()
            .filter(|r| record_matches(*r, &needle))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_top_level_and_nested_scalars() {
        let row = json!({
            "codPdv": "PDV-77",
            "anio": 2024,
            "cliente": { "nombreCliente": "Fybeca Quito" },
            "deep": { "inner": { "x": "hidden" } }
        });
        assert!(value_matches(&row, "pdv-77"));
        assert!(value_matches(&row, "202"));
        assert!(value_matches(&row, "quito"));
        assert!(!value_matches(&row, "hidden"));
    }

    #[test]
    fn arrays_are_not_searched() {
        let row = json!({ "tags": ["alpha"] });
        assert!(!value_matches(&row, "alpha"));
    }

    #[test]
    fn blank_query_keeps_all_records() {
        let rows = vec![json!({"a": "x"}), json!({"a": "y"})];
        assert_eq!(search_records(&rows, "   ").len(), 2);
        assert_eq!(search_records(&rows, "Y").len(), 1);
    }
}
