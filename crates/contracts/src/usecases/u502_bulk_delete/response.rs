use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::RecordId;

static BRACKET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("valid bracket regex"));

/// Blocked record as described by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedInfo {
    pub id: RecordId,
    #[serde(default)]
    pub cod_item: Option<String>,
    #[serde(default)]
    pub cod_barra_sap: Option<String>,
    #[serde(default)]
    pub cod_pdv: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReport {
    #[serde(default)]
    pub eliminados: Vec<RecordId>,
    #[serde(default)]
    pub bloqueados: Vec<RecordId>,
    #[serde(default)]
    pub bloqueados_info: Vec<BlockedInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply body of a delete endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteResponse {
    /// JSON with `eliminados` and/or `bloqueados` arrays
    Structured(DeleteReport),
    /// Anything else with content, usually a database error message
    Text(String),
    Unrecognized,
}

impl DeleteResponse {
    pub fn parse(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return DeleteResponse::Unrecognized;
        }
        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            let has_lists = value.get("eliminados").map_or(false, Value::is_array)
                || value.get("bloqueados").map_or(false, Value::is_array);
            if has_lists {
                if let Ok(report) = serde_json::from_value::<DeleteReport>(value) {
                    return DeleteResponse::Structured(report);
                }
            }
        }
        DeleteResponse::Text(trimmed.to_string())
    }
}

/// Integer ids inside the first `[...]` of a message, in order
pub fn bracketed_ids(text: &str) -> Vec<RecordId> {
    BRACKET_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|inner| {
            inner
                .as_str()
                .split(',')
                .filter_map(|s| s.trim().parse::<RecordId>().ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_ids_keep_order() {
        assert_eq!(
            bracketed_ids("No se pudo eliminar [12, 45, 7] por FOREIGN KEY"),
            vec![12, 45, 7]
        );
    }

    #[test]
    fn only_first_bracket_and_only_integers() {
        assert_eq!(bracketed_ids("ids [3, x, 4] y luego [9]"), vec![3, 4]);
        assert!(bracketed_ids("sin corchetes").is_empty());
    }

    #[test]
    fn json_needs_one_of_the_lists() {
        let parsed = DeleteResponse::parse(
            r#"{"eliminados":[1,2],"bloqueadosInfo":[{"id":3,"codItem":"I-3"}],"bloqueados":[3]}"#,
        );
        match parsed {
            DeleteResponse::Structured(report) => {
                assert_eq!(report.eliminados, vec![1, 2]);
                assert_eq!(report.bloqueados_info[0].cod_item.as_deref(), Some("I-3"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            DeleteResponse::parse(r#"{"message":"ok"}"#),
            DeleteResponse::Text(_)
        ));
        assert_eq!(DeleteResponse::parse("  "), DeleteResponse::Unrecognized);
    }
}
