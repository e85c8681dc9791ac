use serde_json::{Map, Value};

use super::text_summary::parse_text_summary;
use super::warnings::{dedup, WarningExtractor};

/// What an upload endpoint answered, by content type
#[derive(Debug, Clone, PartialEq)]
pub enum UploadResponse {
    /// Processed workbook returned for download; `cells` holds its text cells
    Spreadsheet { file_name: String, cells: Vec<String> },
    Json(Value),
    Text(String),
    Unrecognized { content_type: String },
}

/// One failed or unmapped code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeIssue {
    pub codigo: String,
    pub motivo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadCounts {
    pub insertadas: u64,
    pub actualizadas: u64,
    pub ignoradas: u64,
    pub con_error: u64,
    /// Rows the server reports as processed
    pub total: u64,
    pub filas_leidas: Option<u64>,
}

/// Everything the result panel and the incident report show
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadOutcome {
    pub counts: UploadCounts,
    pub errors: Vec<CodeIssue>,
    pub successes: Vec<String>,
    pub warnings: Vec<String>,
    /// Set when the server sent back a workbook
    pub download: Option<String>,
}

const DEFAULT_REASON: &str = "Motivo no especificado";

const INSERTED_KEYS: [&str; 6] = ["filasInsertadas", "insertadas", "inserted", "inserts", "created", "insertados"];
const UPDATED_KEYS: [&str; 6] = ["filasActualizadas", "actualizadas", "updated", "updates", "upserts", "actualizados"];
const SKIPPED_KEYS: [&str; 5] = ["filasIgnoradas", "ignoradas", "skipped", "omitidas", "omitidos"];
const FAILED_KEYS: [&str; 5] = ["filasConError", "errores", "withErrors", "failed", "fallidas"];
const TOTAL_KEYS: [&str; 8] = [
    "total",
    "filas",
    "totalFilas",
    "rows",
    "processed",
    "leidas",
    "leyadas",
    "filasLeidas",
];

fn number(value: &Value) -> Option<u64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then(|| n.max(0.0).round() as u64)
}

fn first_number(src: &Value, keys: &[&str]) -> u64 {
    keys.iter()
        .find_map(|k| src.get(*k).and_then(number))
        .unwrap_or(0)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| obj.get(*k).and_then(scalar_text))
}

fn to_issue(item: &Value, fallback: &str) -> CodeIssue {
    match item {
        Value::Object(obj) => CodeIssue {
            codigo: first_text(obj, &["codigo", "cod", "code", "id"]).unwrap_or_else(|| "N/D".to_string()),
            motivo: first_text(obj, &["motivo", "error", "mensaje"]).unwrap_or_else(|| fallback.to_string()),
        },
        other => CodeIssue {
            codigo: scalar_text(other).unwrap_or_else(|| "N/D".to_string()),
            motivo: fallback.to_string(),
        },
    }
}

/// Failed codes, from whichever list the endpoint family uses
pub fn extract_errors(result: &Value) -> Vec<CodeIssue> {
    let lists = [
        ("codigosNoEncontrados", "No se pudo mapear el código"),
        ("noEncontrados", "No encontrado"),
        ("errores", DEFAULT_REASON),
        ("itemsFallidos", DEFAULT_REASON),
    ];
    for (field, fallback) in lists {
        if let Some(Value::Array(items)) = result.get(field) {
            return items.iter().map(|x| to_issue(x, fallback)).collect();
        }
    }
    if let Value::Array(items) = result {
        return items.iter().map(|x| to_issue(x, DEFAULT_REASON)).collect();
    }
    if let Some(Value::Array(codes)) = result.get("lista") {
        let motivo = result
            .get("motivo")
            .and_then(scalar_text)
            .unwrap_or_else(|| DEFAULT_REASON.to_string());
        return codes
            .iter()
            .filter_map(scalar_text)
            .map(|codigo| CodeIssue {
                codigo,
                motivo: motivo.clone(),
            })
            .collect();
    }
    Vec::new()
}

pub fn extract_successes(result: &Value) -> Vec<String> {
    for field in ["codigosExitosos", "exitos", "itemsProcesados"] {
        if let Some(Value::Array(items)) = result.get(field) {
            return items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(obj) => first_text(obj, &["codigo", "cod", "code", "id"]),
                    other => scalar_text(other),
                })
                .collect();
        }
    }
    Vec::new()
}

pub fn extract_counts(result: &Value) -> UploadCounts {
    let src = ["resumen", "summary", "stats"]
        .iter()
        .find_map(|k| result.get(*k).filter(|v| !v.is_null()))
        .unwrap_or(result);

    let insertadas = first_number(src, &INSERTED_KEYS);
    let actualizadas = first_number(src, &UPDATED_KEYS);
    let ignoradas = first_number(src, &SKIPPED_KEYS);
    let con_error = first_number(src, &FAILED_KEYS);
    let mut total = first_number(src, &TOTAL_KEYS);
    if total == 0 {
        total = insertadas + actualizadas + ignoradas + con_error;
    }
    let filas_leidas = src
        .get("filasLeidas")
        .and_then(number)
        .or_else(|| result.get("filasLeidas").and_then(number))
        .or(Some(total));

    UploadCounts {
        insertadas,
        actualizadas,
        ignoradas,
        con_error,
        total,
        filas_leidas,
    }
}

fn json_like(text: &str) -> Option<Value> {
    let t = text.trim_start();
    if t.starts_with('{') || t.starts_with('[') {
        serde_json::from_str(t).ok()
    } else {
        None
    }
}

impl UploadOutcome {
    /// Normalizes any reply shape. `header` reads response headers for the
    /// warning channel.
    pub fn from_response(
        response: &UploadResponse,
        extractor: &dyn WarningExtractor,
        header: &dyn Fn(&str) -> Option<String>,
    ) -> Self {
        let mut warnings = extractor.from_headers(header);
        let mut outcome = match response {
            UploadResponse::Json(value) => Self::from_json(value, extractor, &mut warnings),
            UploadResponse::Text(text) => match json_like(text) {
                Some(value) => Self::from_json(&value, extractor, &mut warnings),
                None => {
                    warnings.extend(extractor.from_text(text));
                    Self {
                        counts: parse_text_summary(text),
                        ..Self::default()
                    }
                }
            },
            UploadResponse::Spreadsheet { file_name, cells } => {
                for cell in cells {
                    warnings.extend(extractor.from_text(cell));
                }
                Self {
                    download: Some(file_name.clone()),
                    ..Self::default()
                }
            }
            UploadResponse::Unrecognized { .. } => Self::default(),
        };
        outcome.warnings = dedup(warnings);
        outcome
    }

    fn from_json(value: &Value, extractor: &dyn WarningExtractor, warnings: &mut Vec<String>) -> Self {
        warnings.extend(extractor.from_json(value));
        Self {
            counts: extract_counts(value),
            errors: extract_errors(value),
            successes: extract_successes(value),
            ..Self::default()
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty() || self.counts.con_error > 0
    }

    /// Detail line of the "Archivo procesado" toast
    pub fn summary_line(&self) -> String {
        let c = &self.counts;
        format!(
            "Insertadas: {} · Actualizadas: {} · Ignoradas: {} · Con error: {}",
            c.insertadas, c.actualizadas, c.ignoradas, c.con_error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_spreadsheet_import::warnings::FilaLineExtractor;
    use serde_json::json;

    fn no_headers(_: &str) -> Option<String> {
        None
    }

    fn outcome(response: UploadResponse) -> UploadOutcome {
        UploadOutcome::from_response(&response, &FilaLineExtractor, &no_headers)
    }

    #[test]
    fn not_found_codes_win_over_other_lists() {
        let value = json!({
            "codigosNoEncontrados": ["A1", {"cod": "B2", "motivo": "Sin SAP"}],
            "errores": [{"codigo": "Z"}],
        });
        assert_eq!(
            extract_errors(&value),
            vec![
                CodeIssue { codigo: "A1".into(), motivo: "No se pudo mapear el código".into() },
                CodeIssue { codigo: "B2".into(), motivo: "Sin SAP".into() },
            ]
        );
    }

    #[test]
    fn lista_with_shared_reason() {
        let value = json!({"lista": [7, "X"], "motivo": "Duplicado"});
        let errors = extract_errors(&value);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].codigo, "7");
        assert!(errors.iter().all(|e| e.motivo == "Duplicado"));
    }

    #[test]
    fn root_array_and_missing_code() {
        let errors = extract_errors(&json!([{"error": "vacío"}]));
        assert_eq!(errors[0], CodeIssue { codigo: "N/D".into(), motivo: "vacío".into() });
    }

    #[test]
    fn counts_prefer_nested_summary_and_sum_when_total_missing() {
        let value = json!({
            "resumen": {"inserted": 5, "actualizadas": "3", "skipped": 1, "failed": 1},
            "total": 99
        });
        let counts = extract_counts(&value);
        assert_eq!(counts.insertadas, 5);
        assert_eq!(counts.actualizadas, 3);
        assert_eq!(counts.total, 10);
        assert_eq!(counts.filas_leidas, Some(10));
    }

    #[test]
    fn root_level_counts() {
        let counts = extract_counts(&json!({"insertados": 4, "total": 6, "filasLeidas": 8}));
        assert_eq!(counts.total, 6);
        assert_eq!(counts.filas_leidas, Some(8));
    }

    #[test]
    fn successes_accept_strings_and_objects() {
        let value = json!({"codigosExitosos": ["A", {"codigo": "B"}]});
        assert_eq!(extract_successes(&value), vec!["A", "B"]);
    }

    #[test]
    fn text_reply_uses_summary_and_scraped_warnings() {
        let out = outcome(UploadResponse::Text(
            "[RESUMEN]\ninsertados=2\n----\nFila 5: marca vacía".into(),
        ));
        assert_eq!(out.counts.insertadas, 2);
        assert_eq!(out.warnings, vec!["Fila 5: marca vacía"]);
    }

    #[test]
    fn json_sent_as_text_is_parsed() {
        let out = outcome(UploadResponse::Text(r#"{"noEncontrados":["C9"]}"#.into()));
        assert_eq!(out.errors[0].motivo, "No encontrado");
        assert!(out.has_failures());
    }

    #[test]
    fn workbook_reply_records_download_and_cell_warnings() {
        let out = outcome(UploadResponse::Spreadsheet {
            file_name: "procesado.xlsx".into(),
            cells: vec!["Fila 2: sin PDV".into(), "ok".into(), "Fila 2: sin PDV".into()],
        });
        assert_eq!(out.download.as_deref(), Some("procesado.xlsx"));
        assert_eq!(out.warnings, vec!["Fila 2: sin PDV"]);
    }

    #[test]
    fn unrecognized_reply_is_empty() {
        let out = outcome(UploadResponse::Unrecognized { content_type: "image/png".into() });
        assert_eq!(out, UploadOutcome::default());
    }
}
