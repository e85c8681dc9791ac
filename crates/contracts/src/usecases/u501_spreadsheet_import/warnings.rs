//! Server warnings scraped from upload replies.
//!
//! The backend has no structured warning channel yet; it reports problem rows
//! as free text ("Fila 12: ...") in bodies, headers or result workbooks.
//! Screens only talk to [`WarningExtractor`], so a structured source can
//! replace the scraping without touching them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const WARNING_HEADERS: [&str; 4] = [
    "X-Process-Warnings",
    "X-Warnings",
    "X-Server-Warn",
    "X-Error-Message",
];

const WARNING_FIELDS: [&str; 4] = ["warnings", "mensajes", "logs", "serverLogs"];

static ROW_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Fila\s+\d+\s*:").expect("valid row regex"));
static WARN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)WARN").expect("valid warn regex"));
static NOT_FOUND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)Fila\s+(\d+).*?(no se encontraron|no encontrado|no existe).*?(c[oó]digo)\s*:?\s*([\w-]+)",
    )
    .expect("valid not-found regex")
});
static HEADER_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n|\|\|").expect("valid split regex"));

pub trait WarningExtractor {
    fn from_text(&self, text: &str) -> Vec<String>;

    /// `header` looks a response header up by name
    fn from_headers(&self, header: &dyn Fn(&str) -> Option<String>) -> Vec<String>;

    fn from_json(&self, value: &Value) -> Vec<String>;
}

/// Line-based scraper for `Fila N:` / `WARN` messages
#[derive(Debug, Clone, Copy, Default)]
pub struct FilaLineExtractor;

impl FilaLineExtractor {
    pub fn is_warning_line(line: &str) -> bool {
        ROW_PREFIX_RE.is_match(line) || WARN_RE.is_match(line) || NOT_FOUND_RE.is_match(line)
    }
}

impl WarningExtractor for FilaLineExtractor {
    fn from_text(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && Self::is_warning_line(l))
            .map(str::to_string)
            .collect()
    }

    fn from_headers(&self, header: &dyn Fn(&str) -> Option<String>) -> Vec<String> {
        WARNING_HEADERS
            .iter()
            .filter_map(|name| header(*name))
            .flat_map(|value| {
                HEADER_SPLIT_RE
                    .split(&value)
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn from_json(&self, value: &Value) -> Vec<String> {
        let mut out = Vec::new();
        for field in WARNING_FIELDS {
            match value.get(field) {
                Some(Value::Array(items)) => out.extend(items.iter().filter_map(|item| match item {
                    Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                    Value::Null | Value::String(_) => None,
                    other => Some(other.to_string()),
                })),
                Some(Value::String(s)) => out.extend(self.from_text(s)),
                _ => {}
            }
        }
        out
    }
}

/// Keeps the first occurrence of each line
pub fn dedup(lines: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    lines.into_iter().filter(|l| seen.insert(l.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_row_and_warn_lines() {
        let text = "Inicio\nFila 4: código vacío\n  warn: marca desconocida\nFila 9 producto no encontrado con código 7701-A\nFin";
        let lines = FilaLineExtractor.from_text(text);
        assert_eq!(
            lines,
            vec![
                "Fila 4: código vacío",
                "warn: marca desconocida",
                "Fila 9 producto no encontrado con código 7701-A"
            ]
        );
    }

    #[test]
    fn headers_split_on_newline_and_double_pipe() {
        let lookup = |name: &str| match name {
            "X-Warnings" => Some("Fila 1: a || Fila 2: b".to_string()),
            "X-Error-Message" => Some("falló\r\n".to_string()),
            _ => None,
        };
        assert_eq!(
            FilaLineExtractor.from_headers(&lookup),
            vec!["Fila 1: a", "Fila 2: b", "falló"]
        );
    }

    #[test]
    fn json_fields_are_collected() {
        let value = serde_json::json!({
            "warnings": ["uno", ""],
            "logs": "Fila 3: sin stock\nok",
        });
        assert_eq!(FilaLineExtractor.from_json(&value), vec!["uno", "Fila 3: sin stock"]);
    }

    #[test]
    fn dedup_keeps_order() {
        let lines = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(dedup(lines), vec!["b", "a"]);
    }
}
