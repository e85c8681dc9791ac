//! Failures of calls to the sell-out REST backend, mapped to the messages
//! shown in toasts.

use thiserror::Error;

pub const TIMEOUT_MESSAGE: &str =
    "Tiempo de carga excedido. Puede que el servidor aún esté procesando.";
pub const NETWORK_MESSAGE: &str = "No se pudo conectar con el servidor. Verifica la conexión.";
pub const CANCELLED_MESSAGE: &str = "Carga cancelada por el usuario";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    #[error("{}", NETWORK_MESSAGE)]
    Network(String),

    #[error("{}", CANCELLED_MESSAGE)]
    Cancelled,

    #[error("{}", http_message(*status, detail.as_deref(), correlation_id.as_deref()))]
    Http {
        status: u16,
        detail: Option<String>,
        correlation_id: Option<String>,
    },

    #[error("Respuesta inesperada del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn http(status: u16, body: &str, correlation_id: Option<String>) -> Self {
        ApiError::Http {
            status,
            detail: extract_detail(body),
            correlation_id: correlation_id.filter(|c| !c.trim().is_empty()),
        }
    }
}

fn status_message(status: u16) -> String {
    match status {
        404 => "No encontrado (404): recurso o endpoint inexistente.".to_string(),
        422 => "Datos inválidos (422): el archivo contiene filas o formatos no válidos.".to_string(),
        s if s >= 500 => format!("Error del servidor ({})", s),
        s => format!("Error HTTP ({})", s),
    }
}

fn http_message(status: u16, detail: Option<&str>, correlation_id: Option<&str>) -> String {
    let mut parts = vec![status_message(status)];
    if let Some(d) = detail {
        parts.push(format!("Detalle: {}", d));
    }
    if let Some(c) = correlation_id {
        parts.push(format!("Correlation-Id: {}", c));
    }
    parts.join(" | ")
}

/// Human detail out of an error body: JSON `message`/`mensaje`/`error`/`detail`,
/// otherwise the trimmed text itself
pub fn extract_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "mensaje", "error", "detail"] {
            match map.get(key) {
                Some(serde_json::Value::String(s)) if !s.trim().is_empty() => {
                    return Some(s.trim().to_string())
                }
                Some(serde_json::Value::Null) | None => continue,
                Some(other) if !other.is_string() => return Some(other.to_string()),
                _ => continue,
            }
        }
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_message_joins_detail_and_correlation() {
        let err = ApiError::http(500, r#"{"message":"Fila 3 inválida"}"#, Some("abc-1".into()));
        assert_eq!(
            err.to_string(),
            "Error del servidor (500) | Detalle: Fila 3 inválida | Correlation-Id: abc-1"
        );
    }

    #[test]
    fn known_statuses_have_fixed_text() {
        assert_eq!(
            ApiError::http(404, "", None).to_string(),
            "No encontrado (404): recurso o endpoint inexistente."
        );
        assert!(ApiError::http(422, "  ", None)
            .to_string()
            .starts_with("Datos inválidos (422)"));
        assert_eq!(ApiError::http(409, "", None).to_string(), "Error HTTP (409)");
    }

    #[test]
    fn plain_text_body_is_the_detail() {
        assert_eq!(extract_detail("  boom \n").as_deref(), Some("boom"));
        assert_eq!(
            extract_detail(r#"{"mensaje":"sin permisos"}"#).as_deref(),
            Some("sin permisos")
        );
        assert_eq!(extract_detail(r#"{"other":1}"#), None);
    }

    #[test]
    fn transport_failures_use_fixed_messages() {
        assert_eq!(ApiError::Timeout.to_string(), TIMEOUT_MESSAGE);
        assert_eq!(ApiError::Network("x".into()).to_string(), NETWORK_MESSAGE);
        assert_eq!(ApiError::Cancelled.to_string(), CANCELLED_MESSAGE);
    }
}
