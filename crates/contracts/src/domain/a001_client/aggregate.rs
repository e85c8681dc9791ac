use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::{FieldErrors, Identified, RecordId, Validate};

/// Cliente (cadena minorista o distribuidor que reporta sell-out)
///
/// Also embedded read-only in sales records and furniture types as `cliente`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Business key, unique per client
    #[serde(default, deserialize_with = "null_as_default")]
    pub cod_cliente: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_cliente: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ciudad: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub codigo_proveedor: String,
}

impl Client {
    /// Reference used when a screen is pinned to one client code
    pub fn with_code(code: &str) -> Self {
        Self {
            cod_cliente: code.to_string(),
            ..Self::default()
        }
    }

    /// Exact, case-insensitive match on the business key
    pub fn has_code(&self, code: &str) -> bool {
        self.cod_cliente.trim().eq_ignore_ascii_case(code.trim())
    }
}

impl Identified for Client {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Validate for Client {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("codCliente", "Código de cliente", &self.cod_cliente);
        errors.require("nombreCliente", "Nombre de cliente", &self.nombre_cliente);
        errors.into_result()
    }
}

/// Exact lookup by client code over the loaded list
pub fn find_by_code<'a>(clients: &'a [Client], code: &str) -> Option<&'a Client> {
    if code.trim().is_empty() {
        return None;
    }
    clients.iter().find(|c| c.has_code(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_code_fails_validation() {
        let client = Client {
            nombre_cliente: "Fybeca".into(),
            ..Client::default()
        };
        let errors = client.validate().unwrap_err();
        assert!(errors.has("codCliente"));
        assert!(!errors.has("nombreCliente"));
    }

    #[test]
    fn deserializes_nulls_from_server() {
        let json = r#"{"id":7,"codCliente":"MZCL-000014","nombreCliente":"FYBECA","ciudad":null}"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.id, Some(7));
        assert_eq!(client.ciudad, "");
        assert_eq!(client.codigo_proveedor, "");
    }

    #[test]
    fn new_client_serializes_without_id() {
        let json = serde_json::to_value(Client::with_code("X1")).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["codCliente"], "X1");
    }

    #[test]
    fn find_by_code_ignores_case_and_spaces() {
        let clients = vec![
            Client { id: Some(1), cod_cliente: "MZCL-000009".into(), ..Client::default() },
            Client { id: Some(2), cod_cliente: "MZCL-000014".into(), ..Client::default() },
        ];
        assert_eq!(find_by_code(&clients, " mzcl-000014 ").and_then(|c| c.id), Some(2));
        assert!(find_by_code(&clients, "MZCL-0000").is_none());
        assert!(find_by_code(&clients, "").is_none());
    }
}
