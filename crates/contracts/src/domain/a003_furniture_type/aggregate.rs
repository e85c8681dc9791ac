use serde::{Deserialize, Serialize};

use crate::domain::a001_client::aggregate::Client;
use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::{FieldErrors, Identified, RecordId, Validate};

/// Tipo de mueble de un punto de venta (clasificación Essence / Catrice)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cod_pdv: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_pdv: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ciudad: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub marca: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tipo_mueble_essence: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tipo_mueble_catrice: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliente: Option<Client>,
}

impl FurnitureType {
    pub fn client_code(&self) -> &str {
        self.cliente
            .as_ref()
            .map(|c| c.cod_cliente.trim())
            .unwrap_or("")
    }

    /// Pins the embedded client reference before create/update
    pub fn assign_client(&mut self, code: &str) {
        let mut client = self.cliente.take().unwrap_or_default();
        client.cod_cliente = code.to_string();
        self.cliente = Some(client);
    }
}

impl Identified for FurnitureType {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Validate for FurnitureType {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("codPdv", "Código PDV", &self.cod_pdv);
        errors.require("nombrePdv", "Nombre PDV", &self.nombre_pdv);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_client_keeps_other_client_fields() {
        let mut ft = FurnitureType {
            cliente: Some(Client {
                nombre_cliente: "FYBECA".into(),
                ..Client::default()
            }),
            ..FurnitureType::default()
        };
        ft.assign_client("MZCL-000014");
        let client = ft.cliente.as_ref().unwrap();
        assert_eq!(client.cod_cliente, "MZCL-000014");
        assert_eq!(client.nombre_cliente, "FYBECA");
        assert_eq!(ft.client_code(), "MZCL-000014");
    }
}
