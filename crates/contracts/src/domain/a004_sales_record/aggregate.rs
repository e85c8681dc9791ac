use serde::{Deserialize, Serialize};

use crate::domain::a001_client::aggregate::Client;
use crate::domain::a002_product::aggregate::Product;
use crate::domain::common::serde_helpers::{lenient_i32, null_as_default};
use crate::domain::common::{FieldErrors, Identified, RecordId, Validate};

/// Registro de venta / stock reportado por una cadena (sell-out)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_i32")]
    pub anio: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub mes: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub dia: Option<i32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub marca: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub venta_dolares: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub venta_unidad: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre_producto: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub codigo_sap: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cod_barra: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cod_pdv: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descripcion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pdv: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_dolares: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_unidades: f64,

    /// Transient on the server side, filled from the PDV master
    #[serde(default, deserialize_with = "null_as_default")]
    pub ciudad: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidades_diarias: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliente: Option<Client>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producto: Option<Product>,
}

impl SalesRecord {
    pub fn client_code(&self) -> &str {
        self.cliente
            .as_ref()
            .map(|c| c.cod_cliente.trim())
            .unwrap_or("")
    }

    pub fn assign_client(&mut self, code: &str) {
        let mut client = self.cliente.take().unwrap_or_default();
        client.cod_cliente = code.to_string();
        self.cliente = Some(client);
    }

    /// Takes the city from the embedded client when the row has none
    pub fn with_client_city(mut self) -> Self {
        if let Some(city) = self.cliente.as_ref().map(|c| c.ciudad.trim()).filter(|c| !c.is_empty()) {
            self.ciudad = city.to_string();
        }
        self
    }

    /// PDV name; older imports only fill `descripcion`
    pub fn pdv_name(&self) -> &str {
        if self.pdv.trim().is_empty() {
            &self.descripcion
        } else {
            &self.pdv
        }
    }
}

impl Identified for SalesRecord {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Validate for SalesRecord {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_some("anio", "Año", self.anio);
        errors.require_some("mes", "Mes", self.mes);
        if let Some(m) = self.mes {
            if !(1..=12).contains(&m) {
                errors.push("mes", "Mes debe estar entre 1 y 12");
            }
        }
        errors.require("codPdv", "Código PDV", &self.cod_pdv);
        errors.require("codBarra", "Código de barra", &self.cod_barra);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_payload_with_nested_objects() {
        let json = r#"{
            "id": 501, "anio": 2024, "mes": "3", "dia": 15,
            "marca": "ESSENCE", "ventaDolares": 12.5, "ventaUnidad": 2,
            "nombreProducto": null, "codBarra": "4059729000000",
            "codPdv": "F045", "pdv": "FYBECA CUMBAYA",
            "stockDolares": null, "stockUnidades": 10,
            "cliente": {"id": 1, "codCliente": "MZCL-000014", "nombreCliente": "FYBECA"},
            "producto": {"id": 9, "codItem": "100", "codBarraSap": "4059729000000"}
        }"#;
        let r: SalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.mes, Some(3));
        assert_eq!(r.stock_dolares, 0.0);
        assert_eq!(r.nombre_producto, "");
        assert_eq!(r.client_code(), "MZCL-000014");
        assert_eq!(r.producto.as_ref().map(|p| p.cod_item.as_str()), Some("100"));
    }

    #[test]
    fn month_out_of_range_is_invalid() {
        let r = SalesRecord {
            anio: Some(2024),
            mes: Some(13),
            cod_pdv: "F1".into(),
            cod_barra: "B".into(),
            ..SalesRecord::default()
        };
        let errors = r.validate().unwrap_err();
        assert!(errors.has("mes"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn pdv_name_falls_back_to_description() {
        let r = SalesRecord {
            descripcion: "DEPRATI MALL".into(),
            ..SalesRecord::default()
        };
        assert_eq!(r.pdv_name(), "DEPRATI MALL");
    }

    #[test]
    fn client_city_wins_when_present() {
        let mut client = Client::with_code("MZCL-000014");
        client.ciudad = "QUITO".into();
        let r = SalesRecord { ciudad: "".into(), cliente: Some(client), ..SalesRecord::default() }.with_client_city();
        assert_eq!(r.ciudad, "QUITO");

        let bare = SalesRecord { ciudad: "GYE".into(), ..SalesRecord::default() }.with_client_city();
        assert_eq!(bare.ciudad, "GYE");
    }
}
