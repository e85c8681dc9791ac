use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::{FieldErrors, Identified, RecordId, Validate};

/// Producto del catálogo Fybeca (código de ítem + código de barras SAP)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cod_item: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cod_barra_sap: String,
}

impl Identified for Product {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("codItem", "Código de ítem", &self.cod_item);
        errors.require("codBarraSap", "Código de barra SAP", &self.cod_barra_sap);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_codes_are_required() {
        let errors = Product::default().validate().unwrap_err();
        assert!(errors.has("codItem"));
        assert!(errors.has("codBarraSap"));
    }
}
