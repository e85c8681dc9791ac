use chrono::NaiveDate;

use super::aggregate::FurnitureType;
use crate::enums::retail_chain::RetailChain;
use crate::shared::export::{date_stamp, Cell, Exportable};

impl Exportable for FurnitureType {
    fn export_headers() -> Vec<&'static str> {
        vec![
            "Código Cliente",
            "Cliente",
            "Código PDV",
            "Nombre PDV",
            "Ciudad",
            "Marca",
            "Tipo Mueble Essence",
            "Tipo Mueble Catrice",
        ]
    }

    fn export_row(&self) -> Vec<Cell> {
        let client_name = self
            .cliente
            .as_ref()
            .map(|c| c.nombre_cliente.clone())
            .unwrap_or_default();
        vec![
            Cell::text(self.client_code().to_string()),
            Cell::text(client_name),
            Cell::text(self.cod_pdv.clone()),
            Cell::text(self.nombre_pdv.clone()),
            Cell::text(self.ciudad.clone()),
            Cell::text(self.marca.clone()),
            Cell::text(self.tipo_mueble_essence.clone()),
            Cell::text(self.tipo_mueble_catrice.clone()),
        ]
    }
}

/// `Tipos_Mueble_{Chain}_{d-m-yyyy}.xlsx`
pub fn export_filename(chain: RetailChain, today: NaiveDate) -> String {
    format!(
        "Tipos_Mueble_{}_{}.xlsx",
        chain.display_name().replace(' ', ""),
        date_stamp(today)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::aggregate::Client;
    use crate::shared::export::build_table;

    #[test]
    fn row_uses_embedded_client() {
        let ft = FurnitureType {
            cod_pdv: "P01".into(),
            tipo_mueble_essence: "GONDOLA".into(),
            cliente: Some(Client {
                cod_cliente: "MZCL-000009".into(),
                nombre_cliente: "DEPRATI".into(),
                ..Client::default()
            }),
            ..FurnitureType::default()
        };
        let grid = build_table("Tipos", &[ft]).to_grid();
        assert_eq!(grid[0].len(), 8);
        assert_eq!(grid[1][0], "MZCL-000009");
        assert_eq!(grid[1][1], "DEPRATI");
        assert_eq!(grid[1][6], "GONDOLA");
        assert_eq!(grid[1][7], "");
    }

    #[test]
    fn filename_per_chain() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(export_filename(RetailChain::Deprati, day), "Tipos_Mueble_Deprati_31-12-2024.xlsx");
    }
}
