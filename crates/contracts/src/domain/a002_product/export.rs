use chrono::NaiveDate;

use super::aggregate::Product;
use crate::shared::export::{date_stamp, Cell, Exportable};

impl Exportable for Product {
    fn export_headers() -> Vec<&'static str> {
        vec!["ID", "Código Item", "Código Barra SAP"]
    }

    fn export_row(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id.map(|id| id.to_string()).unwrap_or_default()),
            Cell::text(self.cod_item.clone()),
            Cell::text(self.cod_barra_sap.clone()),
        ]
    }
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("Productos_{}.xlsx", date_stamp(today))
}
