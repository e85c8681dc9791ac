use chrono::NaiveDate;

use super::aggregate::Client;
use crate::shared::export::{date_stamp, Cell, Exportable};

impl Exportable for Client {
    fn export_headers() -> Vec<&'static str> {
        vec!["ID", "Código Cliente", "Nombre Cliente", "Ciudad", "Código Proveedor"]
    }

    fn export_row(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id.map(|id| id.to_string()).unwrap_or_default()),
            Cell::text(self.cod_cliente.clone()),
            Cell::text(self.nombre_cliente.clone()),
            Cell::text(self.ciudad.clone()),
            Cell::text(self.codigo_proveedor.clone()),
        ]
    }
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("Clientes_{}.xlsx", date_stamp(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_table;

    #[test]
    fn one_row_per_client() {
        let clients = vec![
            Client { id: Some(3), cod_cliente: "MZCL-000014".into(), nombre_cliente: "FYBECA".into(), ..Client::default() },
            Client::with_code("MZCL-000009"),
        ];
        let table = build_table("Clientes", &clients);
        assert_eq!(table.len(), 2);
        let grid = table.to_grid();
        assert_eq!(grid[1][0], "3");
        assert_eq!(grid[2][1], "MZCL-000009");
        assert_eq!(grid[2][0], "");
    }

    #[test]
    fn filename_carries_date() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(export_filename(day), "Clientes_9-1-2025.xlsx");
    }
}
