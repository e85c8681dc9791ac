use chrono::NaiveDate;

use super::aggregate::SalesRecord;
use super::filter::SalesFilter;
use crate::enums::retail_chain::RetailChain;
use crate::shared::calendar::month_label;
use crate::shared::export::{date_stamp, Cell, Exportable};

impl Exportable for SalesRecord {
    fn export_headers() -> Vec<&'static str> {
        vec![
            "Año",
            "Mes",
            "Día",
            "Marca",
            "Código Barra",
            "Código SAP",
            "Producto",
            "Código PDV",
            "PDV",
            "Ciudad",
            "Stock ($)",
            "Stock (U)",
            "Venta ($)",
            "Venta (U)",
        ]
    }

    fn export_row(&self) -> Vec<Cell> {
        let city = if self.ciudad.trim().is_empty() {
            self.cliente
                .as_ref()
                .map(|c| c.ciudad.clone())
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| "N/A".to_string())
        } else {
            self.ciudad.clone()
        };

        vec![
            Cell::int(self.anio),
            Cell::text(self.mes.map(|m| month_label(m as u32)).unwrap_or_default()),
            Cell::int(self.dia),
            Cell::text(self.marca.clone()),
            Cell::text(self.cod_barra.clone()),
            Cell::text(self.codigo_sap.clone()),
            Cell::text(self.nombre_producto.clone()),
            Cell::text(self.cod_pdv.clone()),
            Cell::text(self.pdv_name().to_string()),
            Cell::text(city),
            Cell::currency(self.stock_dolares),
            Cell::units(self.stock_unidades),
            Cell::currency(self.venta_dolares),
            Cell::units(self.venta_unidad),
        ]
    }
}

/// `Reporte_Ventas_{Chain}_{año_}{Mes_}{marca_}{d-m-yyyy}.xlsx`
pub fn export_filename(chain: RetailChain, applied: Option<&SalesFilter>, today: NaiveDate) -> String {
    let mut name = format!("Reporte_Ventas_{}_", chain.display_name().replace(' ', ""));
    if let Some(filter) = applied {
        if let Some(y) = filter.year {
            name.push_str(&format!("{}_", y));
        }
        if let Some(m) = filter.month {
            name.push_str(&format!("{}_", month_label(m as u32)));
        }
        if let Some(b) = &filter.brand {
            name.push_str(&format!("{}_", b));
        }
    }
    name.push_str(&date_stamp(today));
    name.push_str(".xlsx");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_table;
    use crate::usecases::u501_spreadsheet_import::row_count::count_data_rows;

    fn record(id: i64) -> SalesRecord {
        SalesRecord {
            id: Some(id),
            anio: Some(2024),
            mes: Some(3),
            dia: Some(1),
            marca: "ESSENCE".into(),
            cod_barra: format!("40597{}", id),
            venta_dolares: 12.5,
            ..SalesRecord::default()
        }
    }

    #[test]
    fn filename_encodes_applied_filters_and_date() {
        let filter = SalesFilter {
            year: Some(2024),
            month: Some(3),
            brand: Some("ESSENCE".into()),
            ..SalesFilter::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(
            export_filename(RetailChain::Fybeca, Some(&filter), today),
            "Reporte_Ventas_Fybeca_2024_Marzo_ESSENCE_9-1-2025.xlsx"
        );
        assert_eq!(
            export_filename(RetailChain::TemplateGeneral, None, today),
            "Reporte_Ventas_TemplateGeneral_9-1-2025.xlsx"
        );
    }

    #[test]
    fn row_uses_month_label_and_city_fallback() {
        let row = record(1).export_row();
        assert_eq!(row[1], Cell::text("Marzo"));
        assert_eq!(row[9], Cell::text("N/A"));
        assert_eq!(row.len(), SalesRecord::export_headers().len());
    }

    #[test]
    fn exported_rows_count_back_to_record_count() {
        let records: Vec<SalesRecord> = (1..=7).map(record).collect();
        let table = build_table("Ventas Filtradas", &records);
        assert_eq!(count_data_rows(&table.to_grid()), records.len());
    }
}
