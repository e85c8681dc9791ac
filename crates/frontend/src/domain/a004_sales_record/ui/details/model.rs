use contracts::domain::a004_sales_record::aggregate::SalesRecord;
use contracts::domain::a004_sales_record::filter::{for_client, SalesFilter};
use contracts::domain::a004_sales_record::options::{parse_brands, parse_months, parse_years};
use contracts::domain::common::RecordId;
use contracts::enums::retail_chain::RetailChain;
use contracts::shared::errors::ApiError;
use contracts::usecases::u502_bulk_delete::DeleteOutcome;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::{api_url, with_query};
use crate::shared::config;
use crate::shared::http::{get_json, send_json};
use crate::usecases::u501_spreadsheet_import::UploadOptions;
use crate::usecases::u502_bulk_delete::{delete_in_batches, delete_single};

fn base(chain: RetailChain) -> &'static str {
    match chain {
        RetailChain::Fybeca => "/api/fybeca",
        RetailChain::Deprati => "/api/deprati",
        RetailChain::TemplateGeneral => "/api-sellout/template-general",
    }
}

pub fn url(chain: RetailChain, path: &str) -> String {
    api_url(&format!("{}{}", base(chain), path))
}

/// Fybeca's endpoints mix clients; its rows are always narrowed to its code
pub fn pinned_client(chain: RetailChain) -> Option<&'static str> {
    match chain {
        RetailChain::Fybeca => chain.client_code(),
        _ => None,
    }
}

/// Chains whose server answers filtered `GET /venta` queries and serves
/// the option lists and the sales report
pub fn filters_on_server(chain: RetailChain) -> bool {
    !matches!(chain, RetailChain::Deprati)
}

pub fn report_fallback_name(chain: RetailChain) -> String {
    format!("reporte_ventas_{}.xlsx", chain.code().replace('-', "_"))
}

pub fn upload_options(chain: RetailChain) -> UploadOptions {
    let base = UploadOptions {
        chain_label: chain.display_name(),
        subject: "VENTAS",
        endpoint: String::new(),
        max_mb: None,
        template_href: None,
        overdue_notice: false,
        with_mapping: false,
        button_label: "Subir ventas (.xlsx)",
    };
    match chain {
        RetailChain::Fybeca => UploadOptions {
            endpoint: url(chain, "/subir-archivo-venta"),
            template_href: Some("/TEMPLATE%20VENTAS%20FYBECA.xlsx"),
            ..base
        },
        RetailChain::Deprati => UploadOptions {
            endpoint: url(chain, "/subir-archivos-motor-maping"),
            max_mb: Some(config::current().upload.max_template_mb),
            template_href: Some("/TEMPLATE_DEPRATI.xlsx"),
            overdue_notice: true,
            with_mapping: true,
            ..base
        },
        RetailChain::TemplateGeneral => UploadOptions {
            endpoint: url(chain, "/subir-archivo-template-general"),
            template_href: Some("/TEMPLATE%20PLANTILLA%20FIJA.xlsx"),
            ..base
        },
    }
}

#[derive(Serialize)]
struct YearQuery {
    anio: i32,
}

fn prepare(chain: RetailChain, records: Vec<SalesRecord>) -> Vec<SalesRecord> {
    for_client(records, pinned_client(chain))
        .into_iter()
        .map(SalesRecord::with_client_city)
        .collect()
}

/// Unfiltered load of the chain's rows
pub async fn fetch_all(chain: RetailChain) -> Result<Vec<SalesRecord>, ApiError> {
    let query = SalesFilter::default().query(pinned_client(chain));
    let records: Vec<SalesRecord> = get_json(&with_query(&url(chain, "/venta"), &query)).await?;
    Ok(prepare(chain, records))
}

pub async fn fetch_filtered(chain: RetailChain, filter: &SalesFilter) -> Result<Vec<SalesRecord>, ApiError> {
    let query = filter.query(pinned_client(chain));
    let records: Vec<SalesRecord> = get_json(&with_query(&url(chain, "/venta"), &query)).await?;
    Ok(prepare(chain, records))
}

pub async fn fetch_years(chain: RetailChain) -> Result<Vec<i32>, ApiError> {
    let data: Value = get_json(&url(chain, "/anios-disponibles")).await?;
    Ok(parse_years(&data))
}

pub async fn fetch_months(chain: RetailChain, year: i32) -> Result<Vec<i32>, ApiError> {
    let endpoint = with_query(&url(chain, "/meses-disponibles"), &YearQuery { anio: year });
    let data: Value = get_json(&endpoint).await?;
    Ok(parse_months(&data))
}

pub async fn fetch_brands(chain: RetailChain) -> Result<Vec<String>, ApiError> {
    let data: Value = get_json(&url(chain, "/marcas-ventas")).await?;
    Ok(parse_brands(&data))
}

/// Sales rows are edited in place; there is no create endpoint
pub async fn update(chain: RetailChain, record: &SalesRecord) -> Result<(), ApiError> {
    let id = record
        .id
        .ok_or_else(|| ApiError::Validation("La venta no tiene id".to_string()))?;
    send_json("PUT", &url(chain, &format!("/venta/{}", id)), record).await
}

pub async fn delete_one(chain: RetailChain, id: RecordId) -> Result<DeleteOutcome, ApiError> {
    delete_single(&url(chain, &format!("/venta/{}", id)), id).await
}

pub async fn delete_many(chain: RetailChain, ids: &[RecordId]) -> DeleteOutcome {
    let batch = config::current().limits.delete_batch;
    delete_in_batches(&url(chain, "/ventas-forma-masiva"), ids, batch).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fybeca_pins_its_client() {
        assert_eq!(pinned_client(RetailChain::Fybeca), Some("MZCL-000014"));
        assert_eq!(pinned_client(RetailChain::Deprati), None);
        assert_eq!(pinned_client(RetailChain::TemplateGeneral), None);
    }

    #[test]
    fn report_names_follow_the_chain() {
        assert_eq!(report_fallback_name(RetailChain::Fybeca), "reporte_ventas_fybeca.xlsx");
        assert_eq!(
            report_fallback_name(RetailChain::TemplateGeneral),
            "reporte_ventas_template_general.xlsx"
        );
    }
}
