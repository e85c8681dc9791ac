use contracts::domain::a003_furniture_type::aggregate::FurnitureType;
use contracts::domain::common::RecordId;
use contracts::enums::retail_chain::RetailChain;
use contracts::shared::errors::ApiError;
use contracts::usecases::u502_bulk_delete::DeleteOutcome;
use serde::Serialize;

use crate::shared::api_utils::{api_url, with_query};
use crate::shared::config;
use crate::shared::http::{get_json, send_json};
use crate::usecases::u502_bulk_delete::{delete_in_batches, delete_single};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientQuery<'a> {
    cod_cliente: &'a str,
}

/// `/api-sellout/{chain}{path}`
pub fn url(chain: RetailChain, path: &str) -> String {
    api_url(&format!("/api-sellout/{}{}", chain.code(), path))
}

/// Rows registered under the chain's client; the server may return others
/// too, so the list screen filters again by client code
pub async fn fetch_for_client(chain: RetailChain, client_code: &str) -> Result<Vec<FurnitureType>, ApiError> {
    let endpoint = with_query(&url(chain, "/tipo-mueble"), &ClientQuery { cod_cliente: client_code });
    get_json(&endpoint).await
}

pub async fn save(chain: RetailChain, item: &FurnitureType) -> Result<(), ApiError> {
    match item.id {
        Some(id) => send_json("PUT", &url(chain, &format!("/tipo-mueble/{}", id)), item).await,
        None => send_json("POST", &url(chain, "/tipo-mueble"), item).await,
    }
}

pub async fn delete_one(chain: RetailChain, id: RecordId) -> Result<DeleteOutcome, ApiError> {
    delete_single(&url(chain, &format!("/tipo-mueble/{}", id)), id).await
}

pub async fn delete_many(chain: RetailChain, ids: &[RecordId]) -> DeleteOutcome {
    let batch = config::current().limits.delete_batch;
    delete_in_batches(&url(chain, "/eliminar-varios-tipo-mueble"), ids, batch).await
}
