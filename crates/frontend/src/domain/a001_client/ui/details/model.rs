use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::common::RecordId;
use contracts::shared::errors::ApiError;
use contracts::usecases::u502_bulk_delete::{DeleteOutcome, PerIdTally};

use crate::shared::api_utils::api_url;
use crate::shared::http::{get_json, send_json};
use crate::usecases::u502_bulk_delete::{delete_each, delete_single};

const BASE: &str = "/api/clientes/empresas";

fn base_url() -> String {
    api_url(BASE)
}

fn item_url(id: RecordId) -> String {
    format!("{}/{}", base_url(), id)
}

pub async fn fetch_all() -> Result<Vec<Client>, ApiError> {
    get_json(&base_url()).await
}

pub async fn fetch_by_id(id: RecordId) -> Result<Client, ApiError> {
    get_json(&item_url(id)).await
}

/// POST for new clients, PUT `/{id}` otherwise
pub async fn save(client: &Client) -> Result<(), ApiError> {
    match client.id {
        Some(id) => send_json("PUT", &item_url(id), client).await,
        None => send_json("POST", &base_url(), client).await,
    }
}

pub async fn delete_one(id: RecordId) -> Result<DeleteOutcome, ApiError> {
    delete_single(&item_url(id), id).await
}

/// No bulk endpoint: one DELETE per client
pub async fn delete_many(ids: &[RecordId]) -> PerIdTally {
    delete_each(&base_url(), ids).await
}
