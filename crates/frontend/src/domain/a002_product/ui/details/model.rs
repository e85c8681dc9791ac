use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::common::RecordId;
use contracts::shared::errors::ApiError;
use contracts::usecases::u502_bulk_delete::DeleteOutcome;

use crate::shared::api_utils::api_url;
use crate::shared::config;
use crate::shared::http::{get_json, send_json};
use crate::usecases::u502_bulk_delete::delete_in_batches;

const BASE: &str = "/api/fybeca";

pub fn url(path: &str) -> String {
    api_url(&format!("{}{}", BASE, path))
}

pub async fn fetch_all() -> Result<Vec<Product>, ApiError> {
    get_json(&url("/productos")).await
}

/// The server upserts on `POST /producto`, with or without id
pub async fn save(product: &Product) -> Result<(), ApiError> {
    send_json("POST", &url("/producto"), product).await
}

/// Single and bulk deletes share `DELETE /productos` with an id array
pub async fn delete(ids: &[RecordId]) -> DeleteOutcome {
    let batch = config::current().limits.product_delete_batch;
    delete_in_batches(&url("/productos"), ids, batch).await
}
