//! Delete requests whose replies are read through the tolerant outcome
//! parser in `contracts`.

use contracts::domain::common::RecordId;
use contracts::shared::errors::ApiError;
use contracts::usecases::u502_bulk_delete::{chunk_ids, DeleteOutcome, DeleteResponse, PerIdTally};

use crate::shared::http::delete_raw;

/// Sends `ids` as JSON arrays of at most `batch` ids, one request after the
/// other. Batches already answered stay counted when a later one cannot
/// reach the server; the ids not sent are reported with that error.
pub async fn delete_in_batches(url: &str, ids: &[RecordId], batch: usize) -> DeleteOutcome {
    let chunks = chunk_ids(ids, batch);
    log::info!("Bulk delete of {} ids in {} batch(es): {}", ids.len(), chunks.len(), url);

    let mut total = DeleteOutcome::default();
    for (index, chunk) in chunks.iter().enumerate() {
        match delete_raw(url, Some(chunk)).await {
            Ok(reply) => {
                let outcome = DeleteOutcome::from_reply(DeleteResponse::parse(&reply.body), reply.status, chunk);
                total.merge(outcome);
            }
            Err(e) => {
                log::error!("Bulk delete batch {} failed: {}", index + 1, e);
                let pending: Vec<RecordId> = chunks[index..].iter().flatten().copied().collect();
                total.merge(DeleteOutcome::unsent(pending, e));
                break;
            }
        }
    }
    total
}

/// DELETE of one resource; a refused delete is parsed for its reason
pub async fn delete_single(url: &str, id: RecordId) -> Result<DeleteOutcome, ApiError> {
    let reply = delete_raw::<()>(url, None).await?;
    Ok(DeleteOutcome::from_reply(DeleteResponse::parse(&reply.body), reply.status, &[id]))
}

/// One DELETE `{base}/{id}` per id, for resources without a bulk endpoint
pub async fn delete_each(base: &str, ids: &[RecordId]) -> PerIdTally {
    let mut tally = PerIdTally::default();
    for &id in ids {
        let ok = match delete_raw::<()>(&format!("{}/{}", base, id), None).await {
            Ok(reply) => reply.ok,
            Err(_) => false,
        };
        tally.record(id, ok);
    }
    tally
}
