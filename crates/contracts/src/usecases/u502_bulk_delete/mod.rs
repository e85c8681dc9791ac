//! Bulk deletion: batching, the tolerant reply parser and the notices shown
//! once all batches settle.

pub mod chunks;
pub mod outcome;
pub mod response;
pub mod tally;

pub use chunks::chunk_ids;
pub use outcome::{BlockedKind, DeleteFailure, DeleteOutcome};
pub use response::{BlockedInfo, DeleteResponse};
pub use tally::PerIdTally;
