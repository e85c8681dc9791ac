pub mod api;

pub use api::{delete_each, delete_in_batches, delete_single};
