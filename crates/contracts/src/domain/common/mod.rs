//! Common types and traits for all sell-out records

pub mod record;
pub mod serde_helpers;
pub mod validation;

// Re-exports
pub use record::{Identified, RecordId};
pub use validation::{FieldErrors, Validate};
