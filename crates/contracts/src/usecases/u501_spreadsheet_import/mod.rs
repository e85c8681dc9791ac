//! Excel template upload: local checks, ETA, response normalization and the
//! incident report offered after every upload.

pub mod content_disposition;
pub mod eta;
pub mod file_check;
pub mod mapping;
pub mod report;
pub mod response;
pub mod row_count;
pub mod text_summary;
pub mod warnings;

pub use eta::{estimate_upload_ms, format_duration, format_hhmmss};
pub use file_check::check_spreadsheet;
pub use report::{IncidentReport, UploadMetrics};
pub use response::{CodeIssue, UploadCounts, UploadOutcome, UploadResponse};
pub use warnings::{FilaLineExtractor, WarningExtractor};
