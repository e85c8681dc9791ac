//! Excel upload widget: local checks, confirmation, progress with countdown
//! and cancel, then the result panel with the downloadable text reports.

pub mod api;
pub mod ticker;
mod mapping_form;
mod result_panel;
mod view;

pub use view::{UploadOptions, UploadPanel};
