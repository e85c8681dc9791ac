//! Sales record edit dialog. Rows are only created by uploads.

pub mod model;
mod view;
mod view_model;

pub use view::SalesRecordDetails;
pub use view_model::SalesRecordDetailsViewModel;
