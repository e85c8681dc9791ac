pub mod filter_panel;
pub mod form_field;
pub mod pagination_controls;
pub mod table;
pub mod ui;

pub use filter_panel::{FilterPanel, FilterTag};
pub use form_field::FormField;
pub use pagination_controls::PaginationControls;
