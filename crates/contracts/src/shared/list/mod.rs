//! Client-side list workflow shared by every management screen:
//! load policy, applied filters, free-text search, pagination, selection.

pub mod pagination;
pub mod selection;
pub mod workflow;

pub use pagination::{Pagination, PAGE_SIZE_OPTIONS};
pub use selection::{max_selection_warning, Selection, SelectionChange};
pub use workflow::{ListWorkflow, LoadPolicy, RecordFilter};
