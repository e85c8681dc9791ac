//! Client create/edit dialog
//!
//! - model.rs: REST calls for `/api/clientes/empresas`
//! - view_model.rs: form state, validation and commands
//! - view.rs: Leptos component

pub mod model;
mod view;
mod view_model;

pub use view::ClientDetails;
pub use view_model::ClientDetailsViewModel;
