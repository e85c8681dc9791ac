//! Product create/edit dialog (MVVM: model / view_model / view)

pub mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
