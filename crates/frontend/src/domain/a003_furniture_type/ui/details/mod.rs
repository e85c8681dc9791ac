//! Furniture type dialog, shared by the Fybeca and Deprati screens

pub mod model;
mod view;
mod view_model;

pub use view::FurnitureTypeDetails;
pub use view_model::FurnitureTypeDetailsViewModel;
