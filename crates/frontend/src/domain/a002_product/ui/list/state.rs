use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::list::{ListWorkflow, LoadPolicy, Selection};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub list: ListWorkflow<Product, ()>,
    pub selection: Selection,
    pub is_loaded: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            list: ListWorkflow::new(LoadPolicy::Eager, 10),
            selection: Selection::new(None),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
