use contracts::domain::a001_client::aggregate::Client;
use contracts::shared::list::{ListWorkflow, LoadPolicy, Selection};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ClientListState {
    /// Search only, no filter panel fields
    pub list: ListWorkflow<Client, ()>,
    pub selection: Selection,
    pub is_loaded: bool,
}

impl Default for ClientListState {
    fn default() -> Self {
        Self {
            list: ListWorkflow::new(LoadPolicy::Eager, 10),
            selection: Selection::new(None),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ClientListState> {
    RwSignal::new(ClientListState::default())
}
