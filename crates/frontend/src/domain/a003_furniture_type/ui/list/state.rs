use contracts::domain::a003_furniture_type::aggregate::FurnitureType;
use contracts::domain::a003_furniture_type::filter::FurnitureFilter;
use contracts::shared::list::{ListWorkflow, LoadPolicy, Selection};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct FurnitureTypeListState {
    pub list: ListWorkflow<FurnitureType, FurnitureFilter>,
    pub selection: Selection,
    pub is_loaded: bool,
}

impl Default for FurnitureTypeListState {
    fn default() -> Self {
        Self {
            list: ListWorkflow::new(LoadPolicy::Eager, 10),
            selection: Selection::new(None),
            is_loaded: false,
        }
    }
}

impl FurnitureTypeListState {
    pub fn filter(&self) -> FurnitureFilter {
        self.list.applied().cloned().unwrap_or_default()
    }

    /// Every filter change is applied right away over the loaded rows
    pub fn refilter(&mut self, change: impl FnOnce(&mut FurnitureFilter)) {
        let mut filter = self.filter();
        change(&mut filter);
        self.list.apply_locally(filter);
    }
}

pub fn create_state() -> RwSignal<FurnitureTypeListState> {
    RwSignal::new(FurnitureTypeListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::aggregate::Client;

    fn row(id: i64, essence: &str) -> FurnitureType {
        FurnitureType {
            id: Some(id),
            cod_pdv: format!("P{}", id),
            nombre_pdv: "Local".into(),
            tipo_mueble_essence: essence.into(),
            cliente: Some(Client::with_code("MZCL-000014")),
            ..FurnitureType::default()
        }
    }

    #[test]
    fn refilter_narrows_and_clearing_restores() {
        let mut state = FurnitureTypeListState::default();
        state.list.load_snapshot(vec![row(1, "Góndola"), row(2, "Isla"), row(3, "Góndola")]);
        assert_eq!(state.list.visible_len(), 3);

        state.refilter(|f| f.essence = Some("Góndola".into()));
        assert_eq!(state.list.visible_len(), 2);
        assert_eq!(state.filter().active_count(), 1);

        state.refilter(|f| f.essence = None);
        assert_eq!(state.list.visible_len(), 3);
        assert!(state.list.applied().is_none());
    }
}
