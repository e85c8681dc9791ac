use contracts::domain::a004_sales_record::aggregate::SalesRecord;
use contracts::domain::a004_sales_record::filter::{brands_in, months_in, years_in, SalesFilter, SalesFilterField};
use contracts::enums::retail_chain::RetailChain;
use contracts::shared::list::{ListWorkflow, LoadPolicy, RecordFilter, Selection};
use leptos::prelude::*;

/// What each chain shows before any filter is applied
pub fn policy_for(chain: RetailChain) -> LoadPolicy {
    match chain {
        RetailChain::Fybeca => LoadPolicy::OnDemand { clear_reveals_all: true },
        RetailChain::Deprati => LoadPolicy::OnDemand { clear_reveals_all: false },
        RetailChain::TemplateGeneral => LoadPolicy::Eager,
    }
}

#[derive(Clone, Debug)]
pub struct SalesListState {
    pub list: ListWorkflow<SalesRecord, SalesFilter>,
    pub selection: Selection,
    /// Filter form values, applied only on "Aplicar filtros"
    pub draft: SalesFilter,
    pub years: Vec<i32>,
    pub months: Vec<i32>,
    pub brands: Vec<String>,
    pub is_loaded: bool,
}

impl SalesListState {
    pub fn new(chain: RetailChain, max_selection: usize) -> Self {
        Self {
            list: ListWorkflow::new(policy_for(chain), 10),
            selection: Selection::new(Some(max_selection)),
            draft: SalesFilter::default(),
            years: Vec::new(),
            months: Vec::new(),
            brands: Vec::new(),
            is_loaded: false,
        }
    }

    pub fn applied(&self) -> SalesFilter {
        self.list.applied().cloned().unwrap_or_default()
    }

    /// Options derived from the loaded rows, used when the server has none
    pub fn derive_options(&mut self) {
        let snapshot = self.list.snapshot();
        self.years = years_in(snapshot);
        self.brands = brands_in(snapshot);
        self.months = months_in(snapshot, self.draft.year);
    }

    /// A new year invalidates the chosen month
    pub fn set_draft_year(&mut self, year: Option<i32>) {
        if self.draft.year != year {
            self.draft.year = year;
            self.draft.month = None;
            self.months = if year.is_some() {
                months_in(self.list.snapshot(), year)
            } else {
                Vec::new()
            };
        }
    }

    /// Drops one applied criterion; the draft follows
    pub fn remove_tag(&mut self, field: SalesFilterField) {
        let next = self.applied().without(field);
        self.draft = next.clone();
        if next.is_empty() {
            self.list.clear();
        } else {
            self.list.apply_locally(next);
        }
    }

    pub fn reset(&mut self) {
        self.draft = SalesFilter::default();
        self.months.clear();
        self.list.clear();
    }
}

pub fn create_state(chain: RetailChain, max_selection: usize) -> RwSignal<SalesListState> {
    RwSignal::new(SalesListState::new(chain, max_selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64, anio: i32, mes: i32, marca: &str) -> SalesRecord {
        SalesRecord {
            id: Some(id),
            anio: Some(anio),
            mes: Some(mes),
            marca: marca.into(),
            ..SalesRecord::default()
        }
    }

    fn loaded(chain: RetailChain) -> SalesListState {
        let mut s = SalesListState::new(chain, 5000);
        s.list.load_snapshot(vec![
            rec(1, 2024, 1, "ESSENCE"),
            rec(2, 2024, 2, "CATRICE"),
            rec(3, 2023, 12, "ESSENCE"),
        ]);
        s
    }

    #[test]
    fn each_chain_starts_with_its_policy() {
        assert_eq!(loaded(RetailChain::TemplateGeneral).list.visible_len(), 3);
        assert_eq!(loaded(RetailChain::Fybeca).list.visible_len(), 0);
        assert_eq!(loaded(RetailChain::Deprati).list.visible_len(), 0);
    }

    #[test]
    fn changing_year_clears_month_and_narrows_options() {
        let mut s = loaded(RetailChain::Deprati);
        s.draft.month = Some(12);
        s.set_draft_year(Some(2024));
        assert_eq!(s.draft.month, None);
        assert_eq!(s.months, vec![1, 2]);
    }

    #[test]
    fn removing_the_year_tag_drops_month_too() {
        let mut s = loaded(RetailChain::Fybeca);
        s.list.apply_locally(SalesFilter { year: Some(2024), month: Some(1), ..SalesFilter::default() });
        assert_eq!(s.list.visible_len(), 1);

        s.remove_tag(SalesFilterField::Year);
        assert_eq!(s.draft, SalesFilter::default());
        // Fybeca reveals everything once filters are cleared
        assert_eq!(s.list.visible_len(), 3);
    }

    #[test]
    fn deprati_reset_returns_to_empty_table() {
        let mut s = loaded(RetailChain::Deprati);
        s.list.apply_locally(SalesFilter { brand: Some("ESSENCE".into()), ..SalesFilter::default() });
        assert_eq!(s.list.visible_len(), 2);
        s.reset();
        assert_eq!(s.list.visible_len(), 0);
    }

    #[test]
    fn derived_options_come_from_the_snapshot() {
        let mut s = loaded(RetailChain::Deprati);
        s.derive_options();
        assert_eq!(s.years, vec![2024, 2023]);
        assert_eq!(s.brands, vec!["CATRICE", "ESSENCE"]);
    }
}
