use serde::Serialize;

use super::pagination::Pagination;
use crate::shared::search::{normalize_query, record_matches};

/// Predicate built from the "applied filters" snapshot of a screen
pub trait RecordFilter<T>: Clone + Default + PartialEq {
    /// No criteria set
    fn is_empty(&self) -> bool;

    fn matches(&self, record: &T) -> bool;
}

/// Screens with free-text search only
impl<T> RecordFilter<T> for () {
    fn is_empty(&self) -> bool {
        true
    }

    fn matches(&self, _record: &T) -> bool {
        true
    }
}

/// What a screen shows before the user asks for data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Everything loaded is shown right away; clearing shows everything again
    Eager,
    /// The table stays empty until a filter or search is applied.
    /// `clear_reveals_all` decides whether "clear" shows the whole set or
    /// returns to the empty state.
    OnDemand { clear_reveals_all: bool },
}

/// In-memory list state of one screen.
///
/// `snapshot` is the last successful unfiltered load, `current` the last
/// applied result (server-filtered or filtered locally from the snapshot).
#[derive(Debug, Clone)]
pub struct ListWorkflow<T, F> {
    policy: LoadPolicy,
    snapshot: Vec<T>,
    current: Vec<T>,
    applied: Option<F>,
    search: String,
    show_all: bool,
    pub pagination: Pagination,
}

impl<T, F> ListWorkflow<T, F>
where
    T: Clone + Serialize,
    F: RecordFilter<T>,
{
    pub fn new(policy: LoadPolicy, page_size: usize) -> Self {
        Self {
            policy,
            snapshot: Vec::new(),
            current: Vec::new(),
            applied: None,
            search: String::new(),
            show_all: matches!(policy, LoadPolicy::Eager),
            pagination: Pagination::new(page_size),
        }
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    pub fn applied(&self) -> Option<&F> {
        self.applied.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Stores a fresh unfiltered load. An applied filter is re-evaluated
    /// locally so the view keeps respecting it.
    pub fn load_snapshot(&mut self, records: Vec<T>) {
        self.snapshot = records;
        self.current = match &self.applied {
            Some(filter) => self.filter_snapshot(filter),
            None => self.snapshot.clone(),
        };
        self.pagination.reset();
    }

    /// Result of a server-side filtered query
    pub fn set_filtered(&mut self, filter: F, records: Vec<T>) {
        self.applied = if filter.is_empty() { None } else { Some(filter) };
        self.current = records;
        self.pagination.reset();
    }

    /// Filters the last snapshot in memory (no server, or server failed)
    pub fn apply_locally(&mut self, filter: F) -> usize {
        self.current = self.filter_snapshot(&filter);
        self.applied = if filter.is_empty() { None } else { Some(filter) };
        self.pagination.reset();
        self.current.len()
    }

    /// Drops applied filters and search; what becomes visible depends on the policy
    pub fn clear(&mut self) {
        self.applied = None;
        self.search.clear();
        self.current = self.snapshot.clone();
        self.show_all = match self.policy {
            LoadPolicy::Eager => true,
            LoadPolicy::OnDemand { clear_reveals_all } => clear_reveals_all,
        };
        self.pagination.reset();
    }

    pub fn set_search(&mut self, text: &str) {
        if self.search != text {
            self.search = text.to_string();
            self.pagination.reset();
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.page = page;
        let total = self.visible_len();
        self.pagination.clamp(total);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.pagination.set_page_size(size);
    }

    /// Whether the table may show rows at all
    pub fn is_showing(&self) -> bool {
        self.show_all || self.applied.is_some() || normalize_query(&self.search).is_some()
    }

    /// Filtered, searched set behind the table (before pagination)
    pub fn visible(&self) -> Vec<T> {
        if !self.is_showing() {
            return Vec::new();
        }
        match normalize_query(&self.search) {
            None => self.current.clone(),
            Some(needle) => self
                .current
                .iter()
                .filter(|r| record_matches(*r, &needle))
                .cloned()
                .collect(),
        }
    }

    pub fn visible_len(&self) -> usize {
        if !self.is_showing() {
            return 0;
        }
        match normalize_query(&self.search) {
            None => self.current.len(),
            Some(needle) => self
                .current
                .iter()
                .filter(|r| record_matches(*r, &needle))
                .count(),
        }
    }

    pub fn page_items(&self) -> Vec<T> {
        let visible = self.visible();
        self.pagination.slice(&visible).to_vec()
    }

    fn filter_snapshot(&self, filter: &F) -> Vec<T> {
        self.snapshot
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Row {
        anio: i32,
        mes: i32,
        marca: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct YearFilter(Option<i32>);

    impl RecordFilter<Row> for YearFilter {
        fn is_empty(&self) -> bool {
            self.0.is_none()
        }
        fn matches(&self, r: &Row) -> bool {
            self.0.map_or(true, |y| r.anio == y)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { anio: 2023, mes: 1, marca: "ESSENCE".into() },
            Row { anio: 2024, mes: 3, marca: "CATRICE".into() },
            Row { anio: 2024, mes: 4, marca: "ESSENCE".into() },
        ]
    }

    #[test]
    fn eager_policy_shows_everything() {
        let mut wf: ListWorkflow<Row, YearFilter> = ListWorkflow::new(LoadPolicy::Eager, 10);
        wf.load_snapshot(rows());
        assert_eq!(wf.visible_len(), 3);
    }

    #[test]
    fn on_demand_stays_empty_until_filter_or_search() {
        let mut wf: ListWorkflow<Row, YearFilter> =
            ListWorkflow::new(LoadPolicy::OnDemand { clear_reveals_all: true }, 10);
        wf.load_snapshot(rows());
        assert!(wf.visible().is_empty());

        wf.set_search("catrice");
        assert_eq!(wf.visible_len(), 1);

        wf.set_search("");
        wf.apply_locally(YearFilter(Some(2024)));
        assert_eq!(wf.visible_len(), 2);
    }

    #[test]
    fn clear_follows_policy_and_resets_page() {
        let mut reveal: ListWorkflow<Row, YearFilter> =
            ListWorkflow::new(LoadPolicy::OnDemand { clear_reveals_all: true }, 1);
        reveal.load_snapshot(rows());
        reveal.apply_locally(YearFilter(Some(2024)));
        reveal.set_page(1);
        assert_eq!(reveal.pagination.page, 1);
        reveal.clear();
        assert_eq!(reveal.visible_len(), 3);
        assert_eq!(reveal.pagination.page, 0);

        let mut hide: ListWorkflow<Row, YearFilter> =
            ListWorkflow::new(LoadPolicy::OnDemand { clear_reveals_all: false }, 10);
        hide.load_snapshot(rows());
        hide.apply_locally(YearFilter(Some(2024)));
        hide.clear();
        assert!(hide.visible().is_empty());
        assert!(hide.applied().is_none());
    }

    #[test]
    fn reload_keeps_applied_filter() {
        let mut wf: ListWorkflow<Row, YearFilter> = ListWorkflow::new(LoadPolicy::Eager, 10);
        wf.load_snapshot(rows());
        wf.apply_locally(YearFilter(Some(2023)));
        wf.load_snapshot(rows());
        assert_eq!(wf.visible_len(), 1);
    }

    #[test]
    fn server_result_replaces_current_set() {
        let mut wf: ListWorkflow<Row, YearFilter> =
            ListWorkflow::new(LoadPolicy::OnDemand { clear_reveals_all: true }, 10);
        wf.load_snapshot(rows());
        wf.set_filtered(YearFilter(Some(2025)), vec![Row { anio: 2025, mes: 1, marca: "X".into() }]);
        assert_eq!(wf.visible_len(), 1);
        assert_eq!(wf.applied(), Some(&YearFilter(Some(2025))));
    }

    #[test]
    fn page_items_respects_page_size() {
        let mut wf: ListWorkflow<Row, YearFilter> = ListWorkflow::new(LoadPolicy::Eager, 2);
        wf.load_snapshot(rows());
        assert_eq!(wf.page_items().len(), 2);
        wf.set_page(1);
        assert_eq!(wf.page_items().len(), 1);
        assert_eq!(wf.pagination.total_pages(wf.visible_len()), 2);
    }

    #[test]
    fn search_only_screen_filters_by_text() {
        let mut wf: ListWorkflow<Row, ()> = ListWorkflow::new(LoadPolicy::Eager, 10);
        wf.load_snapshot(rows());
        wf.set_search("essence");
        assert_eq!(wf.visible_len(), 2);
        wf.clear();
        assert_eq!(wf.visible_len(), 3);
    }
}
