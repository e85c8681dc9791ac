use std::collections::HashSet;

use crate::domain::common::RecordId;

/// Outcome of a selection change; `truncated` asks the screen to warn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionChange {
    pub truncated: bool,
}

/// Ids marked for bulk deletion, in selection order, optionally capped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: Vec<RecordId>,
    /// Same ids as `ids`, for row lookups
    index: HashSet<RecordId>,
    max: Option<usize>,
}

pub fn max_selection_warning(max: usize) -> String {
    format!(
        "Solo puede seleccionar un máximo de {} registros para eliminar.",
        max
    )
}

impl Selection {
    pub fn new(max: Option<usize>) -> Self {
        Self {
            ids: Vec::new(),
            index: HashSet::new(),
            max,
        }
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.index.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.index.clear();
    }

    fn retain(&mut self, keep: impl Fn(RecordId) -> bool) {
        self.ids.retain(|id| keep(*id));
        self.index.retain(|id| keep(*id));
    }

    fn has_room(&self) -> bool {
        self.max.map_or(true, |max| self.ids.len() < max)
    }

    pub fn set(&mut self, id: RecordId, checked: bool) -> SelectionChange {
        if !checked {
            self.retain(|x| x != id);
            return SelectionChange::default();
        }
        if self.contains(id) {
            return SelectionChange::default();
        }
        if !self.has_room() {
            return SelectionChange { truncated: true };
        }
        self.ids.push(id);
        self.index.insert(id);
        SelectionChange::default()
    }

    /// Replaces the whole selection; extra ids past the cap are dropped
    pub fn replace(&mut self, ids: impl IntoIterator<Item = RecordId>) -> SelectionChange {
        self.clear();
        self.extend(ids)
    }

    fn extend(&mut self, ids: impl IntoIterator<Item = RecordId>) -> SelectionChange {
        let mut truncated = false;
        for id in ids {
            if self.index.contains(&id) {
                continue;
            }
            if !self.has_room() {
                truncated = true;
                break;
            }
            self.ids.push(id);
            self.index.insert(id);
        }
        SelectionChange { truncated }
    }

    pub fn all_selected(&self, visible: &[RecordId]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.contains(*id))
    }

    /// Header checkbox: unselects the visible rows when all are selected,
    /// otherwise adds the missing ones
    pub fn toggle_visible(&mut self, visible: &[RecordId]) -> SelectionChange {
        if self.all_selected(visible) {
            let drop: HashSet<RecordId> = visible.iter().copied().collect();
            self.retain(|id| !drop.contains(&id));
            SelectionChange::default()
        } else {
            self.extend(visible.iter().copied())
        }
    }

    /// Forgets ids that are no longer present after a reload
    pub fn retain_existing(&mut self, existing: &[RecordId]) {
        let keep: HashSet<RecordId> = existing.iter().copied().collect();
        self.retain(|id| keep.contains(&id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_past_the_cap_truncates_and_warns() {
        let mut sel = Selection::new(Some(5000));
        let change = sel.replace(1..=5001);
        assert!(change.truncated);
        assert_eq!(sel.len(), 5000);
        assert_eq!(sel.ids().last(), Some(&5000));
    }

    #[test]
    fn selecting_exactly_the_cap_does_not_warn() {
        let mut sel = Selection::new(Some(5000));
        let change = sel.replace(1..=5000);
        assert!(!change.truncated);
        assert_eq!(sel.len(), 5000);
    }

    #[test]
    fn single_check_past_cap_is_refused() {
        let mut sel = Selection::new(Some(2));
        sel.set(1, true);
        sel.set(2, true);
        assert!(sel.set(3, true).truncated);
        assert!(!sel.contains(3));
        sel.set(1, false);
        assert_eq!(sel.ids(), &[2]);
        assert!(!sel.contains(1));
    }

    #[test]
    fn lookups_follow_every_change() {
        let mut sel = Selection::new(None);
        sel.replace([4, 5, 6]);
        assert!(sel.contains(5));
        sel.toggle_visible(&[4, 5, 6]);
        assert!(sel.is_empty());
        assert!(!sel.contains(5));
        sel.replace([7, 8]);
        sel.retain_existing(&[8]);
        assert!(!sel.contains(7));
        assert!(sel.contains(8));
        sel.clear();
        assert!(!sel.contains(8));
    }

    #[test]
    fn header_toggle_adds_then_removes_visible_rows() {
        let mut sel = Selection::new(None);
        sel.set(99, true);
        sel.toggle_visible(&[1, 2, 3]);
        assert_eq!(sel.ids(), &[99, 1, 2, 3]);
        assert!(sel.all_selected(&[1, 2, 3]));
        sel.toggle_visible(&[1, 2, 3]);
        assert_eq!(sel.ids(), &[99]);
    }

    #[test]
    fn warning_text_names_the_limit() {
        assert_eq!(
            max_selection_warning(5000),
            "Solo puede seleccionar un máximo de 5000 registros para eliminar."
        );
    }

    #[test]
    fn reload_drops_missing_ids() {
        let mut sel = Selection::new(None);
        sel.replace([1, 2, 3]);
        sel.retain_existing(&[2, 3, 4]);
        assert_eq!(sel.ids(), &[2, 3]);
    }
}
