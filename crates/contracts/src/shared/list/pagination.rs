/// Page sizes offered by the paginator
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Offset-based client pagination (0-indexed pages)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
        }
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1))
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    /// Moves back to the last page if the set shrank under the offset
    pub fn clamp(&mut self, total: usize) {
        let pages = self.total_pages(total);
        if pages == 0 {
            self.page = 0;
        } else if self.page >= pages {
            self.page = pages - 1;
        }
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    /// Index of the last page; 0 for an empty set
    pub fn last_page(&self, total: usize) -> usize {
        self.total_pages(total).saturating_sub(1)
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.total_pages(total)
    }

    /// "page / pages (rows)", 1-indexed, never "x / 0"
    pub fn summary(&self, total: usize) -> String {
        format!(
            "{} / {} ({})",
            self.page + 1,
            self.total_pages(total).max(1),
            total
        )
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_last_partial_page() {
        let items: Vec<u32> = (0..23).collect();
        let mut p = Pagination::new(10);
        p.page = 2;
        assert_eq!(p.slice(&items), &[20, 21, 22]);
        assert_eq!(p.total_pages(items.len()), 3);
    }

    #[test]
    fn clamp_moves_to_last_existing_page() {
        let mut p = Pagination::new(10);
        p.page = 5;
        p.clamp(15);
        assert_eq!(p.page, 1);
        p.clamp(0);
        assert_eq!(p.page, 0);
    }

    #[test]
    fn changing_page_size_resets_offset() {
        let mut p = Pagination::new(10);
        p.page = 3;
        p.set_page_size(50);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn navigation_bounds_follow_row_count() {
        let mut p = Pagination::new(10);
        assert!(p.is_first());
        assert!(p.has_next(11));
        assert_eq!(p.last_page(11), 1);
        p.page = 1;
        assert!(!p.is_first());
        assert!(!p.has_next(11));
        assert_eq!(p.summary(11), "2 / 2 (11)");
    }

    #[test]
    fn empty_set_reads_as_single_page() {
        let p = Pagination::new(25);
        assert!(!p.has_next(0));
        assert_eq!(p.last_page(0), 0);
        assert_eq!(p.summary(0), "1 / 1 (0)");
    }
}
