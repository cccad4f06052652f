//! Page window arithmetic.

use std::ops::Range;

/// Page sizes offered by the footer selector.
pub const PAGE_SIZES: [usize; 6] = [5, 10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Snap an arbitrary size to the closest allowed one.
pub fn normalize_page_size(size: usize) -> usize {
    PAGE_SIZES
        .iter()
        .copied()
        .min_by_key(|allowed| allowed.abs_diff(size))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: normalize_page_size(page_size),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Always at least one page, even for an empty table.
    pub fn page_count(&self, rows: usize) -> usize {
        rows.div_ceil(self.page_size).max(1)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, rows: usize) -> bool {
        self.page_index + 1 < self.page_count(rows)
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn previous(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next(&mut self, rows: usize) {
        if self.can_next(rows) {
            self.page_index += 1;
        }
    }

    pub fn last(&mut self, rows: usize) {
        self.page_index = self.page_count(rows) - 1;
    }

    /// Keep the index inside `[0, page_count)`.
    pub fn clamp(&mut self, rows: usize) {
        self.page_index = self.page_index.min(self.page_count(rows) - 1);
    }

    /// Switch size while keeping the current first row on screen.
    ///
    /// Sizes outside [`PAGE_SIZES`] are ignored; returns whether anything changed.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) || size == self.page_size {
            return false;
        }
        let first_row = self.page_index * self.page_size;
        self.page_size = size;
        self.page_index = first_row / size;
        true
    }

    /// Row range of the current page within `rows` filtered rows.
    pub fn window(&self, rows: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(rows);
        let end = (start + self.page_size).min(rows);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_at_least_one() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(10), 1);
        assert_eq!(pagination.page_count(11), 2);
        assert!(!pagination.can_previous());
        assert!(!pagination.can_next(0));
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut pagination = Pagination::new(5);
        pagination.previous();
        assert_eq!(pagination.page_index(), 0);
        pagination.last(12);
        assert_eq!(pagination.page_index(), 2);
        pagination.next(12);
        assert_eq!(pagination.page_index(), 2);
        assert_eq!(pagination.window(12), 10..12);
        pagination.first();
        assert_eq!(pagination.window(12), 0..5);
    }

    #[test]
    fn page_size_change_keeps_first_row_visible() {
        let mut pagination = Pagination::new(10);
        pagination.next(100);
        pagination.next(100);
        pagination.next(100);
        assert_eq!(pagination.page_index(), 3);
        assert!(pagination.set_page_size(20));
        assert_eq!(pagination.page_index(), 1);
        assert!(pagination.window(100).contains(&30));

        assert!(pagination.set_page_size(5));
        assert_eq!(pagination.page_index(), 4);
        assert!(!pagination.set_page_size(7));
        assert_eq!(pagination.page_size(), 5);
    }

    #[test]
    fn clamp_pulls_index_back_after_rows_shrink() {
        let mut pagination = Pagination::new(5);
        pagination.last(30);
        pagination.clamp(6);
        assert_eq!(pagination.page_index(), 1);
        pagination.clamp(0);
        assert_eq!(pagination.page_index(), 0);
    }

    #[test]
    fn normalize_snaps_to_nearest_allowed_size() {
        assert_eq!(normalize_page_size(10), 10);
        assert_eq!(normalize_page_size(0), 5);
        assert_eq!(normalize_page_size(26), 30);
        assert_eq!(normalize_page_size(500), 50);
    }
}
