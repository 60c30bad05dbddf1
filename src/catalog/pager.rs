//! Page-based window over the catalogue.
//!
//! Pure index arithmetic: no animation lock, idempotent at both ends.

use std::ops::Range;

/// Number of sites shown per catalogue page.
pub const ITEMS_PER_PAGE: usize = 3;

/// Window of `items_per_page` entries over a fixed-size list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogPager {
    catalog_index: usize,
    items_per_page: usize,
    total_items: usize,
}

impl CatalogPager {
    /// Create a pager over `total_items` entries with the default page size
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, ITEMS_PER_PAGE)
    }

    /// Create a pager with a custom page size (a page size of zero is treated as one)
    pub fn with_page_size(total_items: usize, items_per_page: usize) -> Self {
        Self {
            catalog_index: 0,
            items_per_page: items_per_page.max(1),
            total_items,
        }
    }

    pub fn catalog_index(&self) -> usize {
        self.catalog_index
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Largest valid start index: `max(0, total - per_page)`
    pub fn max_index(&self) -> usize {
        self.total_items.saturating_sub(self.items_per_page)
    }

    /// Move back one page, stopping at the start
    pub fn prev(&mut self) {
        self.catalog_index = self.catalog_index.saturating_sub(self.items_per_page);
    }

    /// Move forward one page, stopping so the last page is always full
    pub fn next(&mut self) {
        self.catalog_index = (self.catalog_index + self.items_per_page).min(self.max_index());
    }

    /// Jump to an arbitrary start index, clamped into range
    pub fn set_index(&mut self, index: usize) {
        self.catalog_index = index.min(self.max_index());
    }

    /// Replace the list length and re-clamp the current index
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.catalog_index = self.catalog_index.min(self.max_index());
    }

    pub fn reset(&mut self) {
        self.catalog_index = 0;
    }

    pub fn has_prev(&self) -> bool {
        self.catalog_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.catalog_index + self.items_per_page < self.total_items
    }

    /// `ceil(total / per_page)`
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// `ceil((index + 1) / per_page)`
    pub fn current_page(&self) -> usize {
        (self.catalog_index + 1).div_ceil(self.items_per_page)
    }

    /// Index range of the visible window, truncated at the end of the list
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.catalog_index.min(self.total_items);
        let end = (self.catalog_index + self.items_per_page).min(self.total_items);
        start..end
    }

    /// Slice of `items` currently on screen
    pub fn visible_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_clamps_to_last_full_page() {
        let mut pager = CatalogPager::new(10);
        pager.next();
        assert_eq!(pager.catalog_index(), 3);
        pager.next();
        assert_eq!(pager.catalog_index(), 6);
        pager.next();
        assert_eq!(pager.catalog_index(), 7);
        pager.next();
        assert_eq!(pager.catalog_index(), 7);
        assert!(!pager.has_next());
    }

    #[test]
    fn prev_is_noop_at_start() {
        let mut pager = CatalogPager::new(10);
        pager.prev();
        assert_eq!(pager.catalog_index(), 0);
        assert!(!pager.has_prev());

        pager.set_index(2);
        pager.prev();
        assert_eq!(pager.catalog_index(), 0);
    }

    #[test]
    fn page_numbers() {
        let mut pager = CatalogPager::new(10);
        assert_eq!(pager.total_pages(), 4);
        assert_eq!(pager.current_page(), 1);
        pager.next();
        assert_eq!(pager.current_page(), 2);
        pager.next();
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn visible_items_follow_index() {
        let items: Vec<u32> = (0..10).collect();
        let mut pager = CatalogPager::new(items.len());
        assert_eq!(pager.visible_items(&items), &[0, 1, 2]);
        pager.next();
        pager.next();
        pager.next();
        assert_eq!(pager.visible_items(&items), &[7, 8, 9]);
    }

    #[test]
    fn short_lists_stay_on_first_page() {
        let items = ["only"];
        let mut pager = CatalogPager::new(items.len());
        assert_eq!(pager.max_index(), 0);
        pager.next();
        assert_eq!(pager.catalog_index(), 0);
        assert_eq!(pager.visible_items(&items), &["only"]);
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.has_next());
    }

    #[test]
    fn empty_list() {
        let items: [u8; 0] = [];
        let mut pager = CatalogPager::new(0);
        pager.next();
        pager.prev();
        assert_eq!(pager.catalog_index(), 0);
        assert_eq!(pager.total_pages(), 0);
        assert!(pager.visible_items(&items).is_empty());
    }

    #[test]
    fn set_index_and_total_clamp() {
        let mut pager = CatalogPager::new(10);
        pager.set_index(42);
        assert_eq!(pager.catalog_index(), 7);

        pager.set_total_items(5);
        assert_eq!(pager.catalog_index(), 2);
        pager.reset();
        assert_eq!(pager.catalog_index(), 0);
    }
}
