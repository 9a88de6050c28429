use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Page sizes offered by the listing grid
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [4, 8, 12, 16];

pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("page and page size must be at least 1 (got page {page}, size {per_page})")]
pub struct InvalidPageRequest {
    pub page: usize,
    pub per_page: usize,
}

/// A 1-based page number plus page size, both at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Result<Self, InvalidPageRequest> {
        if page == 0 || per_page == 0 {
            return Err(InvalidPageRequest { page, per_page });
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn apply<T: Clone>(&self, items: &[T]) -> PageResult<T> {
        paginate(items, self.page, self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Display metadata for a page.
///
/// `start_index` and `end_index` are 1-based and inclusive. An empty
/// collection reports both as 0 and `total_pages` as 0.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl PageMeta {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers to render, with `None` marking an elided gap
    pub fn page_window(&self) -> Vec<Option<usize>> {
        PageWindow::default().pages(self.total_pages, self.current_page)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Slice `items` into the requested page.
///
/// A zero page or page size is clamped to 1. Pages past the end yield no
/// items while the metadata keeps following the same formulas.
pub fn paginate<T: Clone>(items: &[T], current_page: usize, items_per_page: usize) -> PageResult<T> {
    let current_page = current_page.max(1);
    let items_per_page = items_per_page.max(1);

    let total_items = items.len();
    let total_pages = total_items.div_ceil(items_per_page);

    let start = (current_page - 1).saturating_mul(items_per_page);
    let end = start.saturating_add(items_per_page);
    let page_items = if start < total_items {
        items[start..end.min(total_items)].to_vec()
    } else {
        Vec::new()
    };

    let (start_index, end_index) = if total_items == 0 {
        (0, 0)
    } else {
        (start.saturating_add(1), end.min(total_items))
    };

    debug!(
        "Page {}/{} holds {} of {} items",
        current_page,
        total_pages,
        page_items.len(),
        total_items
    );

    PageResult {
        items: page_items,
        meta: PageMeta {
            current_page,
            items_per_page,
            total_items,
            total_pages,
            start_index,
            end_index,
        },
    }
}

/// How many page numbers the pager shows around the edges and the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Pages always shown at each end
    pub edge: usize,
    /// Pages shown before the current one
    pub before: usize,
    /// Pages shown after the current one
    pub after: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            edge: 2,
            before: 2,
            after: 4,
        }
    }
}

impl PageWindow {
    /// Page numbers for `current` out of `total`, with `None` where a run is elided
    pub fn pages(&self, total: usize, current: usize) -> Vec<Option<usize>> {
        if total == 0 {
            return Vec::new();
        }

        let head = 1..=self.edge.min(total);
        let middle = current.saturating_sub(self.before).max(1)
            ..=current.saturating_add(self.after).min(total);
        let tail = total.saturating_sub(self.edge).saturating_add(1).max(1)..=total;

        let mut pages: Vec<Option<usize>> = Vec::new();
        let mut last_shown = 0;
        for range in [head, middle, tail] {
            for page in range {
                if page <= last_shown {
                    continue;
                }
                if page > last_shown + 1 {
                    pages.push(None);
                }
                pages.push(Some(page));
                last_shown = page;
            }
        }
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_of_five() {
        let items = vec!['a', 'b', 'c', 'd', 'e'];
        let page = paginate(&items, 2, 2);

        assert_eq!(page.items, vec!['c', 'd']);
        assert_eq!(page.meta.start_index, 3);
        assert_eq!(page.meta.end_index, 4);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.total_items, 5);
    }

    #[test]
    fn last_page_is_short() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 3, 2);
        assert_eq!(page.items, vec![5]);
        assert_eq!((page.meta.start_index, page.meta.end_index), (5, 5));
        assert!(page.meta.has_previous());
        assert!(!page.meta.has_next());
    }

    #[test]
    fn page_past_the_end_is_empty_but_well_formed() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 9, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.meta.current_page, 9);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.start_index, 17);
        assert_eq!(page.meta.end_index, 5);
    }

    #[test]
    fn empty_collection_uses_zero_sentinel() {
        let items: Vec<u32> = vec![];
        let page = paginate(&items, 1, 8);
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total_pages, 0);
        assert_eq!((page.meta.start_index, page.meta.end_index), (0, 0));
        assert!(!page.meta.has_previous());
        assert!(!page.meta.has_next());
        assert!(page.meta.page_window().is_empty());
    }

    #[test]
    fn zero_inputs_are_clamped() {
        let items: Vec<u32> = (1..=3).collect();
        let page = paginate(&items, 0, 0);
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.items_per_page, 1);
    }

    #[test]
    fn page_request_rejects_zero() {
        assert_eq!(
            PageRequest::new(0, 8),
            Err(InvalidPageRequest { page: 0, per_page: 8 })
        );
        let request = PageRequest::new(2, 4).unwrap();
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(request.apply(&items).items, vec![5, 6, 7, 8]);
        assert_eq!(PageRequest::default().per_page(), DEFAULT_PAGE_SIZE);
        assert!(PAGE_SIZE_OPTIONS.contains(&DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn window_elides_distant_pages() {
        assert_eq!(
            PageWindow::default().pages(20, 10),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20)
            ]
        );
        assert_eq!(
            PageWindow::default().pages(3, 1),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn window_for_stale_page_keeps_both_ends() {
        let narrow = PageWindow {
            edge: 1,
            before: 1,
            after: 1,
        };
        assert_eq!(
            narrow.pages(10, 5),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(narrow.pages(4, 12), vec![Some(1), None, Some(4)]);
    }
}
