use crate::core::models::page::Page;

/// Page cursor owned by one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: u32,
    page_size: u32,
    total_pages: Option<u32>,
}

impl Pager {
    /// Start on page 1. A zero page size is bumped to 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_pages: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Jump to a page (1-based; 0 is treated as 1).
    pub fn go_to(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Advance one page. Not capped: the feed decides whether it is empty.
    pub fn next(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    /// Go back one page, never below 1.
    pub fn previous(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Back to page 1, used when filters change.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.total_pages = None;
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Unknown totals allow moving forward.
    pub fn has_next(&self) -> bool {
        self.total_pages.is_none_or(|total| self.current_page < total)
    }

    /// Remember the paging fields the feed reported.
    pub fn observe<T>(&mut self, page: &Page<T>) {
        if let Some(total_pages) = page.total_pages {
            self.total_pages = Some(total_pages.max(1));
        } else if let Some(total) = page.total {
            let pages = total.div_ceil(u64::from(self.page_size)).max(1);
            self.total_pages = Some(u32::try_from(pages).unwrap_or(u32::MAX));
        }
    }
}
