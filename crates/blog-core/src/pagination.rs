//! Pagination
//!
//! Page slicing and the bounded page-number window.
//!
//! The window shows at most `width` numbers starting two before the current
//! page. When the end is clamped by the last page the start is pulled back so
//! the window stays full; the start clamping at page 1 never pushes the end
//! forward. Page 1 and the last page are always reachable, with an ellipsis
//! wherever a gap remains.

use std::ops::Range;

use blog_a11y::{Announcer, Politeness};

/// Default number of page buttons in the window
pub const DEFAULT_WINDOW: usize = 5;

/// One entry of the rendered page list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl PageItem {
    pub fn page(&self) -> Option<usize> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Ellipsis => None,
        }
    }

    /// Accessible name of the button, `None` for an ellipsis
    pub fn aria_label(&self, current_page: usize) -> Option<String> {
        match self {
            Self::Page(n) if *n == current_page => Some(format!("Current page, page {n}")),
            Self::Page(n) => Some(format!("Go to page {n}")),
            Self::Ellipsis => None,
        }
    }
}

/// Everything the render layer needs to draw one page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    /// Half-open index range of the visible items
    pub visible_range: Range<usize>,
    pub page_numbers: Vec<PageItem>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageWindow {
    /// No navigation renders for zero or one page
    pub fn is_degenerate(&self) -> bool {
        self.total_pages <= 1
    }

    /// Page numbers in the list, ellipses dropped
    pub fn numeric_pages(&self) -> Vec<usize> {
        self.page_numbers.iter().filter_map(PageItem::page).collect()
    }

    pub fn status_text(&self, total_items: usize) -> String {
        format!("Page {} of {} ({} total posts)", self.current_page, self.total_pages, total_items)
    }

    pub fn section_label(&self, total_items: usize) -> String {
        format!(
            "{} blog posts, showing {} on page {}",
            total_items,
            self.visible_range.len(),
            self.current_page
        )
    }
}

/// `ceil(total_items / page_size)`, 0 for an empty set
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, max(1, total_pages)]`
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1) as i64;
    requested.clamp(1, last) as usize
}

pub fn page_announcement(page: usize) -> String {
    format!("Moved to page {page}")
}

/// Compute the window for the default width
pub fn paginate(total_items: usize, page_size: usize, current_page: usize) -> PageWindow {
    paginate_with_width(total_items, page_size, current_page, DEFAULT_WINDOW)
}

/// Compute the window showing at most `width` page numbers.
///
/// `current_page` is clamped into range first.
pub fn paginate_with_width(total_items: usize, page_size: usize, current_page: usize, width: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let width = width.max(1);
    let total = total_pages(total_items, page_size);
    let current = current_page.clamp(1, total.max(1));

    let start_index = (current - 1).saturating_mul(page_size).min(total_items);
    let end_index = current.saturating_mul(page_size).min(total_items);

    let mut start_page = current.saturating_sub(width / 2).max(1);
    let end_page = start_page.saturating_add(width - 1).min(total);
    if end_page + 1 < start_page.saturating_add(width) {
        start_page = end_page.saturating_sub(width - 1).max(1);
    }

    let mut page_numbers = Vec::with_capacity(width.min(total) + 4);
    if start_page > 1 {
        page_numbers.push(PageItem::Page(1));
        if start_page > 2 {
            page_numbers.push(PageItem::Ellipsis);
        }
    }
    page_numbers.extend((start_page..=end_page).map(PageItem::Page));
    if end_page < total {
        if end_page + 1 < total {
            page_numbers.push(PageItem::Ellipsis);
        }
        page_numbers.push(PageItem::Page(total));
    }

    PageWindow {
        current_page: current,
        total_pages: total,
        visible_range: start_index..end_index,
        page_numbers,
        has_prev: current > 1,
        has_next: current < total,
    }
}

/// Result of a page change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChange {
    pub page: usize,
    pub announcement: String,
    /// The render layer should move focus to the main content region
    pub focus_main: bool,
}

/// Stateful paginator over the current filtered set
#[derive(Debug, Clone)]
pub struct Paginator {
    announcer: Announcer,
    page_size: usize,
    width: usize,
    total_items: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(announcer: Announcer, page_size: usize, width: usize) -> Self {
        Self {
            announcer,
            page_size: page_size.max(1),
            width: width.max(1),
            total_items: 0,
            current_page: 1,
        }
    }

    /// Point the paginator at a new result set. Always returns to page 1.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    pub fn paginate(&self) -> PageWindow {
        paginate_with_width(self.total_items, self.page_size, self.current_page, self.width)
    }

    /// Move to `requested`, clamped into range, and announce it
    pub fn change_page(&mut self, requested: i64) -> PageChange {
        let page = clamp_page(requested, self.total_pages());
        if page as i64 != requested {
            tracing::debug!(requested, page, "page request clamped");
        }
        self.current_page = page;

        let announcement = page_announcement(page);
        self.announcer.announce(announcement.clone(), Politeness::Polite);
        PageChange { page, announcement, focus_main: true }
    }

    /// Step forward, `None` on the last page
    pub fn next_page(&mut self) -> Option<PageChange> {
        if self.current_page < self.total_pages() {
            Some(self.change_page(self.current_page as i64 + 1))
        } else {
            None
        }
    }

    /// Step back, `None` on the first page
    pub fn prev_page(&mut self) -> Option<PageChange> {
        if self.current_page > 1 {
            Some(self.change_page(self.current_page as i64 - 1))
        } else {
            None
        }
    }
}
