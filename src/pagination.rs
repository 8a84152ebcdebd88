//! Page window used by the server-rendered employee table.

use serde::Serialize;

/// Pages always shown at each end of the window.
const EDGE_PAGES: usize = 2;
/// Pages shown on each side of the current page.
const AROUND_CURRENT: usize = 2;

/// Returns the page numbers to render, `None` marking an elided gap.
fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let mut links = Vec::new();
    let mut previous = 0;

    for page in 1..=total_pages {
        let near_edge = page <= EDGE_PAGES || page + EDGE_PAGES > total_pages;
        let near_current = page.abs_diff(current_page) <= AROUND_CURRENT;
        if !(near_edge || near_current) {
            continue;
        }
        if page > previous + 1 {
            links.push(None);
        }
        links.push(Some(page));
        previous = page;
    }

    links
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, page_size: usize, total_pages: usize) -> Self {
        let page = current_page.max(1);

        Self {
            items,
            pages: page_links(total_pages, page),
            page,
            page_size,
            total_pages,
        }
    }
}
