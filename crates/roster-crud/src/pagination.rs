// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pagination engine.
//!
//! [`PageRequest::resolve`] clamps the requested page against the item count
//! and yields the offset/limit pushed to the repository. [`Page::new`] wraps
//! the fetched slice with the navigation metadata the list view renders.

use serde::Serialize;

/// A resolved page position, computed before the slice is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based, clamped to `[1, pages]` (1 when there are no items).
    pub page_num: u64,
    pub page_size: u64,
    pub total: u64,
    pub pages: u64,
}

impl PageRequest {
    /// Clamp `requested` into range. Absent or non-positive means page 1; past
    /// the end means the last page.
    pub fn resolve(requested: Option<i64>, total: u64, page_size: u64) -> Self {
        let page_size = page_size.max(1);
        let pages = total.div_ceil(page_size);
        let requested = match requested {
            Some(n) if n > 0 => n.unsigned_abs(),
            _ => 1,
        };
        Self {
            page_num: requested.min(pages.max(1)),
            page_size,
            total,
            pages,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page_num - 1) * self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

/// One page of an ordered result set plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page_num: u64,
    pub page_size: u64,
    /// Items on this page.
    pub size: u64,
    /// 1-based row number of the first item, 0 for an empty page.
    pub start_row: u64,
    pub end_row: u64,
    pub total: u64,
    pub pages: u64,
    pub list: Vec<T>,
    /// 0 when there is no previous page.
    pub pre_page: u64,
    /// 0 when there is no next page.
    pub next_page: u64,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub navigate_pages: u64,
    pub navigatepage_nums: Vec<u64>,
    pub navigate_first_page: u64,
    pub navigate_last_page: u64,
}

impl<T> Page<T> {
    pub fn new(list: Vec<T>, request: PageRequest, navigate_pages: u64) -> Self {
        let PageRequest {
            page_num,
            page_size,
            total,
            pages,
        } = request;
        let size = list.len() as u64;
        let start_row = if size == 0 { 0 } else { request.offset() + 1 };
        let end_row = if size == 0 { 0 } else { start_row + size - 1 };
        let has_previous_page = page_num > 1;
        let has_next_page = page_num < pages;
        let window = navigate_window(page_num, pages, navigate_pages);

        Self {
            page_num,
            page_size,
            size,
            start_row,
            end_row,
            total,
            pages,
            list,
            pre_page: if has_previous_page { page_num - 1 } else { 0 },
            next_page: if has_next_page { page_num + 1 } else { 0 },
            is_first_page: page_num == 1,
            is_last_page: pages == 0 || page_num == pages,
            has_previous_page,
            has_next_page,
            navigate_pages,
            navigate_first_page: window.first().copied().unwrap_or(0),
            navigate_last_page: window.last().copied().unwrap_or(0),
            navigatepage_nums: window,
        }
    }
}

/// The run of page numbers shown around `page_num`.
///
/// Centered when possible, shifted to stay inside `[1, pages]` near either
/// end, and `1..=pages` when the whole range fits in `width`.
pub fn navigate_window(page_num: u64, pages: u64, width: u64) -> Vec<u64> {
    let width = width.max(1);
    if pages <= width {
        return (1..=pages).collect();
    }
    let half = width / 2;
    if page_num <= half {
        (1..=width).collect()
    } else if page_num + half > pages {
        (pages - width + 1..=pages).collect()
    } else {
        let start = page_num - half;
        (start..start + width).collect()
    }
}
