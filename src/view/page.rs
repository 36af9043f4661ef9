//! Sort + paginate projection

use std::num::NonZeroUsize;
use crate::utils::helpers::{calculate_offset, create_pagination_info};
use super::compare::{compare_values, Sortable};
use super::state::{SortDirection, ViewState};

/// One rendered page of a table
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, R> {
    pub items: Vec<&'a R>,
    /// 1-based page actually shown
    pub page: usize,
    /// `ceil(total_records / page_size)`; zero for an empty table
    pub total_pages: usize,
    pub total_records: usize,
}

impl<R> Page<'_, R> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Footer text such as `Page 2 of 4 (Total: 17)`
    pub fn info(&self) -> String {
        create_pagination_info(self.page, self.total_pages, self.total_records)
    }
}

/// Number of pages needed for `count` records
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// Records in display order. Equal keys keep their input order in both
/// directions; descending order swaps the comparator operands rather than
/// reversing the result.
pub fn sorted<'a, R: Sortable>(records: &'a [R], state: &ViewState<R::Field>) -> Vec<&'a R> {
    let mut rows: Vec<&R> = records.iter().collect();
    if let Some(key) = state.sort() {
        rows.sort_by(|a, b| {
            let (a, b) = (a.sort_value(key.field), b.sort_value(key.field));
            match key.direction {
                SortDirection::Ascending => compare_values(&a, &b),
                SortDirection::Descending => compare_values(&b, &a),
            }
        });
    }
    rows
}

/// Sort `records` per `state` and cut out the current page
///
/// A cursor past the last page is clamped rather than producing an empty slice.
pub fn get_page<'a, R: Sortable>(
    records: &'a [R],
    state: &ViewState<R::Field>,
    page_size: NonZeroUsize,
) -> Page<'a, R> {
    let total_records = records.len();
    let total_pages = total_pages(total_records, page_size);
    let page = state.page().clamp(1, total_pages.max(1));

    let items = sorted(records, state)
        .into_iter()
        .skip(calculate_offset(page, page_size.get()))
        .take(page_size.get())
        .collect();

    Page {
        items,
        page,
        total_pages,
        total_records,
    }
}
