//! Per-table sort and page cursor

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Page navigation requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageDirection {
    Prev,
    Next,
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Sort and page cursor of one admin table
///
/// The page is 1-based. It is only guaranteed to be in range after
/// [`ViewState::clamp`] has been called with the current page count, which
/// [`RecordTable`](super::RecordTable) does whenever its records change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<F> {
    sort: Option<SortKey<F>>,
    page: usize,
}

impl<F> Default for ViewState<F> {
    fn default() -> Self {
        Self { sort: None, page: 1 }
    }
}

impl<F: Copy + Eq> ViewState<F> {
    /// Unsorted, first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Start sorted by `field`
    pub fn sorted_by(field: F, direction: SortDirection) -> Self {
        Self {
            sort: Some(SortKey { field, direction }),
            page: 1,
        }
    }

    /// Sort by `field`: a repeated field flips the direction, a new field
    /// starts ascending. Either way the cursor returns to the first page.
    pub fn set_sort(&mut self, field: F) {
        let direction = match self.sort {
            Some(current) if current.field == field => current.direction.flipped(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortKey { field, direction });
        self.page = 1;
    }

    /// Return to input order
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.page = 1;
    }

    pub fn sort(&self) -> Option<SortKey<F>> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Step one page, staying within `[1, total_pages]`.
    /// Returns `false` when already at the boundary.
    pub fn change_page(&mut self, direction: PageDirection, total_pages: usize) -> bool {
        let last = total_pages.max(1);
        let target = match direction {
            PageDirection::Prev => self.page.saturating_sub(1).max(1),
            PageDirection::Next => (self.page + 1).min(last),
        };
        let moved = target != self.page;
        self.page = target;
        moved
    }

    /// Pull the cursor back into `[1, max(1, total_pages)]`
    pub fn clamp(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}
