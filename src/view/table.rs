//! In-memory admin table session

use std::num::NonZeroUsize;
use super::compare::Sortable;
use super::page::{get_page, total_pages, Page};
use super::state::{PageDirection, ViewState};
use crate::utils::logging::log_view_change;

/// Records loaded for one admin table together with its view cursor
///
/// The table owns a read-only copy of the records; every reload replaces the
/// whole list.
#[derive(Debug, Clone)]
pub struct RecordTable<R: Sortable> {
    records: Vec<R>,
    view: ViewState<R::Field>,
    page_size: NonZeroUsize,
    label: &'static str,
}

impl<R: Sortable> RecordTable<R> {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            records: Vec::new(),
            view: ViewState::default(),
            page_size,
            label: "records",
        }
    }

    pub fn with_view(page_size: NonZeroUsize, view: ViewState<R::Field>) -> Self {
        Self {
            records: Vec::new(),
            view,
            page_size,
            label: "records",
        }
    }

    /// Name used when logging view changes
    pub fn labeled(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Swap in a freshly loaded list, keeping sort and clamping the page
    pub fn replace(&mut self, records: Vec<R>) {
        self.records = records;
        self.view.clamp(self.total_pages());
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn view(&self) -> &ViewState<R::Field> {
        &self.view
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.records.len(), self.page_size)
    }

    pub fn set_sort(&mut self, field: R::Field) {
        self.view.set_sort(field);
        self.log_view();
    }

    pub fn change_page(&mut self, direction: PageDirection) -> bool {
        let total = self.total_pages();
        let moved = self.view.change_page(direction, total);
        if moved {
            self.log_view();
        }
        moved
    }

    fn log_view(&self) {
        let sort = self.view.sort();
        let field = sort.map(|key| format!("{:?}", key.field));
        let ascending = sort.map_or(true, |key| key.direction.is_ascending());
        log_view_change(self.label, field.as_deref(), ascending, self.view.page());
    }

    pub fn current_page(&self) -> Page<'_, R> {
        get_page(&self.records, &self.view, self.page_size)
    }

    pub fn find<P>(&self, predicate: P) -> Option<&R>
    where
        P: FnMut(&&R) -> bool,
    {
        self.records.iter().find(predicate)
    }
}
