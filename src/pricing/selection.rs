//! Courses picked on the registration form

use uuid::Uuid;
use super::PriceQuote;

/// Set of selected course ids, kept in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<Uuid>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the course if absent, remove it if present.
    /// Returns whether the course is selected afterwards.
    pub fn toggle(&mut self, course_id: Uuid) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| *id == course_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(course_id);
            true
        }
    }

    pub fn contains(&self, course_id: &Uuid) -> bool {
        self.ids.contains(course_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that are no longer offered, e.g. after the catalog reloads
    pub fn retain_offered(&mut self, offered: &[Uuid]) {
        self.ids.retain(|id| offered.contains(id));
    }

    pub fn quote(&self) -> PriceQuote {
        PriceQuote::for_count(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Money;

    #[test]
    fn test_double_toggle_restores_absence() {
        let mut selection = Selection::new();
        let id = Uuid::new_v4();

        assert!(selection.toggle(id));
        assert!(selection.contains(&id));
        assert!(!selection.toggle(id));
        assert!(!selection.contains(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_quote_tracks_selection_size() {
        let mut selection = Selection::new();
        for _ in 0..3 {
            selection.toggle(Uuid::new_v4());
        }
        assert_eq!(selection.quote().total, Money::from_cents(13_500));

        let first = selection.ids()[0];
        selection.toggle(first);
        assert_eq!(selection.quote().total, Money::from_cents(10_000));
    }

    #[test]
    fn test_retain_offered() {
        let keep = Uuid::new_v4();
        let gone = Uuid::new_v4();
        let mut selection = Selection::new();
        selection.toggle(keep);
        selection.toggle(gone);

        selection.retain_offered(&[keep]);
        assert_eq!(selection.ids(), &[keep]);
    }
}
