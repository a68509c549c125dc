//! Multi-select state for bulk actions

use std::collections::BTreeSet;

/// The set of selected candidate ids.
///
/// Selection survives filter changes: selecting rows and then filtering them
/// out of view does not drop them. Bulk select is scoped to the current
/// filter view, not the whole table — see
/// [`toggle_all_visible`](Selection::toggle_all_visible).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<i64>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the id is selected.
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Toggles a single id.
    pub fn toggle(&mut self, id: i64) {
        if !self.ids.insert(id) {
            self.ids.remove(&id);
        }
    }

    /// The header-checkbox action, scoped to the currently visible
    /// (filtered) ids.
    ///
    /// If every visible id is already selected, exactly those are
    /// deselected — selections hidden by the filter are untouched.
    /// Otherwise all visible ids are added to the selection (union, not
    /// replace). Applied twice under a fixed visible set, this returns the
    /// selection to its original state.
    pub fn toggle_all_visible(&mut self, visible: &[i64]) {
        let all_selected = !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id));
        if all_selected {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(visible.iter().copied());
        }
    }

    /// Returns `true` if every id in `visible` is selected (and `visible` is
    /// non-empty). Drives the header checkbox.
    pub fn all_selected(&self, visible: &[i64]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    /// The selected ids in ascending order.
    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drops the whole selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_single() {
        let mut selection = Selection::new();
        selection.toggle(3);
        assert!(selection.contains(3));
        selection.toggle(3);
        assert!(!selection.contains(3));
    }

    #[test]
    fn test_toggle_all_unions_into_existing_selection() {
        let mut selection = Selection::new();
        selection.toggle(1);
        selection.toggle_all_visible(&[2, 3]);
        assert_eq!(selection.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_toggle_all_deselects_only_visible() {
        let mut selection = Selection::new();
        selection.toggle_all_visible(&[1, 2, 3]);
        // Filter changed; 1 is now hidden.
        selection.toggle_all_visible(&[2, 3]);
        assert_eq!(selection.ids(), vec![1]);
    }

    #[test]
    fn test_toggle_all_is_its_own_inverse() {
        let mut selection = Selection::new();
        selection.toggle(7);
        let before = selection.clone();
        selection.toggle_all_visible(&[1, 2]);
        selection.toggle_all_visible(&[1, 2]);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_partial_selection_completes_to_union() {
        let mut selection = Selection::new();
        selection.toggle(1);
        // Not every visible id is selected, so this selects, not deselects.
        selection.toggle_all_visible(&[1, 2]);
        assert_eq!(selection.ids(), vec![1, 2]);
    }

    #[test]
    fn test_empty_visible_set_is_a_no_op() {
        let mut selection = Selection::new();
        selection.toggle(1);
        selection.toggle_all_visible(&[]);
        assert_eq!(selection.ids(), vec![1]);
        assert!(!selection.all_selected(&[]));
    }
}
