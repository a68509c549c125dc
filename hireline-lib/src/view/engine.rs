//! Filtering, pagination, and the derived roster view

use log::trace;

use super::Column;
use super::FilterCriteria;
use super::Selection;
use crate::model::Candidate;

/// Filters a record collection against the criteria.
///
/// The result is a subsequence of the input: stable, order-preserving, with
/// every returned record satisfying [`FilterCriteria::matches`]. Empty
/// criteria return the input unchanged.
pub fn filter<'a>(records: &'a [Candidate], criteria: &FilterCriteria) -> Vec<&'a Candidate> {
    let filtered: Vec<&Candidate> = records.iter().filter(|c| criteria.matches(c)).collect();
    trace!("filter: {} of {} records pass", filtered.len(), records.len());
    filtered
}

/// One page of a row collection, with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a, T> {
    items: &'a [T],
    page: usize,
    total_pages: usize,
    total_items: usize,
}

impl<'a, T> PageSlice<'a, T> {
    /// The rows on this page (never more than the page size).
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// The clamped, 1-indexed page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Total pages (`ceil(total / page_size)`; 0 when there are no rows).
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Total rows across all pages.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Whether pagination controls should be drawn at all.
    pub fn show_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slices out the 1-indexed `page` of `rows`.
///
/// Defensive on both ends: page 0 is treated as page 1, and a page beyond
/// the last clamps to the last page instead of panicking or returning
/// garbage. A zero page size yields an empty page.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    if page_size == 0 || rows.is_empty() {
        return PageSlice {
            items: &rows[0..0],
            page: 1,
            total_pages: 0,
            total_items: rows.len(),
        };
    }

    let total_pages = rows.len().div_ceil(page_size);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());

    PageSlice {
        items: &rows[start..end],
        page,
        total_pages,
        total_items: rows.len(),
    }
}

/// One rendered row of the roster table.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    /// The candidate's id.
    pub id: i64,
    /// Whether the row's checkbox is checked.
    pub selected: bool,
    /// Projected cell text, one per visible column.
    pub cells: Vec<String>,
}

/// The fully derived table view: filtered, paginated, column-projected rows
/// plus the selection metadata the header checkbox and bulk actions need.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterView {
    /// Rows on the current page.
    pub rows: Vec<RosterRow>,
    /// Header labels for the visible columns.
    pub headers: Vec<&'static str>,
    /// Clamped, 1-indexed current page.
    pub page: usize,
    /// Total pages over the filtered set.
    pub total_pages: usize,
    /// Size of the filtered set (all pages).
    pub total_filtered: usize,
    /// Every filtered id, across all pages; the scope of "select all".
    pub filtered_ids: Vec<i64>,
    /// Whether every filtered id is currently selected.
    pub all_filtered_selected: bool,
}

impl RosterView {
    /// Derives the complete view in one call.
    ///
    /// Pure: the same inputs always produce the same view, and nothing is
    /// mutated. The caller re-invokes this on every filter, page, column, or
    /// selection change.
    pub fn build(
        records: &[Candidate],
        criteria: &FilterCriteria,
        page: usize,
        page_size: usize,
        visible: &[Column],
        selection: &Selection,
    ) -> Self {
        let filtered = filter(records, criteria);
        let filtered_ids: Vec<i64> = filtered.iter().map(|c| c.id).collect();
        let slice = paginate(&filtered, page, page_size);

        let rows = slice
            .items()
            .iter()
            .map(|candidate| RosterRow {
                id: candidate.id,
                selected: selection.contains(candidate.id),
                cells: visible.iter().map(|col| col.cell(candidate)).collect(),
            })
            .collect();

        RosterView {
            rows,
            headers: visible.iter().map(Column::label).collect(),
            page: slice.page(),
            total_pages: slice.total_pages(),
            total_filtered: slice.total_items(),
            all_filtered_selected: selection.all_selected(&filtered_ids),
            filtered_ids,
        }
    }

    /// Whether pagination controls should be drawn.
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SearchTab;

    fn roster() -> Vec<Candidate> {
        (1..=7)
            .map(|i| Candidate {
                id: i,
                first_name: Some(format!("C{i}")),
                role: Some(if i % 2 == 0 { "Vendor" } else { "Recruiter" }.to_string()),
                agency_id: Some(5),
                skill: vec![format!("skill{i}")],
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_filter_identity_without_criteria() {
        let records = roster();
        let filtered = filter(&records, &FilterCriteria::new());
        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn test_filter_is_stable_subsequence() {
        let records = roster();
        let criteria = FilterCriteria::new().with_role("Recruiter");
        let ids: Vec<i64> = filter(&records, &criteria).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_paginate_bounds() {
        let rows: Vec<i32> = (0..7).collect();
        let slice = paginate(&rows, 1, 3);
        assert_eq!(slice.items(), &[0, 1, 2]);
        assert_eq!(slice.total_pages(), 3);
        assert!(slice.show_controls());

        let last = paginate(&rows, 3, 3);
        assert_eq!(last.items(), &[6]);

        // Out-of-range pages clamp instead of panicking.
        assert_eq!(paginate(&rows, 99, 3).items(), &[6]);
        assert_eq!(paginate(&rows, 0, 3).items(), &[0, 1, 2]);
    }

    #[test]
    fn test_paginate_empty_and_degenerate() {
        let rows: Vec<i32> = Vec::new();
        let slice = paginate(&rows, 1, 5);
        assert!(slice.is_empty());
        assert_eq!(slice.total_pages(), 0);
        assert!(!slice.show_controls());

        let rows = vec![1, 2];
        assert!(paginate(&rows, 1, 0).is_empty());
        assert!(!paginate(&rows, 1, 5).show_controls());
    }

    #[test]
    fn test_pages_concatenate_to_filtered_set() {
        let rows: Vec<i32> = (0..10).collect();
        let mut rebuilt = Vec::new();
        let total_pages = paginate(&rows, 1, 4).total_pages();
        for page in 1..=total_pages {
            let slice = paginate(&rows, page, 4);
            assert!(slice.items().len() <= 4);
            rebuilt.extend_from_slice(slice.items());
        }
        assert_eq!(rebuilt, rows);
    }

    #[test]
    fn test_roster_view_projection_and_selection() {
        let records = roster();
        let mut selection = Selection::new();
        selection.toggle(1);

        let view = RosterView::build(
            &records,
            &FilterCriteria::new().with_role("Recruiter"),
            1,
            2,
            &[Column::Name, Column::Role],
            &selection,
        );

        assert_eq!(view.headers, vec!["Name", "Role"]);
        assert_eq!(view.total_filtered, 4);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].cells, vec!["C1".to_string(), "Recruiter".to_string()]);
        assert!(view.rows[0].selected);
        assert!(!view.rows[1].selected);
        assert_eq!(view.filtered_ids, vec![1, 3, 5, 7]);
        assert!(!view.all_filtered_selected);
    }

    #[test]
    fn test_select_all_is_filter_scoped_union() {
        // The end-to-end contract: filter to Recruiters, select all, switch
        // the filter to Vendors, select all again; the selection is the
        // union of both filtered views.
        let records = vec![
            Candidate {
                id: 1,
                first_name: Some("A".to_string()),
                last_name: Some("B".to_string()),
                role: Some("Recruiter".to_string()),
                agency_id: Some(5),
                skill: vec!["Go".to_string()],
                ..Default::default()
            },
            Candidate {
                id: 2,
                first_name: Some("C".to_string()),
                last_name: Some("D".to_string()),
                role: Some("Vendor".to_string()),
                agency_id: Some(5),
                skill: vec!["SQL".to_string()],
                ..Default::default()
            },
        ];
        let mut selection = Selection::new();

        let recruiters = FilterCriteria::new().with_role("Recruiter");
        let view = RosterView::build(&records, &recruiters, 1, 20, &Column::ALL, &selection);
        assert_eq!(view.filtered_ids, vec![1]);
        selection.toggle_all_visible(&view.filtered_ids);
        assert_eq!(selection.ids(), vec![1]);

        let vendors = FilterCriteria::new().with_role("Vendor");
        let view = RosterView::build(&records, &vendors, 1, 20, &Column::ALL, &selection);
        assert_eq!(view.filtered_ids, vec![2]);
        selection.toggle_all_visible(&view.filtered_ids);
        assert_eq!(selection.ids(), vec![1, 2]);
    }

    #[test]
    fn test_refetch_drops_deleted_record_from_view() {
        // Deleting a candidate backend-side then refetching must remove it
        // from every derived view with no special tracking.
        let mut records = roster();
        let before = RosterView::build(
            &records,
            &FilterCriteria::new(),
            1,
            20,
            &Column::ALL,
            &Selection::new(),
        );
        assert!(before.filtered_ids.contains(&2));

        records.retain(|c| c.id != 2);
        let after = RosterView::build(
            &records,
            &FilterCriteria::new(),
            1,
            20,
            &Column::ALL,
            &Selection::new(),
        );
        assert!(!after.filtered_ids.contains(&2));
        assert_eq!(after.total_filtered, before.total_filtered - 1);
    }

    #[test]
    fn test_tab_criteria_flow_through_build() {
        let mut records = roster();
        records[0].current_ctc = Some("5".to_string());
        let criteria = FilterCriteria::new()
            .on_tab(SearchTab::CtcRange)
            .with_query("4-6");
        let view = RosterView::build(&records, &criteria, 1, 20, &Column::ALL, &Selection::new());
        assert_eq!(view.filtered_ids, vec![1]);
    }
}
