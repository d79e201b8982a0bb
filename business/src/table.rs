//! Table model: column filters, sorting, pagination and row selection.
//!
//! The model never owns rows. [`TableModel::apply`] takes the rows handed to
//! the table and derives the visible page in a fixed order:
//! column filters, then sort, then pagination.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use ustr::Ustr;

use crate::Person;
use crate::columns::{ColumnDescriptor, ColumnId, find_column};

pub const DEFAULT_PAGE_SIZE: usize = 10;

pub const PAGE_SIZE_OPTIONS: [usize; 8] = [5, 10, 15, 20, 25, 30, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: ColumnId,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` rows; an empty table still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Row range of the current page, clamped to the last page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let page_index = self.page_index.min(self.page_count(total) - 1);
        let start = (page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

/// The derived, visible slice of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Person>,
    pub page_index: usize,
    pub page_count: usize,
    /// Rows remaining after column filters, across all pages.
    pub filtered_count: usize,
    /// Index of the first visible row within the filtered rows.
    pub first_row: usize,
}

impl TableView<'_> {
    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    columns: &'static [ColumnDescriptor],
    column_filters: BTreeMap<ColumnId, String>,
    show_column_filters: bool,
    sort: Option<SortState>,
    pagination: Pagination,
    selected: BTreeSet<Ustr>,
}

impl TableModel {
    pub fn new(columns: &'static [ColumnDescriptor], page_size: usize) -> Self {
        Self {
            columns,
            column_filters: BTreeMap::new(),
            show_column_filters: false,
            sort: None,
            pagination: Pagination::new(page_size),
            selected: BTreeSet::new(),
        }
    }

    pub fn columns(&self) -> &'static [ColumnDescriptor] {
        self.columns
    }

    // ---- column filters ----

    pub fn column_filter(&self, id: ColumnId) -> &str {
        self.column_filters.get(&id).map_or("", String::as_str)
    }

    /// Sets the filter text of a filterable column; empty text removes it.
    ///
    /// Returns `true` when the filter changed. Changing a filter returns to
    /// the first page.
    pub fn set_column_filter(&mut self, id: ColumnId, value: impl Into<String>) -> bool {
        if !find_column(self.columns, id).is_some_and(ColumnDescriptor::is_filterable) {
            log::warn!("Ignoring filter for non-filterable column {id:?}");
            return false;
        }

        let value = value.into();
        let changed = if value.is_empty() {
            self.column_filters.remove(&id).is_some()
        } else if self.column_filter(id) == value {
            false
        } else {
            self.column_filters.insert(id, value);
            true
        };

        if changed {
            log::debug!("Column filter {id:?} set to {:?}", self.column_filter(id));
            self.reset_page_index();
        }
        changed
    }

    pub fn clear_column_filters(&mut self) -> bool {
        if self.column_filters.is_empty() {
            return false;
        }
        self.column_filters.clear();
        self.reset_page_index();
        true
    }

    pub fn has_column_filters(&self) -> bool {
        !self.column_filters.is_empty()
    }

    pub fn show_column_filters(&self) -> bool {
        self.show_column_filters
    }

    pub fn set_show_column_filters(&mut self, show: bool) {
        self.show_column_filters = show;
    }

    fn passes_column_filters(&self, person: &Person) -> bool {
        self.column_filters.iter().all(|(id, needle)| {
            id.text_value(person)
                .to_lowercase()
                .contains(&needle.to_lowercase())
        })
    }

    // ---- sorting ----

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn sort_direction(&self, id: ColumnId) -> Option<SortDirection> {
        self.sort
            .filter(|sort| sort.column == id)
            .map(|sort| sort.direction)
    }

    /// Cycles a sortable column: unsorted, ascending, descending, unsorted.
    pub fn toggle_sort(&mut self, id: ColumnId) {
        if !find_column(self.columns, id).is_some_and(|column| column.sortable) {
            log::warn!("Ignoring sort toggle for non-sortable column {id:?}");
            return;
        }

        let next = match self.sort_direction(id) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.sort = next.map(|direction| SortState {
            column: id,
            direction,
        });
        log::debug!("Sort changed: {:?}", self.sort);
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    // ---- pagination ----

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        if self.pagination.page_index != page_index {
            log::debug!("Page index changed to {page_index}");
            self.pagination.page_index = page_index;
        }
    }

    pub fn reset_page_index(&mut self) {
        self.set_page_index(0);
    }

    /// Changes the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if page_size == self.pagination.page_size {
            return;
        }
        let top_row = self
            .pagination
            .page_index
            .saturating_mul(self.pagination.page_size);
        self.pagination = Pagination {
            page_index: top_row / page_size,
            page_size,
        };
        log::debug!("Page size changed: {:?}", self.pagination);
    }

    /// Pulls the page index back onto the last page for `total` rows.
    pub fn clamp_page_index(&mut self, total: usize) {
        let last = self.pagination.page_count(total) - 1;
        if self.pagination.page_index > last {
            self.set_page_index(last);
        }
    }

    // ---- selection ----

    pub fn is_selected(&self, username: Ustr) -> bool {
        self.selected.contains(&username)
    }

    pub fn set_selected(&mut self, username: Ustr, selected: bool) {
        if selected {
            self.selected.insert(username);
        } else {
            self.selected.remove(&username);
        }
    }

    pub fn toggle_selected(&mut self, username: Ustr) {
        let selected = !self.is_selected(username);
        self.set_selected(username, selected);
    }

    pub fn set_all_selected(&mut self, usernames: impl IntoIterator<Item = Ustr>, selected: bool) {
        for username in usernames {
            self.set_selected(username, selected);
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // ---- derivation ----

    /// Derives the visible page from `rows`.
    pub fn apply<'a>(&self, rows: &[&'a Person]) -> TableView<'a> {
        let mut filtered: Vec<&'a Person> = rows
            .iter()
            .copied()
            .filter(|person| self.passes_column_filters(person))
            .collect();

        if let Some(SortState { column, direction }) = self.sort {
            // `sort_by` is stable, ties keep their incoming order.
            filtered.sort_by(|a, b| match direction {
                SortDirection::Ascending => column.compare(a, b),
                SortDirection::Descending => column.compare(b, a),
            });
        }

        let filtered_count = filtered.len();
        let range = self.pagination.range(filtered_count);
        let page_count = self.pagination.page_count(filtered_count);
        let page_index = self.pagination.page_index.min(page_count - 1);
        let first_row = range.start;

        TableView {
            rows: filtered[range].to_vec(),
            page_index,
            page_count,
            filtered_count,
            first_row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::directory_columns;
    use crate::test_utils::{person, twelve_people};

    fn model() -> TableModel {
        TableModel::new(directory_columns(), DEFAULT_PAGE_SIZE)
    }

    fn names<'a>(view: &TableView<'a>) -> Vec<&'a str> {
        view.rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn first_page_of_ten() {
        let people = twelve_people();
        let rows: Vec<&Person> = people.iter().collect();

        let view = model().apply(&rows);

        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.page_count, 2);
        assert_eq!(view.filtered_count, 12);
        assert!(view.has_next_page());
        assert!(!view.has_previous_page());
    }

    #[test]
    fn second_page_has_remainder() {
        let people = twelve_people();
        let rows: Vec<&Person> = people.iter().collect();
        let mut model = model();
        model.set_page_index(1);

        let view = model.apply(&rows);

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.first_row, 10);
        assert!(!view.has_next_page());
    }

    #[test]
    fn page_index_is_clamped_when_rows_shrink() {
        let people = twelve_people();
        let rows: Vec<&Person> = people.iter().take(4).collect();
        let mut model = model();
        model.set_page_index(1);

        let view = model.apply(&rows);
        assert_eq!(view.page_index, 0);
        assert_eq!(view.rows.len(), 4);

        model.clamp_page_index(rows.len());
        assert_eq!(model.pagination().page_index(), 0);
    }

    #[test]
    fn empty_rows_have_one_empty_page() {
        let view = model().apply(&[]);

        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 1);
        assert_eq!(view.filtered_count, 0);
    }

    #[test]
    fn name_filter_is_case_insensitive_containment() {
        let people = twelve_people();
        let rows: Vec<&Person> = people.iter().collect();
        let mut model = model();

        assert!(model.set_column_filter(ColumnId::Name, "AN"));
        let view = model.apply(&rows);

        assert_eq!(
            names(&view),
            vec!["Lana Steiner", "Candice Wu", "Drew Cano", "Orlando Diggs", "Andi Lane"]
        );
    }

    #[test]
    fn filter_change_resets_page() {
        let mut model = model();
        model.set_page_index(1);

        model.set_column_filter(ColumnId::Name, "a");

        assert_eq!(model.pagination().page_index(), 0);
    }

    #[test]
    fn empty_filter_removes_it() {
        let mut model = model();
        model.set_column_filter(ColumnId::Name, "olivia");

        assert!(model.set_column_filter(ColumnId::Name, ""));
        assert!(!model.has_column_filters());
        assert_eq!(model.column_filter(ColumnId::Name), "");
        assert!(!model.set_column_filter(ColumnId::Name, ""));
    }

    #[test]
    fn non_filterable_column_is_ignored() {
        let mut model = model();

        assert!(!model.set_column_filter(ColumnId::Email, "example"));
        assert!(!model.has_column_filters());
    }

    #[test]
    fn age_sort_cycles_and_is_stable() {
        let people = twelve_people();
        let rows: Vec<&Person> = people.iter().collect();
        let mut model = model();
        model.set_page_size(100);

        model.toggle_sort(ColumnId::Age);
        assert_eq!(model.sort_direction(ColumnId::Age), Some(SortDirection::Ascending));
        let ascending = model.apply(&rows);
        let ages: Vec<u32> = ascending.rows.iter().map(|p| p.age).collect();
        assert!(ages.windows(2).all(|w| w[0] <= w[1]), "ascending: {ages:?}");
        // Olivia precedes Demi in the dataset, both are 31.
        let olivia = names(&ascending).iter().position(|n| *n == "Olivia Rhye");
        let demi = names(&ascending).iter().position(|n| *n == "Demi Wilkinson");
        assert!(olivia < demi);

        model.toggle_sort(ColumnId::Age);
        assert_eq!(model.sort_direction(ColumnId::Age), Some(SortDirection::Descending));
        let descending = model.apply(&rows);
        let ages: Vec<u32> = descending.rows.iter().map(|p| p.age).collect();
        assert!(ages.windows(2).all(|w| w[0] >= w[1]), "descending: {ages:?}");
        // Phoenix precedes Drew in the dataset, both are 45.
        let phoenix = names(&descending).iter().position(|n| *n == "Phoenix Baker");
        let drew = names(&descending).iter().position(|n| *n == "Drew Cano");
        assert!(phoenix < drew);

        model.toggle_sort(ColumnId::Age);
        assert_eq!(model.sort(), None);
        let unsorted: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names(&model.apply(&rows)), unsorted);
    }

    #[test]
    fn unsortable_column_is_ignored() {
        let mut model = model();
        model.toggle_sort(ColumnId::Name);

        assert_eq!(model.sort(), None);
    }

    #[test]
    fn page_size_change_with_runaway_page_index() {
        let mut model = model();
        model.set_page_index(usize::MAX);

        model.set_page_size(5);
        model.clamp_page_index(12);

        assert_eq!(model.pagination().page_index(), 2);
    }

    #[test]
    fn page_size_change_keeps_top_row() {
        let mut model = TableModel::new(directory_columns(), 5);
        model.set_page_index(3); // rows 15..20

        model.set_page_size(10);

        assert_eq!(model.pagination().page_size(), 10);
        assert_eq!(model.pagination().page_index(), 1);
    }

    #[test]
    fn selection_is_keyed_by_username() {
        let people = twelve_people();
        let mut model = model();

        model.toggle_selected(people[0].username);
        model.set_all_selected(people.iter().skip(10).map(|p| p.username), true);
        assert_eq!(model.selected_count(), 3);
        assert!(model.is_selected(people[0].username));

        model.toggle_selected(people[0].username);
        assert!(!model.is_selected(people[0].username));

        model.clear_selection();
        assert_eq!(model.selected_count(), 0);
    }

    #[test]
    fn filters_combine_with_sort_and_pages() {
        let people: Vec<Person> = (0..25)
            .map(|i| person(&format!("Person {i}"), "Engineer", 60 - i))
            .collect();
        let rows: Vec<&Person> = people.iter().collect();
        let mut model = model();
        model.toggle_sort(ColumnId::Age);
        model.set_page_index(2);

        let view = model.apply(&rows);

        assert_eq!(view.page_count, 3);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].age, 56);
    }
}
