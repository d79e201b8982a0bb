//! State of the directory page.
//!
//! `DirectoryState` is the single owner of the role selection, the table
//! model and the debounced column-filter inputs. The UI reads it, renders,
//! and writes back only through the methods here.

use std::any::Any;
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use directory_states::State;
use ustr::Ustr;

use crate::columns::{ColumnId, directory_columns};
use crate::table::{TableModel, TableView};
use crate::{Dataset, Debounced, DirectoryConfig, Person, RoleFilter, distinct_roles};

#[derive(Debug)]
pub struct DirectoryState {
    dataset: Dataset,
    roles: Vec<Ustr>,
    role_filter: RoleFilter,
    /// Indices into `dataset` of the rows passing the role filter.
    filtered: Vec<usize>,
    table: TableModel,
    /// Debounced inputs of the filterable columns, present while the filter
    /// row is shown.
    filter_inputs: BTreeMap<ColumnId, Debounced>,
    debounce: Duration,
    load_error: Option<String>,
}

impl DirectoryState {
    pub fn new(dataset: Dataset, config: &DirectoryConfig) -> Self {
        let roles = distinct_roles(dataset.people());
        let role_filter = RoleFilter::new();
        let filtered = role_filter.filter_indices(dataset.people());
        log::info!(
            "Directory ready with {} people and {} roles",
            dataset.len(),
            roles.len()
        );

        Self {
            dataset,
            roles,
            role_filter,
            filtered,
            table: TableModel::new(directory_columns(), config.page_size()),
            filter_inputs: BTreeMap::new(),
            debounce: config.debounce(),
            load_error: None,
        }
    }

    /// Loads the configured dataset, falling back to the bundled one.
    pub fn load(config: &DirectoryConfig) -> Self {
        match Dataset::load(config) {
            Ok(dataset) => Self::new(dataset, config),
            Err(err) => {
                log::error!("{err}");
                let message = err.to_string();
                let dataset = match Dataset::bundled() {
                    Ok(dataset) => dataset,
                    Err(bundled_err) => {
                        log::error!("{bundled_err}");
                        Dataset::default()
                    }
                };
                let mut state = Self::new(dataset, config);
                state.load_error = Some(message);
                state
            }
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Role options in first-seen order.
    pub fn roles(&self) -> &[Ustr] {
        &self.roles
    }

    pub fn role_filter(&self) -> &RoleFilter {
        &self.role_filter
    }

    pub fn selected_roles(&self) -> &[Ustr] {
        self.role_filter.selected()
    }

    /// Replaces the role selection and re-derives the rows.
    pub fn set_selected_roles(&mut self, roles: impl IntoIterator<Item = Ustr>) -> bool {
        if !self.role_filter.set_selected(roles) {
            return false;
        }
        self.filtered = self.role_filter.filter_indices(self.dataset.people());
        self.table.reset_page_index();
        true
    }

    /// Rows passing the role filter, in dataset order.
    pub fn filtered_rows(&self) -> Vec<&Person> {
        let people = self.dataset.people();
        self.filtered.iter().map(|index| &people[*index]).collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn table(&self) -> &TableModel {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableModel {
        &mut self.table
    }

    /// The visible page after role filter, column filters, sort and pagination.
    pub fn view(&self) -> TableView<'_> {
        self.table.apply(&self.filtered_rows())
    }

    pub fn set_column_filter(&mut self, id: ColumnId, value: impl Into<String>) -> bool {
        self.table.set_column_filter(id, value)
    }

    /// Clears every column filter; open inputs pick the change up on their next sync.
    pub fn clear_column_filters(&mut self) -> bool {
        self.table.clear_column_filters()
    }

    pub fn show_column_filters(&self) -> bool {
        self.table.show_column_filters()
    }

    /// Shows or hides the filter row.
    ///
    /// Showing mounts a fresh debounced input per filterable column, seeded
    /// with the committed filter. Hiding tears them down so no pending
    /// commit can land afterwards.
    pub fn set_show_column_filters(&mut self, show: bool) {
        if show == self.table.show_column_filters() {
            return;
        }
        self.table.set_show_column_filters(show);

        if show {
            for column in self.table.columns().iter().filter(|c| c.is_filterable()) {
                let input = Debounced::new(self.table.column_filter(column.id), self.debounce);
                self.filter_inputs.insert(column.id, input);
            }
        } else {
            for (_, mut input) in std::mem::take(&mut self.filter_inputs) {
                input.teardown();
            }
        }
    }

    pub fn toggle_column_filters(&mut self) {
        self.set_show_column_filters(!self.show_column_filters());
    }

    /// The mounted input of a column together with its committed value.
    pub fn filter_input(&mut self, id: ColumnId) -> Option<(&mut Debounced, &str)> {
        let input = self.filter_inputs.get_mut(&id)?;
        Some((input, self.table.column_filter(id)))
    }

    /// Applies every debounced commit that is due at `now`.
    ///
    /// Returns the time until the next pending commit, if any, so the caller
    /// can schedule a repaint.
    pub fn poll_filter_inputs(&mut self, now: DateTime<Utc>) -> Option<Duration> {
        let commits: Vec<(ColumnId, String)> = self
            .filter_inputs
            .iter_mut()
            .filter_map(|(id, input)| input.poll(now).map(|value| (*id, value)))
            .collect();

        for (id, value) in commits {
            self.table.set_column_filter(id, value);
        }
        let total = self.view().filtered_count;
        self.table.clamp_page_index(total);

        self.filter_inputs
            .values()
            .filter_map(|input| input.remaining(now))
            .min()
    }
}

impl State for DirectoryState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
