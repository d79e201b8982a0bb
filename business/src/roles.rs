//! Role options and the multi-select role filter.

use std::collections::HashSet;

use ustr::Ustr;

use crate::Person;

/// Distinct roles across `people`, in first-seen order.
pub fn distinct_roles(people: &[Person]) -> Vec<Ustr> {
    let mut seen = HashSet::with_capacity(people.len());
    people
        .iter()
        .map(|person| person.role)
        .filter(|role| seen.insert(*role))
        .collect()
}

/// Selected roles. An empty selection matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFilter {
    selected: Vec<Ustr>,
}

impl RoleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole selection. Returns `true` when it changed.
    ///
    /// Selection order is kept for display, duplicates are dropped.
    pub fn set_selected(&mut self, roles: impl IntoIterator<Item = Ustr>) -> bool {
        let mut seen = HashSet::new();
        let selected: Vec<Ustr> = roles.into_iter().filter(|role| seen.insert(*role)).collect();
        if selected == self.selected {
            return false;
        }
        log::debug!("Role selection changed: {selected:?}");
        self.selected = selected;
        true
    }

    /// Selection with `role` added or removed.
    pub fn toggled(&self, role: Ustr) -> Vec<Ustr> {
        if self.is_selected(role) {
            self.selected
                .iter()
                .copied()
                .filter(|selected| *selected != role)
                .collect()
        } else {
            self.selected.iter().copied().chain([role]).collect()
        }
    }

    pub fn clear(&mut self) -> bool {
        self.set_selected([])
    }

    pub fn selected(&self) -> &[Ustr] {
        &self.selected
    }

    pub fn is_selected(&self, role: Ustr) -> bool {
        self.selected.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.selected.is_empty() || self.is_selected(person.role)
    }

    /// Indices into `people` of the rows that pass the filter.
    pub fn filter_indices(&self, people: &[Person]) -> Vec<usize> {
        people
            .iter()
            .enumerate()
            .filter(|(_, person)| self.matches(person))
            .map(|(index, _)| index)
            .collect()
    }
}
