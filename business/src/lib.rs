//! Business logic for the people directory.
//!
//! Nothing here draws pixels. The UI crate renders what these types derive:
//! - `person`: the static dataset
//! - `roles`: role options and the role filter
//! - `columns`: column descriptors
//! - `teams`: chip layout for the Teams and Status columns
//! - `table`: column filters, sorting, pagination, selection
//! - `debounce`: the debounced text value behind column filter inputs
//! - `directory`: page state tying these together

pub mod columns;
mod config;
mod debounce;
mod directory;
mod error;
mod person;
mod roles;
pub mod table;
pub mod teams;

#[cfg(test)]
mod test_utils;

pub use columns::{CellKind, ColumnDescriptor, ColumnFilter, ColumnId, directory_columns};
pub use config::{DEFAULT_DEBOUNCE_MS, DirectoryConfig, MAX_DEBOUNCE_MS};
pub use debounce::{Debounced, default_debounce};
pub use directory::DirectoryState;
pub use error::DatasetError;
pub use person::{BUNDLED_DATASET, Dataset, Person};
pub use roles::{RoleFilter, distinct_roles};
pub use table::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, Pagination, SortDirection, SortState, TableModel,
    TableView,
};
pub use teams::{ChipColors, STATUS_CHIP_COLORS, TEAM_CHIP_PALETTE, TeamChip, team_chips};
