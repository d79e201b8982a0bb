//! Column widths and row heights for the directory table.

use directory_business::ColumnDescriptor;
use egui_extras::Column;

/// Row selection checkbox column.
pub const SELECT_WIDTH: f32 = 32.0;
pub const MIN_COLUMN_WIDTH: f32 = 60.0;
/// Fits the 40px avatar with padding.
pub const ROW_HEIGHT: f32 = 56.0;
pub const HEADER_HEIGHT: f32 = 32.0;
/// Header height while the filter row is shown.
pub const FILTER_HEADER_HEIGHT: f32 = 64.0;
/// Space kept below the table for the pagination bar.
pub const PAGINATION_HEIGHT: f32 = 40.0;

/// Table column configuration: the selection checkbox, then one column per
/// descriptor at its configured width.
#[inline]
pub fn table_columns(columns: &[ColumnDescriptor]) -> Vec<Column> {
    std::iter::once(Column::exact(SELECT_WIDTH))
        .chain(columns.iter().map(|column| {
            Column::initial(column.width)
                .at_least(MIN_COLUMN_WIDTH)
                .clip(true)
        }))
        .collect()
}
