//! Table components for the people directory.
//!
//! - `columns`: column widths and row heights
//! - `header`: header row with sort toggles and the filter row
//! - `row`: one person per row
//! - `cells`: cell rendering per `CellKind`

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use chrono::{DateTime, Utc};
use directory_business::{DirectoryConfig, DirectoryState, TableView};
use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;

use columns::{FILTER_HEADER_HEIGHT, HEADER_HEIGHT, PAGINATION_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::{RowData, render_person_row};

/// Page figures captured while rendering, used by the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub filtered_count: usize,
    pub first_row: usize,
    pub row_count: usize,
}

impl PageSummary {
    pub fn from_view(view: &TableView<'_>, page_size: usize) -> Self {
        Self {
            page_index: view.page_index,
            page_count: view.page_count,
            page_size,
            filtered_count: view.filtered_count,
            first_row: view.first_row,
            row_count: view.rows.len(),
        }
    }
}

/// Renders the current page of the directory and applies the clicks it collected.
pub fn directory_table(
    ui: &mut Ui,
    directory: &mut DirectoryState,
    config: &DirectoryConfig,
    now: DateTime<Utc>,
) -> PageSummary {
    let view = directory.view();
    let summary = PageSummary::from_view(&view, directory.table().pagination().page_size());
    let rows: Vec<RowData> = view
        .rows
        .iter()
        .map(|person| RowData {
            person: (*person).clone(),
            selected: directory.table().is_selected(person.username),
        })
        .collect();
    let page_all_selected = !rows.is_empty() && rows.iter().all(|row| row.selected);

    let columns = directory.table().columns();
    let header_height = if directory.show_column_filters() {
        FILTER_HEADER_HEIGHT
    } else {
        HEADER_HEIGHT
    };

    let mut header_result = header::HeaderResult::default();
    let mut toggled_rows = Vec::new();

    let max_scroll_height = (ui.available_height() - PAGINATION_HEIGHT).max(ROW_HEIGHT);
    let mut builder = TableBuilder::new(ui)
        .id_salt("directory_table")
        .striped(true)
        .resizable(false)
        .auto_shrink([false, true])
        .max_scroll_height(max_scroll_height)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns(columns) {
        builder = builder.column(column);
    }

    builder
        .header(header_height, |mut header| {
            header_result = render_table_header(&mut header, directory, page_all_selected, now);
        })
        .body(|mut body| {
            for data in &rows {
                body.row(ROW_HEIGHT, |mut row| {
                    if render_person_row(&mut row, columns, data, config).toggle_selected {
                        toggled_rows.push(data.person.username);
                    }
                });
            }
        });

    let table = directory.table_mut();
    if let Some(column) = header_result.toggle_sort {
        table.toggle_sort(column);
    }
    if let Some(selected) = header_result.select_page {
        table.set_all_selected(rows.iter().map(|row| row.person.username), selected);
    }
    for username in toggled_rows {
        table.toggle_selected(username);
    }

    summary
}
