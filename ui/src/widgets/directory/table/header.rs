//! Header row of the directory table.

use chrono::{DateTime, Utc};
use directory_business::{ColumnDescriptor, ColumnId, DirectoryState, SortDirection};
use egui::{Button, Frame, Margin, RichText, Ui};
use egui_extras::TableRow;

use crate::utils::colors::HEADER_BG_COLOR;
use crate::widgets::debounced_text_edit;

/// Clicks collected while drawing the header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderResult {
    pub toggle_sort: Option<ColumnId>,
    /// Select (`true`) or deselect every row on the page.
    pub select_page: Option<bool>,
}

/// Renders the selection header cell followed by one cell per column.
///
/// While the filter row is shown, filterable columns get their debounced
/// input under the header label.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    directory: &mut DirectoryState,
    page_all_selected: bool,
    now: DateTime<Utc>,
) -> HeaderResult {
    let mut result = HeaderResult::default();

    header.col(|ui| {
        header_cell(ui, |ui| {
            let mut all = page_all_selected;
            if ui
                .checkbox(&mut all, "")
                .on_hover_text("Toggle select all")
                .changed()
            {
                result.select_page = Some(all);
            }
        });
    });

    let columns = directory.table().columns();
    for column in columns {
        header.col(|ui| {
            header_cell(ui, |ui| {
                ui.vertical(|ui| {
                    if render_header_label(ui, column, directory.table().sort_direction(column.id)) {
                        result.toggle_sort = Some(column.id);
                    }

                    if let Some(placeholder) = column.filter_placeholder()
                        && let Some((input, committed)) = directory.filter_input(column.id)
                    {
                        debounced_text_edit(ui, input, committed, now, placeholder);
                    }
                });
            });
        });
    }

    result
}

/// Renders the label; sortable columns get a clickable label with the sort
/// arrow. Returns `true` when the sort was toggled.
fn render_header_label(
    ui: &mut Ui,
    column: &ColumnDescriptor,
    direction: Option<SortDirection>,
) -> bool {
    if !column.sortable {
        ui.strong(column.header);
        return false;
    }

    let arrow = match direction {
        Some(SortDirection::Ascending) => " ↑",
        Some(SortDirection::Descending) => " ↓",
        None => "",
    };
    ui.add(Button::new(RichText::new(format!("{}{arrow}", column.header)).strong()).frame(false))
        .on_hover_text(format!("Sort by {}", column.header))
        .clicked()
}

/// Header cell with background.
fn header_cell(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 4))
        .show(ui, add_contents);
}
