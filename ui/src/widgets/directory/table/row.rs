//! Row rendering for the directory table.

use directory_business::{ColumnDescriptor, DirectoryConfig, Person};
use egui::{Stroke, Ui};
use egui_extras::TableRow;

use super::cells::{render_cell, render_select_cell};

/// Data needed to render a person row.
pub struct RowData {
    pub person: Person,
    pub selected: bool,
}

/// Result of rendering a person row.
pub struct RowResult {
    pub toggle_selected: bool,
}

/// Renders the selection checkbox and one cell per column descriptor.
#[inline]
pub fn render_person_row(
    row: &mut TableRow<'_, '_>,
    columns: &[ColumnDescriptor],
    data: &RowData,
    config: &DirectoryConfig,
) -> RowResult {
    let mut result = RowResult {
        toggle_selected: false,
    };

    row.col(|ui| {
        result.toggle_selected = render_select_cell(ui, data.selected);
        draw_cell_bottom_border(ui);
    });

    for column in columns {
        row.col(|ui| {
            render_cell(ui, column, &data.person, config);
            draw_cell_bottom_border(ui);
        });
    }

    result
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
