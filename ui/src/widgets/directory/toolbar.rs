//! Toolbar above the directory table.

use directory_business::DirectoryState;
use egui::{Align, Layout, Ui};

use crate::widgets::role_picker;

/// Renders the role picker, the filter row toggle, and the selection banner.
pub fn directory_toolbar(ui: &mut Ui, directory: &mut DirectoryState) {
    ui.horizontal(|ui| {
        if let Some(change) = role_picker(ui, directory.roles(), directory.role_filter()) {
            directory.set_selected_roles(change.selected);
        }

        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            let toggle_label = if directory.show_column_filters() {
                "Hide filters"
            } else {
                "Show filters"
            };
            if ui
                .button(toggle_label)
                .on_hover_text("Show/Hide column filters")
                .clicked()
            {
                directory.toggle_column_filters();
            }

            if directory.table().has_column_filters() && ui.button("Clear filters").clicked() {
                directory.clear_column_filters();
            }
        });
    });

    let selected = directory.table().selected_count();
    if selected > 0 {
        ui.horizontal(|ui| {
            ui.label(selection_label(selected, directory.view().filtered_count));
            if ui.small_button("Clear selection").clicked() {
                directory.table_mut().clear_selection();
            }
        });
    }
}

fn selection_label(selected: usize, total: usize) -> String {
    format!("{selected} of {total} row(s) selected")
}
