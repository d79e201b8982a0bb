//! Multi-select role picker shown in the table toolbar.

use directory_business::{RoleFilter, STATUS_CHIP_COLORS};
use egui::{ComboBox, RichText, Ui};
use ustr::Ustr;

use crate::widgets::chip;

const PICKER_WIDTH: f32 = 300.0;

/// A replacement selection emitted by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePickerChange {
    pub selected: Vec<Ustr>,
}

/// Renders the picker and returns the full new selection when it changes.
pub fn role_picker(ui: &mut Ui, options: &[Ustr], filter: &RoleFilter) -> Option<RolePickerChange> {
    let selected = filter.selected();
    let mut change: Option<Vec<Ustr>> = None;

    ui.vertical(|ui| {
        ui.label(RichText::new("Filter by Role").small());

        ComboBox::from_id_salt("role_picker")
            .width(PICKER_WIDTH)
            .selected_text(selected_text(selected))
            .show_ui(ui, |ui| {
                for role in options {
                    let mut checked = filter.is_selected(*role);
                    if ui.checkbox(&mut checked, role.as_str()).changed() {
                        change = Some(filter.toggled(*role));
                    }
                }
            });

        if !selected.is_empty() {
            ui.horizontal_wrapped(|ui| {
                ui.set_max_width(PICKER_WIDTH);
                for role in selected {
                    chip(ui, role.as_str(), STATUS_CHIP_COLORS);
                    if ui
                        .small_button("×")
                        .on_hover_text(format!("Remove {role}"))
                        .clicked()
                    {
                        change = Some(filter.toggled(*role));
                    }
                }
                if ui.small_button("Clear").clicked() {
                    change = Some(Vec::new());
                }
            });
        }
    });

    change.map(|selected| RolePickerChange { selected })
}

fn selected_text(selected: &[Ustr]) -> String {
    match selected {
        [] => "Select Role(s)".to_owned(),
        [role] => role.to_string(),
        roles => format!("{} roles", roles.len()),
    }
}
