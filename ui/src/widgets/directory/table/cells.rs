//! Cell rendering functions for the directory table.
//!
//! One function per `CellKind`; [`render_cell`] dispatches on the column
//! descriptor.

use directory_business::{
    CellKind, ColumnDescriptor, DirectoryConfig, Person, STATUS_CHIP_COLORS, TeamChip, team_chips,
};
use egui::{Image, RichText, Ui, vec2};

use crate::utils::colors::USERNAME_COLOR;
use crate::widgets::{chip, outlined_chip};

const AVATAR_SIZE: f32 = 40.0;

#[inline]
pub fn render_cell(ui: &mut Ui, column: &ColumnDescriptor, person: &Person, config: &DirectoryConfig) {
    match column.cell {
        CellKind::Avatar => render_avatar_cell(ui, person, config),
        CellKind::StatusChip => render_status_cell(ui, &person.status),
        CellKind::Text | CellKind::Number => {
            render_text_cell(ui, &column.id.text_value(person));
        }
        CellKind::TeamChips => render_teams_cell(ui, &person.teams),
    }
}

/// Renders the row selection checkbox. Returns `true` when toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.checkbox(&mut checked, "").changed()
}

/// Round avatar with the display name and the username stacked beside it.
///
/// A missing image shows egui's broken-image placeholder.
#[inline]
pub fn render_avatar_cell(ui: &mut Ui, person: &Person, config: &DirectoryConfig) {
    ui.horizontal(|ui| {
        ui.add(
            Image::new(config.image_uri(&person.image))
                .fit_to_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE))
                .corner_radius(AVATAR_SIZE / 2.0),
        )
        .on_hover_text(&person.name);
        ui.add_space(8.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(&person.name).size(14.0));
            ui.label(
                RichText::new(person.username.as_str())
                    .size(12.0)
                    .color(USERNAME_COLOR),
            );
        });
    });
}

#[inline]
pub fn render_status_cell(ui: &mut Ui, status: &str) {
    chip(ui, status, STATUS_CHIP_COLORS);
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Up to three colored team chips plus a `+N` badge for the rest.
#[inline]
pub fn render_teams_cell(ui: &mut Ui, teams: &[String]) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for team_chip in team_chips(teams) {
            match team_chip {
                TeamChip::Team { label, colors } => {
                    chip(ui, label, colors);
                }
                TeamChip::Overflow { .. } => {
                    outlined_chip(ui, &team_chip.label());
                }
            }
        }
    });
}
