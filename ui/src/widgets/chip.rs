//! Small rounded labels used by the Status and Teams columns.

use directory_business::ChipColors;
use egui::{Frame, Margin, Response, RichText, Stroke, Ui};

use crate::utils::colors::OUTLINE_CHIP_COLOR;

const CHIP_RADIUS: f32 = 12.0;

/// A filled chip.
pub fn chip(ui: &mut Ui, label: &str, colors: ChipColors) -> Response {
    Frame::NONE
        .fill(colors.background)
        .corner_radius(CHIP_RADIUS)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().color(colors.foreground));
        })
        .response
}

/// A chip with only a border, used for the `+N` overflow badge.
pub fn outlined_chip(ui: &mut Ui, label: &str) -> Response {
    Frame::NONE
        .stroke(Stroke::new(1.0, OUTLINE_CHIP_COLOR))
        .corner_radius(CHIP_RADIUS)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small());
        })
        .response
}
