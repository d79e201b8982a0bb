//! The people directory panel: toolbar, table and pagination.

mod pagination;
pub mod table;
mod toolbar;

use directory_business::{DirectoryConfig, DirectoryState};
use directory_states::{StateCtx, Time};
use egui::{Frame, Response, RichText, Stroke, Ui};

use crate::utils::colors::{COLOR_RED, TABLE_BORDER_COLOR};

pub use pagination::range_label;
pub use table::PageSummary;

/// Renders the whole directory and applies any debounced filter commits.
pub fn directory_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let now = state_ctx.state::<Time>().now();
    let config = state_ctx.state::<DirectoryConfig>().clone();
    let directory = state_ctx.state_mut::<DirectoryState>();

    let response = ui
        .vertical(|ui| {
            if let Some(error) = directory.load_error() {
                ui.label(RichText::new(error).color(COLOR_RED));
            }

            toolbar::directory_toolbar(ui, directory);
            ui.add_space(8.0);

            let summary = Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .corner_radius(4.0)
                .inner_margin(4.0)
                .show(ui, |ui| table::directory_table(ui, directory, &config, now))
                .inner;

            pagination::pagination_bar(ui, directory, summary);
        })
        .response;

    if let Some(remaining) = directory.poll_filter_inputs(now) {
        ui.ctx()
            .request_repaint_after(remaining.to_std().unwrap_or_default());
    }

    response
}
