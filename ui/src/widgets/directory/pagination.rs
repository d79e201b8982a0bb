//! Pagination bar under the directory table.

use directory_business::{DirectoryState, PAGE_SIZE_OPTIONS};
use egui::{Align, ComboBox, Layout, Ui};

use super::table::PageSummary;

/// Renders the page size picker, the row range, and the page buttons.
pub fn pagination_bar(ui: &mut Ui, directory: &mut DirectoryState, summary: PageSummary) {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        let last_page = summary.page_count.saturating_sub(1);
        let mut target = None;

        let has_next = summary.page_index < last_page;
        let has_previous = summary.page_index > 0;

        if ui
            .add_enabled(has_next, egui::Button::new("⏭"))
            .on_hover_text("Go to last page")
            .clicked()
        {
            target = Some(last_page);
        }
        if ui
            .add_enabled(has_next, egui::Button::new("▶"))
            .on_hover_text("Go to next page")
            .clicked()
        {
            target = Some(summary.page_index + 1);
        }
        if ui
            .add_enabled(has_previous, egui::Button::new("◀"))
            .on_hover_text("Go to previous page")
            .clicked()
        {
            target = Some(summary.page_index.saturating_sub(1));
        }
        if ui
            .add_enabled(has_previous, egui::Button::new("⏮"))
            .on_hover_text("Go to first page")
            .clicked()
        {
            target = Some(0);
        }

        ui.label(range_label(summary));

        let mut page_size = summary.page_size;
        ComboBox::from_id_salt("rows_per_page")
            .width(60.0)
            .selected_text(page_size.to_string())
            .show_ui(ui, |ui| {
                for option in PAGE_SIZE_OPTIONS {
                    ui.selectable_value(&mut page_size, option, option.to_string());
                }
            });
        ui.label("Rows per page");

        if page_size != summary.page_size {
            directory.table_mut().set_page_size(page_size);
        } else if let Some(page_index) = target {
            directory.table_mut().set_page_index(page_index);
        }
    });
}

/// `start-end of total`, one based. An empty table reads `0-0 of 0`.
pub fn range_label(summary: PageSummary) -> String {
    if summary.row_count == 0 {
        return format!("0-0 of {}", summary.filtered_count);
    }
    let start = summary.first_row + 1;
    let end = summary.first_row + summary.row_count;
    format!("{start}-{end} of {}", summary.filtered_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(first_row: usize, row_count: usize, filtered_count: usize) -> PageSummary {
        PageSummary {
            page_index: 0,
            page_count: 1,
            page_size: 10,
            filtered_count,
            first_row,
            row_count,
        }
    }

    #[test]
    fn range_label_is_one_based() {
        assert_eq!(range_label(summary(0, 10, 12)), "1-10 of 12");
        assert_eq!(range_label(summary(10, 2, 12)), "11-12 of 12");
    }

    #[test]
    fn range_label_of_empty_table() {
        assert_eq!(range_label(summary(0, 0, 0)), "0-0 of 0");
    }
}
