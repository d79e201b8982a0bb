//! Text field whose value is committed only after typing pauses.

use chrono::{DateTime, Utc};
use directory_business::Debounced;
use egui::{Response, TextEdit, Ui};

/// Renders `input` as a single-line text field.
///
/// `committed` is the externally owned value; when it changes the draft
/// follows it immediately. Keystrokes only touch the draft and restart the
/// quiet-period timer; committing is left to whoever polls `input`.
pub fn debounced_text_edit(
    ui: &mut Ui,
    input: &mut Debounced,
    committed: &str,
    now: DateTime<Utc>,
    placeholder: &str,
) -> Response {
    input.sync_external(committed);

    let mut draft = input.draft().to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut draft)
            .hint_text(placeholder)
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        input.edit(draft, now);
    }

    if let Some(remaining) = input.remaining(now) {
        ui.ctx()
            .request_repaint_after(remaining.to_std().unwrap_or_default());
    }

    response
}
