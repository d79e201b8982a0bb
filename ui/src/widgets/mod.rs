mod chip;
mod debounced_input;
pub mod directory;
mod role_picker;

pub use chip::{chip, outlined_chip};
pub use debounced_input::debounced_text_edit;
pub use directory::directory_panel;
pub use role_picker::{RolePickerChange, role_picker};
