//! Shared color constants for the UI.

use egui::Color32;

/// Red color for error status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Secondary text under a person's name.
pub const USERNAME_COLOR: Color32 = Color32::from_rgb(0x5D, 0x5D, 0x5D);

/// Border of outlined chips.
pub const OUTLINE_CHIP_COLOR: Color32 = Color32::from_rgb(189, 189, 189);

/// Subtle gray around the table.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Light gray behind the header row.
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);
