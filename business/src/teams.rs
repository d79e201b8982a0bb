//! Chip layout for the Teams and Status columns.

use std::borrow::Cow;

use egui::Color32;

/// At most this many team chips are shown before the overflow badge.
pub const MAX_TEAM_CHIPS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipColors {
    pub background: Color32,
    pub foreground: Color32,
}

impl ChipColors {
    pub const fn new(background: Color32, foreground: Color32) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

/// Team chip colors by position.
pub const TEAM_CHIP_PALETTE: [ChipColors; MAX_TEAM_CHIPS] = [
    ChipColors::new(
        Color32::from_rgb(0xCC, 0xE6, 0xFF),
        Color32::from_rgb(0x00, 0x80, 0xFF),
    ),
    ChipColors::new(
        Color32::from_rgb(0x99, 0xCC, 0xFF),
        Color32::from_rgb(0x00, 0x4D, 0x99),
    ),
    ChipColors::new(
        Color32::from_rgb(0x66, 0xB3, 0xFF),
        Color32::from_rgb(0x00, 0x33, 0x66),
    ),
];

pub const STATUS_CHIP_COLORS: ChipColors = TEAM_CHIP_PALETTE[0];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamChip<'a> {
    /// A filled chip naming one team.
    Team { label: &'a str, colors: ChipColors },
    /// The outlined `+N` badge counting hidden teams.
    Overflow { hidden: usize },
}

impl TeamChip<'_> {
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            TeamChip::Team { label, .. } => Cow::Borrowed(*label),
            TeamChip::Overflow { hidden } => Cow::Owned(format!("+{hidden}")),
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, TeamChip::Overflow { .. })
    }
}

/// Lays out the chips for one person's teams.
pub fn team_chips(teams: &[String]) -> Vec<TeamChip<'_>> {
    let mut chips: Vec<TeamChip<'_>> = teams
        .iter()
        .zip(TEAM_CHIP_PALETTE)
        .map(|(team, colors)| TeamChip::Team {
            label: team.as_str(),
            colors,
        })
        .collect();

    let hidden = teams.len().saturating_sub(MAX_TEAM_CHIPS);
    if hidden > 0 {
        chips.push(TeamChip::Overflow { hidden });
    }
    chips
}
