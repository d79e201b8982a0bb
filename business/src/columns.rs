//! Column descriptors for the directory table.
//!
//! Columns are data: the table widget reads these descriptors to decide how
//! to render, sort and filter each column.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnId {
    Name,
    Status,
    Role,
    Email,
    Teams,
    Age,
}

impl ColumnId {
    /// Field name in the person dataset.
    pub fn accessor_key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Status => "status",
            Self::Role => "Role",
            Self::Email => "email",
            Self::Teams => "Teams",
            Self::Age => "Age",
        }
    }

    /// The cell value as text, used for column filtering.
    pub fn text_value(self, person: &Person) -> Cow<'_, str> {
        match self {
            Self::Name => Cow::Borrowed(&person.name),
            Self::Status => Cow::Borrowed(&person.status),
            Self::Role => Cow::Borrowed(person.role.as_str()),
            Self::Email => Cow::Borrowed(&person.email),
            Self::Teams => Cow::Owned(person.teams.join(", ")),
            Self::Age => Cow::Owned(person.age.to_string()),
        }
    }

    pub fn compare(self, a: &Person, b: &Person) -> Ordering {
        match self {
            Self::Age => a.age.cmp(&b.age),
            Self::Teams => a.teams.cmp(&b.teams),
            _ => self.text_value(a).cmp(&self.text_value(b)),
        }
    }
}

/// How a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Round avatar, display name and secondary username.
    Avatar,
    /// Fixed-color status chip.
    StatusChip,
    Text,
    /// Up to three colored team chips plus an overflow badge.
    TeamChips,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFilter {
    Disabled,
    /// Case-insensitive substring filter fed by a debounced text input.
    DebouncedText { placeholder: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    pub header: &'static str,
    pub width: f32,
    pub sortable: bool,
    pub filter: ColumnFilter,
    pub cell: CellKind,
}

impl ColumnDescriptor {
    pub fn is_filterable(&self) -> bool {
        !matches!(self.filter, ColumnFilter::Disabled)
    }

    pub fn filter_placeholder(&self) -> Option<&'static str> {
        match self.filter {
            ColumnFilter::DebouncedText { placeholder } => Some(placeholder),
            ColumnFilter::Disabled => None,
        }
    }
}

pub const DIRECTORY_COLUMNS: [ColumnDescriptor; 6] = [
    ColumnDescriptor {
        id: ColumnId::Name,
        header: "Name",
        width: 280.0,
        sortable: false,
        filter: ColumnFilter::DebouncedText {
            placeholder: "Filter Name",
        },
        cell: CellKind::Avatar,
    },
    ColumnDescriptor {
        id: ColumnId::Status,
        header: "Status",
        width: 85.0,
        sortable: false,
        filter: ColumnFilter::Disabled,
        cell: CellKind::StatusChip,
    },
    ColumnDescriptor {
        id: ColumnId::Role,
        header: "Role",
        width: 270.5,
        sortable: false,
        filter: ColumnFilter::Disabled,
        cell: CellKind::Text,
    },
    ColumnDescriptor {
        id: ColumnId::Email,
        header: "Email",
        width: 270.5,
        sortable: false,
        filter: ColumnFilter::Disabled,
        cell: CellKind::Text,
    },
    ColumnDescriptor {
        id: ColumnId::Teams,
        header: "Teams",
        width: 280.0,
        sortable: false,
        filter: ColumnFilter::Disabled,
        cell: CellKind::TeamChips,
    },
    ColumnDescriptor {
        id: ColumnId::Age,
        header: "Age",
        width: 100.0,
        sortable: true,
        filter: ColumnFilter::Disabled,
        cell: CellKind::Number,
    },
];

pub fn directory_columns() -> &'static [ColumnDescriptor] {
    &DIRECTORY_COLUMNS
}

pub fn find_column(columns: &[ColumnDescriptor], id: ColumnId) -> Option<&ColumnDescriptor> {
    columns.iter().find(|column| column.id == id)
}
