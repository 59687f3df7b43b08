use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of problem a diagnostic describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Header row does not start with the expected labels.
    HeaderMismatch,
    /// A cell failed its format rule.
    InvalidValue,
    /// A checked column is absent from a short row.
    MissingCell,
    /// A row the layout requires is absent.
    MissingRow,
    /// No rule set is registered for the locale.
    UnsupportedLocale,
}

impl DiagnosticKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HeaderMismatch => "header mismatch",
            Self::InvalidValue => "invalid value",
            Self::MissingCell => "missing cell",
            Self::MissingRow => "missing row",
            Self::UnsupportedLocale => "unsupported locale",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A human-readable failure description tied to a cell (or a whole row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Offending value as it appeared in the file.
    pub value: String,
    /// Zero-based row index within the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// Zero-based column index within the row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            value: value.into(),
            row: None,
            column: None,
        }
    }

    #[must_use]
    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    #[must_use]
    pub fn at_cell(mut self, row: usize, column: usize) -> Self {
        self.row = Some(row);
        self.column = Some(column);
        self
    }
}
