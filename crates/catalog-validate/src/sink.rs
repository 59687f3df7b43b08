//! Diagnostic collection.

use catalog_model::{Diagnostic, DiagnosticKind, Outcome, Verdict};
use tracing::debug;

/// Collects diagnostics while a table is checked.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        debug!(
            kind = %diagnostic.kind,
            row = ?diagnostic.row,
            column = ?diagnostic.column,
            value = %diagnostic.value,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn header_mismatch(&mut self, label: &str, row: usize, actual: &[String]) {
        self.push(
            Diagnostic::new(
                DiagnosticKind::HeaderMismatch,
                format!("invalid {label}"),
                format!("{actual:?}"),
            )
            .at_row(row),
        );
    }

    pub fn invalid_value(&mut self, label: &str, row: usize, column: usize, value: &str) {
        self.push(
            Diagnostic::new(DiagnosticKind::InvalidValue, format!("invalid {label}"), value)
                .at_cell(row, column),
        );
    }

    pub fn missing_cell(&mut self, label: &str, row: usize, column: usize) {
        self.push(
            Diagnostic::new(DiagnosticKind::MissingCell, format!("missing {label}"), "")
                .at_cell(row, column),
        );
    }

    pub fn missing_row(&mut self, label: &str, row: usize) {
        self.push(
            Diagnostic::new(DiagnosticKind::MissingRow, format!("missing {label}"), "").at_row(row),
        );
    }

    pub fn unsupported_locale(&mut self, locale: &str) {
        self.push(Diagnostic::new(
            DiagnosticKind::UnsupportedLocale,
            format!("there is no validator for locale '{locale}'"),
            locale,
        ));
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Wrap the collected diagnostics with the aggregate result.
    pub fn into_verdict(self, passed: bool) -> Verdict {
        Verdict::new(Outcome::from_passed(passed), self.diagnostics)
    }
}
