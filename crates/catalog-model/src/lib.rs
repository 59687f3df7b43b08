pub mod diagnostic;
pub mod report;
pub mod table;
pub mod verdict;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use report::{FileKind, FileReport, LocaleReport, RunReport};
pub use table::{Row, Table};
pub use verdict::{Outcome, Verdict};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_and_keeps_all_diagnostics() {
        let left = Verdict::fail(vec![Diagnostic::new(
            DiagnosticKind::InvalidValue,
            "invalid EPC",
            "0xZZ",
        )]);
        let right = Verdict::fail(vec![Diagnostic::new(
            DiagnosticKind::InvalidValue,
            "invalid data size",
            "",
        )]);
        let combined = Verdict::pass().and(left).and(right);
        assert_eq!(combined.outcome, Outcome::Failed);
        assert_eq!(combined.diagnostics.len(), 2);
    }

    #[test]
    fn row_from_iter() {
        let row: Row = ["0x80", "Operation status"].into_iter().collect();
        assert_eq!(row.cell(1), Some("Operation status"));
        assert_eq!(row.cell(2), None);
    }
}
