//! Line-oriented console report.

use std::fmt;

use catalog_model::{Diagnostic, DiagnosticKind, FileReport, LocaleReport, RunReport};

/// Render the whole run, one block per locale.
pub fn render_text(report: &RunReport) -> String {
    report.locales.iter().map(render_locale).collect()
}

/// Render one locale: heading, each file with its diagnostics, summary line.
pub fn render_locale(locale: &LocaleReport) -> String {
    LocaleText(locale).to_string()
}

pub fn render_file(file: &FileReport) -> String {
    FileText(file).to_string()
}

struct LocaleText<'a>(&'a LocaleReport);

impl fmt::Display for LocaleText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locale = self.0;
        writeln!(f, "{} ({})", locale.locale, locale.path.display())?;
        writeln!(f, " cnt:{}", locale.checked())?;
        for file in &locale.files {
            write!(f, "{}", FileText(file))?;
        }
        writeln!(f, "{}", locale_summary(locale))
    }
}

struct FileText<'a>(&'a FileReport);

impl fmt::Display for FileText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.0;
        writeln!(f, "{}", file.path.display())?;
        if let Some(error) = &file.error {
            writeln!(f, "  error: {error}")?;
        }
        for diagnostic in &file.verdict.diagnostics {
            writeln!(f, "  {}", format_diagnostic(diagnostic))?;
        }
        writeln!(f, " -> {}", file.outcome().label())
    }
}

/// `All N files passed` or `Some files failed (failed/checked)`.
pub fn locale_summary(locale: &LocaleReport) -> String {
    if locale.all_passed() {
        format!("All {} files passed", locale.checked())
    } else {
        format!(
            "Some files failed ({}/{})",
            locale.failed(),
            locale.checked()
        )
    }
}

/// One diagnostic as a single line, location first when known.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let location = match (diagnostic.row, diagnostic.column) {
        (Some(row), Some(column)) => format!("[row {row}, col {column}] "),
        (Some(row), None) => format!("[row {row}] "),
        (None, Some(column)) => format!("[col {column}] "),
        (None, None) => String::new(),
    };
    match diagnostic.kind {
        DiagnosticKind::InvalidValue => {
            format!("{location}{} '{}'", diagnostic.message, diagnostic.value)
        }
        DiagnosticKind::HeaderMismatch => {
            format!("{location}{} {}", diagnostic.message, diagnostic.value)
        }
        DiagnosticKind::MissingCell
        | DiagnosticKind::MissingRow
        | DiagnosticKind::UnsupportedLocale => format!("{location}{}", diagnostic.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_invalid_value() {
        let diagnostic =
            Diagnostic::new(DiagnosticKind::InvalidValue, "invalid EPC", "0xZZ").at_cell(6, 0);
        assert_eq!(
            format_diagnostic(&diagnostic),
            "[row 6, col 0] invalid EPC '0xZZ'"
        );
    }

    #[test]
    fn test_format_header_mismatch() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::HeaderMismatch,
            "invalid class header",
            r#"["Class"]"#,
        )
        .at_row(0);
        assert_eq!(
            format_diagnostic(&diagnostic),
            r#"[row 0] invalid class header ["Class"]"#
        );
    }

    #[test]
    fn test_render_file_marks_outcome() {
        let file = FileReport::new(
            "primary/DeviceList.csv",
            catalog_model::FileKind::DeviceList,
            catalog_model::Verdict::not_implemented(),
        );
        assert_eq!(
            render_file(&file),
            "primary/DeviceList.csv\n -> not implemented\n"
        );
    }

    #[test]
    fn test_format_unlocated() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::UnsupportedLocale,
            "there is no validator for locale 'fr'",
            "fr",
        );
        assert_eq!(
            format_diagnostic(&diagnostic),
            "there is no validator for locale 'fr'"
        );
    }
}
