//! Table-level validation: picks the locale rules and walks the layout.

use catalog_model::{Table, Verdict};
use tracing::{debug, warn};

use crate::header::check_header;
use crate::locale::{
    CLASS_DESCRIPTION_ROW, CLASS_HEADER_ROW, FIRST_PROPERTY_ROW, LocaleRegistry, LocaleRules,
    PROPERTY_HEADER_ROW,
};
use crate::sink::DiagnosticSink;

/// Validate a parsed catalog table for `locale`.
///
/// Unknown locales fail closed with a single diagnostic. Every header and
/// every property row is checked even after a failure, so the verdict
/// carries the full list of problems.
pub fn validate_table(registry: &LocaleRegistry, locale: &str, table: &Table) -> Verdict {
    let Some(rules) = registry.get(locale) else {
        warn!(locale, "no rule set registered for locale");
        let mut sink = DiagnosticSink::new();
        sink.unsupported_locale(locale);
        return sink.into_verdict(false);
    };
    validate_with_rules(rules, table)
}

/// Validate a table against a specific rule set.
pub fn validate_with_rules(rules: &LocaleRules, table: &Table) -> Verdict {
    let mut sink = DiagnosticSink::new();
    let mut ok = true;

    ok = check_header(
        "class header",
        rules.class_header,
        table.row(CLASS_HEADER_ROW),
        CLASS_HEADER_ROW,
        &mut sink,
    ) && ok;
    ok = check_header(
        "property header",
        rules.property_header,
        table.row(PROPERTY_HEADER_ROW),
        PROPERTY_HEADER_ROW,
        &mut sink,
    ) && ok;

    if !rules.class_description.is_empty() {
        ok = match table.row(CLASS_DESCRIPTION_ROW) {
            Some(row) => rules
                .class_description
                .apply(row, CLASS_DESCRIPTION_ROW, &mut sink),
            None => {
                sink.missing_row("class description", CLASS_DESCRIPTION_ROW);
                false
            }
        } && ok;
    }

    for (offset, row) in table.rows().iter().skip(FIRST_PROPERTY_ROW).enumerate() {
        let row_index = FIRST_PROPERTY_ROW + offset;
        ok = rules.property.apply(row, row_index, &mut sink) && ok;
    }

    debug!(
        locale = rules.tag,
        rows = table.len(),
        diagnostics = sink.len(),
        passed = ok,
        "table validated"
    );
    sink.into_verdict(ok)
}

/// Device-list files have no checks yet and always fail.
///
/// The outcome is `NotImplemented` rather than `Failed` so callers can tell
/// "not checked" apart from "checked and rejected".
pub fn validate_device_list(table: &Table) -> Verdict {
    debug!(rows = table.len(), "device list validation is not implemented");
    Verdict::not_implemented()
}
