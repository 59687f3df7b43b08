//! Header row comparison.

use catalog_model::Row;

use crate::sink::DiagnosticSink;

/// True when `actual` starts with every label of `expected`, in order.
///
/// Extra trailing columns in `actual` are ignored so locales can carry
/// optional columns after the fixed ones.
pub fn matches_header<A, B>(expected: &[A], actual: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if expected.len() > actual.len() {
        return false;
    }
    expected
        .iter()
        .zip(actual)
        .all(|(want, got)| want.as_ref() == got.as_ref())
}

/// Check a header row and report the whole row when it does not match.
///
/// A missing row is checked as an empty header.
pub fn check_header(
    label: &str,
    expected: &[&str],
    row: Option<&Row>,
    row_index: usize,
    sink: &mut DiagnosticSink,
) -> bool {
    let actual = row.map(Row::cells).unwrap_or_default();
    let ok = matches_header(expected, actual);
    if !ok {
        sink.header_mismatch(label, row_index, actual);
    }
    ok
}
