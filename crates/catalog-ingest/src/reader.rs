//! CSV parsing into catalog tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use catalog_model::{Row, Table};
use csv::{Position, ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';
const UTF8_BOM_BYTES: &[u8] = b"\xef\xbb\xbf";

/// Read a catalog file into a [`Table`].
///
/// Every record becomes a row, the header rows included. Records may have
/// different lengths, quoted fields may span lines, and cells are kept as
/// written apart from a leading UTF-8 BOM.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| IngestError::file_read(path, e))?;
    let table = parse_table(file).map_err(|e| csv_error(path, e))?;
    tracing::debug!(path = %path.display(), rows = table.len(), "read catalog table");
    Ok(table)
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::file_read(path, source),
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Parse delimited text from any reader.
///
/// Blank lines between records are kept as empty rows so row indices match
/// line order. Blank lines after the last record are dropped.
pub fn parse_table<R: Read>(mut input: R) -> std::result::Result<Table, csv::Error> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let start = reader.position().byte();
        if !reader.read_record(&mut record)? {
            break;
        }
        let first = start == 0;
        let start = record.position().map_or(start, Position::byte);
        push_blank_rows(&mut rows, &data, start);

        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        if first
            && let Some(cell) = cells.first_mut()
            && cell.starts_with(UTF8_BOM)
        {
            cell.remove(0);
        }
        rows.push(Row::new(cells));
    }
    Ok(Table::from_rows(rows))
}

/// Push one empty row per line terminator found at `start`.
fn push_blank_rows(rows: &mut Vec<Row>, data: &[u8], start: u64) {
    let Ok(mut at) = usize::try_from(start) else {
        return;
    };
    if at == 0 && data.starts_with(UTF8_BOM_BYTES) {
        at = UTF8_BOM_BYTES.len();
    }
    // The `\n` of a `\r\n` that ended the previous record.
    if at > 0 && data.get(at - 1) == Some(&b'\r') && data.get(at) == Some(&b'\n') {
        at += 1;
    }
    loop {
        match (data.get(at), data.get(at + 1)) {
            (Some(b'\r'), Some(b'\n')) => at += 2,
            (Some(b'\r' | b'\n'), _) => at += 1,
            _ => break,
        }
        rows.push(Row::new(Vec::new()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_header_rows() {
        let table = parse_table("a,b\n1,2\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.row(0).unwrap().cell(0), Some("a"));
        assert_eq!(table.row(1).unwrap().cell(1), Some("2"));
    }

    #[test]
    fn test_parse_keeps_blank_lines() {
        let table = parse_table("a\n\n\nb\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
        assert!(table.row(1).unwrap().is_empty());
        assert!(table.row(2).unwrap().is_empty());
        assert_eq!(table.row(3).unwrap().cell(0), Some("b"));
    }

    #[test]
    fn test_parse_keeps_blank_lines_after_bom() {
        let table = parse_table("\u{feff}\n\na\n".as_bytes()).unwrap();
        let lengths: Vec<_> = table.rows().iter().map(Row::len).collect();
        assert_eq!(lengths, vec![0, 0, 1]);
        assert_eq!(table.row(2).unwrap().cell(0), Some("a"));
    }

    #[test]
    fn test_parse_drops_trailing_blank_lines() {
        let table = parse_table("a\nb\n\n\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_keeps_blank_crlf_lines() {
        let table = parse_table("a\r\n\r\nb\r\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.row(1).unwrap().is_empty());
        assert_eq!(table.row(2).unwrap().cell(0), Some("b"));
    }

    #[test]
    fn test_parse_ragged_rows() {
        let table = parse_table("a,b,c\n1\n,,\n".as_bytes()).unwrap();
        assert_eq!(table.row(0).unwrap().len(), 3);
        assert_eq!(table.row(1).unwrap().len(), 1);
        assert_eq!(table.row(2).unwrap().cells(), ["", "", ""]);
    }

    #[test]
    fn test_parse_embedded_newline() {
        let table = parse_table("\"line one\nline two\",x\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.row(0).unwrap().cell(0), Some("line one\nline two"));
    }

    #[test]
    fn test_parse_strips_bom() {
        let table = parse_table("\u{feff}Class name,Remarks\n".as_bytes()).unwrap();
        assert_eq!(table.row(0).unwrap().cell(0), Some("Class name"));
    }

    #[test]
    fn test_parse_does_not_trim() {
        let table = parse_table(" 0x80 ,x\n".as_bytes()).unwrap();
        assert_eq!(table.row(0).unwrap().cell(0), Some(" 0x80 "));
    }

    #[test]
    fn test_parse_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"ok,\xff\xfe\n";
        assert!(parse_table(bytes).is_err());
    }
}
