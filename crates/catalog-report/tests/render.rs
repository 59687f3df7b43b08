use catalog_model::{
    Diagnostic, DiagnosticKind, FileKind, FileReport, LocaleReport, RunReport, Verdict,
};
use catalog_report::{render_json, render_text};

fn sample_report() -> RunReport {
    let mut primary = LocaleReport::new("primary", "catalog/primary");
    primary.push(FileReport::new(
        "catalog/primary/0x0011.csv",
        FileKind::Catalog,
        Verdict::pass(),
    ));
    primary.push(FileReport::new(
        "catalog/primary/0x0130.csv",
        FileKind::Catalog,
        Verdict::fail(vec![
            Diagnostic::new(DiagnosticKind::InvalidValue, "invalid EPC", "0x8G").at_cell(7, 0),
            Diagnostic::new(DiagnosticKind::MissingCell, "missing data size", "").at_cell(9, 6),
        ]),
    ));
    primary.push(FileReport::new(
        "catalog/primary/DeviceList.csv",
        FileKind::DeviceList,
        Verdict::not_implemented(),
    ));

    let mut secondary = LocaleReport::new("secondary", "catalog/secondary");
    secondary.push(FileReport::new(
        "catalog/secondary/0x0130.csv",
        FileKind::Catalog,
        Verdict::pass(),
    ));

    let mut unknown = LocaleReport::new("fr", "catalog/fr");
    unknown.push(FileReport::unreadable(
        "catalog/fr/broken.csv",
        FileKind::Catalog,
        "failed to parse CSV catalog/fr/broken.csv: invalid UTF-8",
    ));

    let mut run = RunReport::new("catalog");
    run.push(primary);
    run.push(secondary);
    run.push(unknown);
    run
}

#[test]
fn text_report_snapshot() {
    let text = render_text(&sample_report());
    insta::assert_snapshot!(text, @r#"
    primary (catalog/primary)
     cnt:3
    catalog/primary/0x0011.csv
     -> passed
    catalog/primary/0x0130.csv
      [row 7, col 0] invalid EPC '0x8G'
      [row 9, col 6] missing data size
     -> failed
    catalog/primary/DeviceList.csv
     -> not implemented
    Some files failed (2/3)
    secondary (catalog/secondary)
     cnt:1
    catalog/secondary/0x0130.csv
     -> passed
    All 1 files passed
    fr (catalog/fr)
     cnt:1
    catalog/fr/broken.csv
      error: failed to parse CSV catalog/fr/broken.csv: invalid UTF-8
     -> failed
    Some files failed (1/1)
    "#);
}

#[test]
fn text_report_lists_every_diagnostic_line() {
    let run = sample_report();
    let text = render_text(&run);
    let diagnostic_lines = text.lines().filter(|line| line.starts_with("  [")).count();
    let expected: usize = run
        .locales
        .iter()
        .flat_map(|locale| &locale.files)
        .map(|file| file.verdict.diagnostics.len())
        .sum();
    assert_eq!(diagnostic_lines, expected);
}

#[test]
fn json_report_round_trips_counts() {
    let run = sample_report();
    let json = render_json(&run).expect("render json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
    let locales = value["locales"].as_array().expect("locales array");
    assert_eq!(locales.len(), 3);
    assert_eq!(locales[0]["locale"], "primary");
    assert_eq!(locales[0]["files"][1]["verdict"]["outcome"], "failed");
    assert_eq!(locales[0]["files"][2]["kind"], "device_list");
    assert_eq!(locales[0]["files"][2]["verdict"]["outcome"], "not_implemented");
    assert_eq!(
        locales[2]["files"][0]["error"],
        "failed to parse CSV catalog/fr/broken.csv: invalid UTF-8"
    );
}
