//! Walks a catalog root and validates every discovered file.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use catalog_ingest::{DiscoveredFile, LocaleDir, discover, read_table};
use catalog_model::{FileKind, FileReport, LocaleReport, RunReport};
use catalog_validate::{LocaleRegistry, validate_device_list, validate_table};

use crate::config::CatalogConfig;

/// Every file passed.
pub const EXIT_PASSED: i32 = 0;
/// At least one file failed or could not be checked.
pub const EXIT_FAILED: i32 = 1;
/// The run itself could not complete.
pub const EXIT_FATAL: i32 = 2;

/// Validate every locale directory under `root`.
///
/// Only driver-level problems (missing root, bad aliases) are errors.
/// Unreadable files are recorded in the report and the run continues.
pub fn validate_root(root: &Path, config: &CatalogConfig) -> Result<RunReport> {
    let registry = config.registry().context("build locale registry")?;
    let locales = discover(root, &config.device_list_stem)
        .with_context(|| format!("discover catalog root {}", root.display()))?;

    let mut report = RunReport::new(root);
    for locale in &locales {
        report.push(validate_locale(&registry, locale));
    }
    info!(
        checked = report.checked(),
        passed = report.passed(),
        failed = report.failed(),
        "validation complete"
    );
    Ok(report)
}

fn validate_locale(registry: &LocaleRegistry, locale: &LocaleDir) -> LocaleReport {
    let span = info_span!("locale", tag = %locale.tag);
    let _guard = span.enter();
    info!(
        path = %locale.path.display(),
        file_count = locale.files.len(),
        known = registry.contains(&locale.tag),
        "validating locale"
    );

    let mut report = LocaleReport::new(locale.tag.clone(), locale.path.clone());
    for file in &locale.files {
        report.push(validate_file(registry, &locale.tag, file));
    }
    report
}

fn validate_file(registry: &LocaleRegistry, tag: &str, file: &DiscoveredFile) -> FileReport {
    let span = info_span!("file", path = %file.path.display());
    let _guard = span.enter();

    let table = match read_table(&file.path) {
        Ok(table) => table,
        Err(err) => {
            error!(error = %err, "failed to read catalog file");
            return FileReport::unreadable(file.path.clone(), file.kind, err.to_string());
        }
    };
    let verdict = match file.kind {
        FileKind::Catalog => validate_table(registry, tag, &table),
        FileKind::DeviceList => {
            warn!("device-list validation is not implemented");
            validate_device_list(&table)
        }
    };
    info!(
        outcome = verdict.outcome.label(),
        diagnostics = verdict.diagnostics.len(),
        "validated file"
    );
    FileReport::new(file.path.clone(), file.kind, verdict)
}

/// Exit status for a finished run.
pub fn exit_code(report: &RunReport) -> i32 {
    if report.all_passed() {
        EXIT_PASSED
    } else {
        EXIT_FAILED
    }
}
