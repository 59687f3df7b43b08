//! Locale directory and catalog file discovery.

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use catalog_model::FileKind;

use crate::error::{IngestError, Result};

/// File stem that marks a device-list file.
pub const DEVICE_LIST_STEM: &str = "DeviceList";

/// A catalog file found under a locale directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

/// A locale directory and the catalog files it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    /// Directory name, used as the locale tag.
    pub tag: String,
    pub path: PathBuf,
    pub files: Vec<DiscoveredFile>,
}

/// Lists the immediate subdirectories of `root`, sorted by name.
pub fn list_locale_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = read_entries(root)?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

/// Lists all CSV files in a directory.
///
/// Only regular files with a lower-case `csv` extension are returned,
/// sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = read_entries(dir)?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("csv"))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Decide how a file is validated from its name alone.
///
/// The stem comparison is case-sensitive.
pub fn classify_file(path: &Path, device_list_stem: &str) -> FileKind {
    match path.file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) if stem == device_list_stem => FileKind::DeviceList,
        _ => FileKind::Catalog,
    }
}

/// Discover every locale directory under `root` with its catalog files.
pub fn discover(root: &Path, device_list_stem: &str) -> Result<Vec<LocaleDir>> {
    let mut locales = Vec::new();
    for path in list_locale_dirs(root)? {
        let tag = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let files = list_csv_files(&path)?
            .into_iter()
            .map(|file| DiscoveredFile {
                kind: classify_file(&file, device_list_stem),
                path: file,
            })
            .collect::<Vec<_>>();
        tracing::debug!(
            locale = %tag,
            path = %path.display(),
            file_count = files.len(),
            "discovered locale directory"
        );
        locales.push(LocaleDir { tag, path, files });
    }
    Ok(locales)
}

fn read_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    entries
        .map(|entry| {
            entry.map_err(|e| IngestError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e,
            })
        })
        .collect()
}
