//! Per-file and per-locale results, independent of how they are rendered.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::verdict::{Outcome, Verdict};

/// How a catalog file is routed for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Catalog,
    DeviceList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub kind: FileKind,
    pub verdict: Verdict,
    /// Set when the file could not be read or parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, kind: FileKind, verdict: Verdict) -> Self {
        Self {
            path: path.into(),
            kind,
            verdict,
            error: None,
        }
    }

    /// A file that never reached the rule engine.
    pub fn unreadable(path: impl Into<PathBuf>, kind: FileKind, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            verdict: Verdict::fail(Vec::new()),
            error: Some(error.into()),
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict.passed()
    }

    pub fn outcome(&self) -> Outcome {
        self.verdict.outcome
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleReport {
    pub locale: String,
    pub path: PathBuf,
    pub files: Vec<FileReport>,
}

impl LocaleReport {
    pub fn new(locale: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            locale: locale.into(),
            path: path.into(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    pub fn checked(&self) -> usize {
        self.files.len()
    }

    pub fn passed(&self) -> usize {
        self.files.iter().filter(|file| file.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.checked() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub locales: Vec<LocaleReport>,
}

impl RunReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locales: Vec::new(),
        }
    }

    pub fn push(&mut self, locale: LocaleReport) {
        self.locales.push(locale);
    }

    pub fn checked(&self) -> usize {
        self.locales.iter().map(LocaleReport::checked).sum()
    }

    pub fn passed(&self) -> usize {
        self.locales.iter().map(LocaleReport::passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.checked() - self.passed()
    }

    /// True when every file in every locale passed.
    pub fn all_passed(&self) -> bool {
        self.locales.iter().all(LocaleReport::all_passed)
    }
}
