//! Catalog ingestion utilities.
//!
//! This crate finds catalog files under a root directory and parses them
//! into [`Table`](catalog_model::Table)s for the rule engine.
//!
//! # Features
//!
//! - **Locale discovery**: one subdirectory per locale tag, sorted by name
//! - **File discovery**: `.csv` files per locale, sorted by name, with
//!   device-list files classified by stem
//! - **CSV loading**: every record kept, ragged rows allowed, quoted
//!   newlines preserved
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use catalog_ingest::{DEVICE_LIST_STEM, discover, read_table};
//!
//! for locale in discover(Path::new("catalog"), DEVICE_LIST_STEM)? {
//!     for file in &locale.files {
//!         let table = read_table(&file.path)?;
//!     }
//! }
//! ```

mod discovery;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{parse_table, read_table};

// === File Discovery ===
pub use discovery::{
    DEVICE_LIST_STEM, DiscoveredFile, LocaleDir, classify_file, discover, list_csv_files,
    list_locale_dirs,
};
