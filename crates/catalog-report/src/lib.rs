//! Rendering of catalog validation reports.
//!
//! Renderers only read the report data model from `catalog-model`; the rule
//! engine never formats output itself.

pub mod json;
pub mod text;

pub use json::render_json;
pub use text::{format_diagnostic, locale_summary, render_file, render_locale, render_text};
