//! Catalog validation rule engine.
//!
//! This crate turns a parsed catalog [`Table`](catalog_model::Table) into a
//! [`Verdict`](catalog_model::Verdict):
//!
//! - **Predicates**: single-value format rules (hex byte tokens, data size
//!   expressions, access rule tokens, text hygiene)
//! - **Header matching**: positional prefix comparison of header rows
//! - **Row rule sets**: ordered column rules per record kind
//! - **Locales**: the `primary` and `secondary` rule sets and a registry
//!   selecting them by tag
//!
//! # Example
//!
//! ```ignore
//! use catalog_validate::{LocaleRegistry, validate_table};
//!
//! let registry = LocaleRegistry::builtin();
//! let verdict = validate_table(&registry, "primary", &table);
//! for diagnostic in &verdict.diagnostics {
//!     println!("{:?} {}", diagnostic.row, diagnostic.message);
//! }
//! ```

pub mod dispatch;
pub mod error;
pub mod header;
pub mod locale;
pub mod predicates;
pub mod rules;
pub mod sink;

pub use dispatch::{validate_device_list, validate_table, validate_with_rules};
pub use error::{Result, ValidateError};
pub use header::{check_header, matches_header};
pub use locale::{LocaleRegistry, LocaleRules, PRIMARY, SECONDARY};
pub use predicates::{
    Predicate, is_access_rule_token, is_announcement_token, is_ascii_only, is_clean_text,
    is_data_size_expression, is_hex_byte_token, is_unit_token,
};
pub use rules::{FieldRule, RowRuleSet};
pub use sink::DiagnosticSink;
