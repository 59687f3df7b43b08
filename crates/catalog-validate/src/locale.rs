//! Built-in locale rule sets and the registry that selects them.
//!
//! A catalog table has the same layout in every locale:
//!
//! | Row   | Content                    |
//! |-------|----------------------------|
//! | 0     | class header               |
//! | 1     | class description          |
//! | 2-4   | reserved, not checked      |
//! | 5     | property header            |
//! | 6..   | one row per property (EPC) |
//!
//! Locales differ only in header labels and how strictly cells are checked.

use std::collections::BTreeMap;

use crate::error::{Result, ValidateError};
use crate::predicates::Predicate;
use crate::rules::{FieldRule, RowRuleSet};

pub const PRIMARY: &str = "primary";
pub const SECONDARY: &str = "secondary";

pub const CLASS_HEADER_ROW: usize = 0;
pub const CLASS_DESCRIPTION_ROW: usize = 1;
pub const PROPERTY_HEADER_ROW: usize = 5;
pub const FIRST_PROPERTY_ROW: usize = 6;

const PRIMARY_CLASS_HEADER: &[&str] = &[
    "Class name",
    "Remarks",
    "Group code",
    "Class code",
    "Whether or not detailed requirements are provided",
];

const PRIMARY_PROPERTY_HEADER: &[&str] = &[
    "EPC",
    "Property name",
    "Contents of property",
    "Value range(decimal notation)",
    "Unit",
    "Data type",
    "Data size",
    "Access rule(Anno)",
    "Access rule(Set)",
    "Access rule(Get)",
    "Announcement at status change",
    "Remark",
];

const SECONDARY_CLASS_HEADER: &[&str] = &["クラス名", "備考"];

const SECONDARY_PROPERTY_HEADER: &[&str] = &[
    "EPC",
    "Property name",
    "Contents of property",
    "Value range(decimal notation)",
];

/// Header shapes and row rules for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRules {
    pub tag: &'static str,
    pub class_header: &'static [&'static str],
    pub property_header: &'static [&'static str],
    pub class_description: RowRuleSet,
    pub property: RowRuleSet,
}

impl LocaleRules {
    /// Full rule set.
    pub fn primary() -> Self {
        Self {
            tag: PRIMARY,
            class_header: PRIMARY_CLASS_HEADER,
            property_header: PRIMARY_PROPERTY_HEADER,
            class_description: RowRuleSet::new(vec![
                FieldRule::new(2, "group code", &[Predicate::HexByte]),
                FieldRule::new(3, "class code", &[Predicate::HexByte]),
            ]),
            property: RowRuleSet::new(vec![
                FieldRule::new(0, "EPC", &[Predicate::HexByte]),
                FieldRule::new(
                    1,
                    "property name",
                    &[Predicate::CleanText, Predicate::AsciiOnly],
                ),
                FieldRule::new(2, "contents of property", &[Predicate::Unchecked]),
                FieldRule::new(3, "value range", &[Predicate::Unchecked]),
                FieldRule::new(4, "unit", &[Predicate::Unit]),
                FieldRule::new(5, "data type", &[Predicate::Unchecked]),
                FieldRule::new(6, "data size", &[Predicate::DataSize]),
                FieldRule::new(7, "access rule (Anno)", &[Predicate::AccessRule]),
                FieldRule::new(8, "access rule (Set)", &[Predicate::AccessRule]),
                FieldRule::new(9, "access rule (Get)", &[Predicate::AccessRule]),
                FieldRule::new(
                    10,
                    "announcement at status change",
                    &[Predicate::Announcement],
                ),
            ]),
        }
    }

    /// Reduced rule set: headers plus the EPC column.
    pub fn secondary() -> Self {
        Self {
            tag: SECONDARY,
            class_header: SECONDARY_CLASS_HEADER,
            property_header: SECONDARY_PROPERTY_HEADER,
            class_description: RowRuleSet::empty(),
            property: RowRuleSet::new(vec![FieldRule::new(0, "EPC", &[Predicate::HexByte])]),
        }
    }
}

/// Maps locale tags (and configured aliases) to rule sets.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    locales: BTreeMap<String, LocaleRules>,
    aliases: BTreeMap<String, String>,
}

impl LocaleRegistry {
    /// Registry without any locale; every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the `primary` and `secondary` rule sets.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(LocaleRules::primary());
        registry.insert(LocaleRules::secondary());
        registry
    }

    pub fn insert(&mut self, rules: LocaleRules) {
        self.locales.insert(rules.tag.to_string(), rules);
    }

    /// Let `alias` (typically a directory name) resolve to `target`.
    pub fn add_alias(&mut self, alias: impl Into<String>, target: impl Into<String>) -> Result<()> {
        let alias = alias.into();
        let target = target.into();
        if self.locales.contains_key(&alias) {
            return Err(ValidateError::AliasShadowsLocale { alias });
        }
        if !self.locales.contains_key(&target) {
            return Err(ValidateError::UnknownAliasTarget { alias, target });
        }
        self.aliases.insert(alias, target);
        Ok(())
    }

    pub fn with_alias(
        mut self,
        alias: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<Self> {
        self.add_alias(alias, target)?;
        Ok(self)
    }

    /// Look up rules by tag or alias. Matching is exact.
    pub fn get(&self, tag: &str) -> Option<&LocaleRules> {
        let key = self.aliases.get(tag).map_or(tag, String::as_str);
        self.locales.get(key)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Built-in tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_both_locales() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.tags(), vec![PRIMARY, SECONDARY]);
        assert!(registry.get("en").is_none());
        assert!(registry.get("Primary").is_none());
    }

    #[test]
    fn primary_header_shapes() {
        let rules = LocaleRules::primary();
        assert_eq!(rules.class_header.len(), 5);
        assert_eq!(rules.property_header.len(), 12);
        assert_eq!(rules.property.rules().len(), 11);
    }

    #[test]
    fn primary_reserved_columns_are_explicit_no_ops() {
        let rules = LocaleRules::primary();
        for column in [2, 3, 4, 5] {
            let rule = rules.property.rule_for(column).expect("rule declared");
            assert!(rule.is_accepting(), "column {column} should accept anything");
        }
        assert!(!rules.property.rule_for(6).expect("data size").is_accepting());
    }

    #[test]
    fn secondary_checks_only_epc() {
        let rules = LocaleRules::secondary();
        assert_eq!(rules.class_header.len(), 2);
        assert_eq!(rules.property_header.len(), 4);
        assert!(rules.class_description.is_empty());
        assert_eq!(rules.property.rules().len(), 1);
        assert_eq!(rules.property.rules()[0].column, 0);
    }

    #[test]
    fn alias_resolves_to_builtin() {
        let registry = LocaleRegistry::builtin()
            .with_alias("en", PRIMARY)
            .expect("alias");
        assert_eq!(registry.get("en").map(|rules| rules.tag), Some(PRIMARY));
        assert_eq!(registry.aliases().collect::<Vec<_>>(), vec![("en", PRIMARY)]);
    }

    #[test]
    fn alias_to_unknown_locale_is_rejected() {
        let err = LocaleRegistry::builtin()
            .with_alias("fr", "tertiary")
            .expect_err("unknown target");
        assert!(matches!(err, ValidateError::UnknownAliasTarget { .. }));
    }

    #[test]
    fn alias_cannot_shadow_builtin() {
        let err = LocaleRegistry::builtin()
            .with_alias(SECONDARY, PRIMARY)
            .expect_err("shadowing");
        assert!(matches!(err, ValidateError::AliasShadowsLocale { .. }));
    }
}
