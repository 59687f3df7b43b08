//! Declarative per-column rules for one record kind.

use catalog_model::Row;

use crate::predicates::Predicate;
use crate::sink::DiagnosticSink;

/// Rules attached to a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub column: usize,
    /// Column name used in diagnostics.
    pub label: &'static str,
    /// All of these must hold for the cell to pass.
    pub predicates: &'static [Predicate],
}

impl FieldRule {
    pub const fn new(column: usize, label: &'static str, predicates: &'static [Predicate]) -> Self {
        Self {
            column,
            label,
            predicates,
        }
    }

    /// True when no predicate can reject a value.
    pub fn is_accepting(&self) -> bool {
        self.predicates.iter().all(Predicate::is_accepting)
    }

    /// Predicates rejecting `value`, in declaration order.
    pub fn failures(&self, value: &str) -> Vec<Predicate> {
        self.predicates
            .iter()
            .copied()
            .filter(|predicate| !predicate.check(value))
            .collect()
    }

    /// Check this column of `row`, emitting at most one diagnostic.
    pub fn apply(&self, row: &Row, row_index: usize, sink: &mut DiagnosticSink) -> bool {
        if self.is_accepting() {
            return true;
        }
        let Some(value) = row.cell(self.column) else {
            sink.missing_cell(self.label, row_index, self.column);
            return false;
        };
        if self.failures(value).is_empty() {
            true
        } else {
            sink.invalid_value(self.label, row_index, self.column, value);
            false
        }
    }
}

/// Ordered field rules for one record kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRuleSet {
    rules: Vec<FieldRule>,
}

impl RowRuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// A rule set that checks nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn rule_for(&self, column: usize) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.column == column)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against `row`; a failure never skips later rules.
    pub fn apply(&self, row: &Row, row_index: usize, sink: &mut DiagnosticSink) -> bool {
        let mut ok = true;
        for rule in &self.rules {
            ok = rule.apply(row, row_index, sink) && ok;
        }
        ok
    }
}
