//! Check rules and their registry.
//!
//! Every rule is a stateless predicate-plus-synthesizer: it inspects one
//! node at a time, and on a match builds a diagnostic with the fix-its
//! for that usage. Rules never look at siblings, never keep state
//! between nodes, and never re-resolve anything the node model already
//! carries.

use crate::ast::{Expr, ScopeStack, Stmt};
use crate::diagnostics::Diagnostic;
use crate::source::SourceFile;

/// Module containing the qvariant-deprecated rules.
pub mod deprecated;
/// Module containing the qvariant-value rule.
pub mod value_cast;

/// Check name covering the legacy enumerator and accessor rules.
pub const QVARIANT_DEPRECATED: &str = "qvariant-deprecated";
/// Check name covering the templated extractor rule.
pub const QVARIANT_VALUE: &str = "qvariant-value";

/// The level a check runs at. Lower levels are safe to enable wholesale;
/// manual checks fire too often on valid code and are only run when
/// explicitly requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckLevel {
    /// No false positives expected.
    Level0,
    /// Very low false-positive rate.
    Level1,
    /// Higher false-positive rate, still broadly useful.
    Level2,
    /// Opt-in only.
    Manual,
}

/// Metadata associated with a rule.
#[derive(Debug, Clone, Copy)]
pub struct CheckMeta {
    /// Check name the rule reports under.
    pub check: &'static str,
    /// Level the check runs at.
    pub level: CheckLevel,
}

/// Context passed to rules during a traversal.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Source text of the translation unit being checked.
    pub source: &'a SourceFile,
    /// Lexical scope chain at the visited node.
    pub scopes: &'a ScopeStack,
}

/// Trait defining a check rule.
///
/// A rule produces at most one diagnostic per visited node; a node may
/// still be reported by several rules independently.
pub trait Rule: Send + Sync {
    /// Returns the descriptive name of the rule.
    fn name(&self) -> &'static str;
    /// Returns the check name and level for the rule.
    fn meta(&self) -> CheckMeta;
    /// Called for every visited statement.
    fn visit_stmt(&self, _stmt: &Stmt, _context: &Context<'_>) -> Option<Diagnostic> {
        None
    }
    /// Called for every visited expression.
    fn visit_expr(&self, _expr: &Expr, _context: &Context<'_>) -> Option<Diagnostic> {
        None
    }
}

/// Returns all built-in rules in registration order, manual-level ones
/// included.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(deprecated::DeprecatedEnumValueRule::qvariant()),
        Box::new(deprecated::AccessorRenameRule::qvariant()),
        Box::new(value_cast::ExtractorCastRule::qvariant()),
    ]
}

/// Returns the built-in rules running at or below `max`, excluding
/// manual-only checks.
#[must_use]
pub fn rules_at_level(max: CheckLevel) -> Vec<Box<dyn Rule>> {
    default_rules()
        .into_iter()
        .filter(|rule| {
            let level = rule.meta().level;
            level != CheckLevel::Manual && level <= max
        })
        .collect()
}
