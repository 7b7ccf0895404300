//! Core library for the qvlint static checks.
//!
//! qvlint inspects an already-built, fully type-resolved C++ syntax tree
//! for deprecated uses of the `QVariant` value-container API and
//! synthesizes in-place textual fix-its. The host compiler hands over
//! one translation unit at a time, expressed in this crate's node model
//! together with the verbatim source text; diagnostics flow back through
//! a sink. Parsing, type resolution, and option handling stay on the
//! host side.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the resolved syntax-tree node model and scope chain.
/// A host maps its own AST into these types before running the checks.
pub mod ast;

/// Module defining diagnostics and the sink the host consumes them from.
pub mod diagnostics;

/// Module containing the fix-it edit type and the source rewriter.
pub mod fix;

/// Module containing the traversal that dispatches rules over a unit.
pub mod linter;

/// Module for rendering diagnostics as text and exporting them as JSON.
pub mod output;

/// Module containing the check rules and their registry.
pub mod rules;

/// Module owning the source text and line/column mapping.
pub mod source;

/// Module defining source spans.
pub mod span;

/// Module containing the legacy-enumerator replacement table.
pub mod symbols;
