//! AST traversal driving the registered rules.
//!
//! The visitor walks a translation unit in pre-order, maintains the
//! lexical scope chain, and offers every statement and expression to
//! every rule. Diagnostics come out in visit order, so siblings appear
//! in source order.

use crate::ast::{Decl, Expr, ScopeKind, ScopeStack, Stmt, TranslationUnit};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::rules::{default_rules, Context, Rule};
use crate::source::SourceFile;

/// Walks a translation unit and collects rule diagnostics.
pub struct LintVisitor<'a> {
    rules: Vec<Box<dyn Rule>>,
    source: &'a SourceFile,
    scopes: ScopeStack,
    /// Diagnostics collected so far, in visit order.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> LintVisitor<'a> {
    /// Creates a visitor running `rules` against `source`.
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>, source: &'a SourceFile) -> Self {
        Self {
            rules,
            source,
            scopes: ScopeStack::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Visits every declaration in the unit.
    pub fn visit_unit(&mut self, unit: &TranslationUnit) {
        for decl in &unit.decls {
            self.visit_decl(decl);
        }
    }

    fn visit_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Namespace(namespace) => {
                self.scopes.push(ScopeKind::Namespace, &namespace.name);
                for member in &namespace.members {
                    self.visit_decl(member);
                }
                self.scopes.pop();
            }
            Decl::Class(class) => {
                self.scopes.push(ScopeKind::Class, &class.name);
                for member in &class.members {
                    self.visit_decl(member);
                }
                self.scopes.pop();
            }
            Decl::Function(function) => {
                self.scopes.push(ScopeKind::Function, &function.name);
                for stmt in &function.body {
                    self.visit_stmt(stmt);
                }
                self.scopes.pop();
            }
            Decl::Var(var) => {
                if let Some(init) = &var.init {
                    self.visit_expr(init);
                }
            }
        }
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        self.run_stmt_rules(stmt);
        match stmt {
            Stmt::Expr(expr_stmt) => self.visit_expr(&expr_stmt.expr),
            Stmt::Local(var) => {
                if let Some(init) = &var.init {
                    self.visit_expr(init);
                }
            }
            Stmt::If(if_stmt) => {
                self.visit_expr(&if_stmt.cond);
                for stmt in &if_stmt.then_body {
                    self.visit_stmt(stmt);
                }
                for stmt in &if_stmt.else_body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::Switch(switch) => {
                self.visit_expr(&switch.cond);
                for case in &switch.cases {
                    if let Some(label) = &case.label {
                        self.visit_expr(label);
                    }
                    for stmt in &case.body {
                        self.visit_stmt(stmt);
                    }
                }
            }
            Stmt::Return(ret) => {
                if let Some(value) = &ret.value {
                    self.visit_expr(value);
                }
            }
            Stmt::Block(block) => {
                for stmt in &block.body {
                    self.visit_stmt(stmt);
                }
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.run_expr_rules(expr);
        match expr {
            Expr::DeclRef(_) | Expr::Literal(_) => {}
            Expr::MethodCall(call) => {
                if let Some(receiver) = &call.receiver {
                    self.visit_expr(receiver);
                }
                for arg in &call.args {
                    self.visit_expr(arg);
                }
            }
            Expr::Call(call) => {
                for arg in &call.args {
                    self.visit_expr(arg);
                }
            }
            Expr::Binary(binary) => {
                self.visit_expr(&binary.lhs);
                self.visit_expr(&binary.rhs);
            }
            Expr::Paren(paren) => self.visit_expr(&paren.inner),
        }
    }

    fn run_stmt_rules(&mut self, stmt: &Stmt) {
        let context = Context {
            source: self.source,
            scopes: &self.scopes,
        };
        for rule in &self.rules {
            if let Some(diagnostic) = rule.visit_stmt(stmt, &context) {
                self.diagnostics.push(diagnostic);
            }
        }
    }

    fn run_expr_rules(&mut self, expr: &Expr) {
        let context = Context {
            source: self.source,
            scopes: &self.scopes,
        };
        for rule in &self.rules {
            if let Some(diagnostic) = rule.visit_expr(expr, &context) {
                self.diagnostics.push(diagnostic);
            }
        }
    }
}

/// Runs `rules` over `unit`, streaming every diagnostic into `sink`.
pub fn run_checks(
    unit: &TranslationUnit,
    source: &SourceFile,
    rules: Vec<Box<dyn Rule>>,
    sink: &mut dyn DiagnosticSink,
) {
    let mut visitor = LintVisitor::new(rules, source);
    visitor.visit_unit(unit);
    for diagnostic in visitor.diagnostics {
        sink.report(diagnostic);
    }
}

/// Runs the default rules over `unit` and returns the diagnostics.
#[must_use]
pub fn lint_unit(unit: &TranslationUnit, source: &SourceFile) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    run_checks(unit, source, default_rules(), &mut diagnostics);
    diagnostics
}
