//! Rules behind the `qvariant-deprecated` check: references to legacy
//! `QVariant::Type` enumerators and calls to the legacy `type()`
//! accessor.

use super::{CheckLevel, CheckMeta, Context, Rule, QVARIANT_DEPRECATED};
use crate::ast::{DeclRefExpr, Expr, RefDecl, ScopeKind};
use crate::diagnostics::Diagnostic;
use crate::fix::FixEdit;
use crate::symbols::variant_to_meta_type;

/// Flags references to enumerators of the legacy `QVariant::Type`
/// enumeration and rewrites them to the `QMetaType` equivalent.
pub struct DeprecatedEnumValueRule {
    enum_type: &'static str,
    container: &'static str,
    private_impl: &'static str,
    namespace: &'static str,
}

/// A matched enumerator reference, carried from predicate to synthesis.
struct EnumValueMatch<'a> {
    reference: &'a DeclRefExpr,
    constant: &'a str,
    replacement: &'static str,
}

impl DeprecatedEnumValueRule {
    /// Creates a rule flagging enumerators of `enum_type` declared in
    /// `container`, suggesting the same-named constant in `namespace`.
    /// References written inside `container` or `private_impl` are the
    /// class's own internals and are left alone.
    #[must_use]
    pub fn new(
        enum_type: &'static str,
        container: &'static str,
        private_impl: &'static str,
        namespace: &'static str,
    ) -> Self {
        Self {
            enum_type,
            container,
            private_impl,
            namespace,
        }
    }

    /// The `QVariant::Type` to `QMetaType` configuration.
    #[must_use]
    pub fn qvariant() -> Self {
        Self::new("QVariant::Type", "QVariant", "Private", "QMetaType")
    }

    fn match_enum_value<'a>(
        &self,
        expr: &'a Expr,
        context: &Context<'_>,
    ) -> Option<EnumValueMatch<'a>> {
        let Expr::DeclRef(reference) = expr else {
            return None;
        };
        let RefDecl::EnumConstant { name } = &reference.decl else {
            return None;
        };
        if reference.ty.as_str() != self.enum_type {
            return None;
        }
        let replacement = variant_to_meta_type(name)?;
        if self.inside_container(context) {
            return None;
        }
        Some(EnumValueMatch {
            reference,
            constant: name.as_str(),
            replacement,
        })
    }

    fn inside_container(&self, context: &Context<'_>) -> bool {
        context
            .scopes
            .first_enclosing(ScopeKind::Class)
            .is_some_and(|class| {
                class.name.as_str() == self.container || class.name.as_str() == self.private_impl
            })
    }
}

impl Rule for DeprecatedEnumValueRule {
    fn name(&self) -> &'static str {
        "DeprecatedEnumValueRule"
    }

    fn meta(&self) -> CheckMeta {
        CheckMeta {
            check: QVARIANT_DEPRECATED,
            level: CheckLevel::Level1,
        }
    }

    fn visit_expr(&self, expr: &Expr, context: &Context<'_>) -> Option<Diagnostic> {
        let matched = self.match_enum_value(expr, context)?;
        let replacement = format!("{}::{}", self.namespace, matched.replacement);
        let message = format!(
            "{}::{} is deprecated, use {}",
            self.container, matched.constant, replacement
        );
        let span = matched.reference.span;
        Some(
            Diagnostic::warning(self.meta().check, message, context.source, span.start)
                .with_fixits(vec![FixEdit::replacement(span, replacement)]),
        )
    }
}

/// Flags calls to the legacy `type()` accessor and renames them to
/// `userType()`.
pub struct AccessorRenameRule {
    container: &'static str,
    method: &'static str,
    replacement: &'static str,
}

impl AccessorRenameRule {
    /// Creates a rule renaming calls to `container::method()` so they
    /// call `container::replacement()` instead.
    #[must_use]
    pub fn new(
        container: &'static str,
        method: &'static str,
        replacement: &'static str,
    ) -> Self {
        Self {
            container,
            method,
            replacement,
        }
    }

    /// The `QVariant::type()` to `QVariant::userType()` configuration.
    #[must_use]
    pub fn qvariant() -> Self {
        Self::new("QVariant", "type", "userType")
    }
}

impl Rule for AccessorRenameRule {
    fn name(&self) -> &'static str {
        "AccessorRenameRule"
    }

    fn meta(&self) -> CheckMeta {
        CheckMeta {
            check: QVARIANT_DEPRECATED,
            level: CheckLevel::Level1,
        }
    }

    fn visit_expr(&self, expr: &Expr, context: &Context<'_>) -> Option<Diagnostic> {
        let Expr::MethodCall(call) = expr else {
            return None;
        };
        if call.method.name.as_str() != self.method
            || call.method.class_name.as_str() != self.container
        {
            return None;
        }
        let message = format!(
            "Use {container}::{new}() instead of {container}::{old}()",
            container = self.container,
            new = self.replacement,
            old = self.method,
        );
        // The rename touches only the accessor token itself. When the
        // written member name cannot be recovered (macro-generated
        // callees), report without a fix-it.
        let diagnostic = match &call.callee {
            Some(callee) => Diagnostic::warning(
                self.meta().check,
                message,
                context.source,
                callee.member_span.start,
            )
            .with_fixits(vec![FixEdit::replacement(callee.member_span, self.replacement)]),
            None => {
                Diagnostic::warning(self.meta().check, message, context.source, call.span.start)
            }
        };
        Some(diagnostic)
    }
}
