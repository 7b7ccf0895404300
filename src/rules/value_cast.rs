//! Rule behind the `qvariant-value` check: calls to the templated
//! `QVariant::value<T>()` extractor, which Qt recommends writing as
//! `qvariant_cast<T>(variant)`.

use super::{CheckLevel, CheckMeta, Context, Rule, QVARIANT_VALUE};
use crate::ast::{Expr, MemberCallee, MethodCallExpr};
use crate::diagnostics::Diagnostic;
use crate::fix::FixEdit;
use crate::span::Span;

/// Flags calls to the container's templated extractor and rewrites them
/// to the free cast function wrapping the receiver.
pub struct ExtractorCastRule {
    container: &'static str,
    method: &'static str,
    cast_function: &'static str,
}

/// A matched extractor call, carried from predicate to synthesis.
struct ExtractorMatch<'a> {
    call: &'a MethodCallExpr,
    receiver: Option<&'a Expr>,
    callee: Option<&'a MemberCallee>,
}

impl ExtractorCastRule {
    /// Creates a rule rewriting `receiver.method<T>()` calls on
    /// `container` into `cast_function<T>(receiver)`.
    #[must_use]
    pub fn new(
        container: &'static str,
        method: &'static str,
        cast_function: &'static str,
    ) -> Self {
        Self {
            container,
            method,
            cast_function,
        }
    }

    /// The `QVariant::value` to `qvariant_cast` configuration.
    #[must_use]
    pub fn qvariant() -> Self {
        Self::new("QVariant", "value", "qvariant_cast")
    }

    fn match_extractor<'a>(&self, expr: &'a Expr) -> Option<ExtractorMatch<'a>> {
        let Expr::MethodCall(call) = expr else {
            return None;
        };
        if call.method.name.as_str() != self.method
            || call.method.class_name.as_str() != self.container
        {
            return None;
        }
        if call.method.template_args.len() != 1 {
            return None;
        }
        Some(ExtractorMatch {
            call,
            receiver: call.receiver.as_deref(),
            callee: call.callee.as_ref(),
        })
    }

    /// Builds the wrap transformation: insert `cast<ARGS>(` before the
    /// receiver, then replace everything from the receiver's end through
    /// the end of the call with `)`. Returns no edits when the receiver,
    /// the written callee, or the written template arguments cannot be
    /// recovered.
    fn wrap_fixits(&self, matched: &ExtractorMatch<'_>, context: &Context<'_>) -> Vec<FixEdit> {
        let Some(receiver) = matched.receiver else {
            return Vec::new();
        };
        let Some(callee) = matched.callee else {
            return Vec::new();
        };
        let Some(args_span) = callee.template_args_span else {
            return Vec::new();
        };
        // The written argument text is copied verbatim, typedefs and
        // nested templates included.
        let Some(args_text) = context.source.slice(args_span) else {
            return Vec::new();
        };
        let receiver_span = receiver.span();
        if receiver_span.end > matched.call.span.end {
            return Vec::new();
        }
        vec![
            FixEdit::insertion(
                receiver_span.start,
                format!("{}<{}>(", self.cast_function, args_text),
            ),
            FixEdit::replacement(Span::new(receiver_span.end, matched.call.span.end), ")"),
        ]
    }
}

impl Rule for ExtractorCastRule {
    fn name(&self) -> &'static str {
        "ExtractorCastRule"
    }

    fn meta(&self) -> CheckMeta {
        CheckMeta {
            check: QVARIANT_VALUE,
            level: CheckLevel::Manual,
        }
    }

    fn visit_expr(&self, expr: &Expr, context: &Context<'_>) -> Option<Diagnostic> {
        let matched = self.match_extractor(expr)?;
        let message = format!(
            "Use {} instead of {}::{}",
            self.cast_function, self.container, self.method
        );
        let fixits = self.wrap_fixits(&matched, context);
        Some(
            Diagnostic::warning(self.meta().check, message, context.source, matched.call.span.start)
                .with_fixits(fixits),
        )
    }
}
