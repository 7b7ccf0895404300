//! Tests for the `QVariant::value<T>()` extractor rewrite rule.
#![allow(clippy::expect_used)]

use qvlint::ast::{
    Decl, DeclRefExpr, Expr, FunctionDecl, MemberCallee, MethodCallExpr, MethodRef, RefDecl, Stmt,
    TranslationUnit, TypeRef, VarDecl,
};
use qvlint::diagnostics::Diagnostic;
use qvlint::fix::apply_fixits;
use qvlint::linter::lint_unit;
use qvlint::source::SourceFile;
use qvlint::span::Span;

fn span_of(source: &str, needle: &str) -> Span {
    let start = source.find(needle).expect("fixture contains needle");
    Span::new(start, start + needle.len())
}

/// Builds `receiver.value<args>()` for a receiver spelled as the first
/// `receiver_len` bytes of `call_text`, with `args` the written
/// template-argument text.
fn extractor_call(source: &str, call_text: &str, receiver_len: usize, args: &str) -> Expr {
    let call_span = span_of(source, call_text);
    let receiver_span = Span::new(call_span.start, call_span.start + receiver_len);
    let member_start = receiver_span.end + 1;
    let args_start = member_start + "value<".len();
    Expr::MethodCall(MethodCallExpr {
        method: MethodRef {
            name: "value".into(),
            class_name: "QVariant".into(),
            template_args: vec![TypeRef { name: args.into() }],
        },
        receiver: Some(Box::new(Expr::DeclRef(DeclRefExpr {
            decl: RefDecl::Var {
                name: source[receiver_span.start..receiver_span.end].into(),
            },
            ty: "QVariant".into(),
            span: receiver_span,
        }))),
        callee: Some(MemberCallee {
            member_span: Span::new(member_start, member_start + "value".len()),
            template_args_span: Some(Span::new(args_start, args_start + args.len())),
        }),
        args: Vec::new(),
        span: call_span,
    })
}

fn unit_with_local(source: &str, stmt_text: &str, name: &str, init: Expr) -> TranslationUnit {
    TranslationUnit {
        decls: vec![Decl::Function(FunctionDecl {
            name: "extract".into(),
            body: vec![Stmt::Local(VarDecl {
                name: name.into(),
                init: Some(init),
                span: span_of(source, stmt_text),
            })],
            span: Span::new(0, source.len()),
        })],
    }
}

fn lint(source: &str, unit: &TranslationUnit) -> Vec<Diagnostic> {
    let file = SourceFile::new("test.cpp", source);
    lint_unit(unit, &file)
}

#[test]
fn test_extractor_call_is_wrapped() {
    let source = "void extract(const QVariant &v)\n{\n    auto s = v.value<QString>();\n}\n";
    let unit = unit_with_local(
        source,
        "auto s = v.value<QString>();",
        "s",
        extractor_call(source, "v.value<QString>()", 1, "QString"),
    );

    let diagnostics = lint(source, &unit);
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.check, "qvariant-value");
    assert_eq!(diagnostic.message, "Use qvariant_cast instead of QVariant::value");
    assert_eq!(diagnostic.offset, span_of(source, "v.value<QString>()").start);
    assert_eq!(diagnostic.fixits.len(), 2);
    assert!(diagnostic.fixits[0].is_insertion());

    let fixed = apply_fixits(source, &diagnostics).expect("edits apply");
    assert_eq!(
        fixed,
        "void extract(const QVariant &v)\n{\n    auto s = qvariant_cast<QString>(v);\n}\n"
    );
}

#[test]
fn test_written_template_text_is_copied_verbatim() {
    let source =
        "void extract(const QVariant &v)\n{\n    auto m = v.value<QMap<QString, int>>();\n}\n";
    let unit = unit_with_local(
        source,
        "auto m = v.value<QMap<QString, int>>();",
        "m",
        extractor_call(source, "v.value<QMap<QString, int>>()", 1, "QMap<QString, int>"),
    );

    let diagnostics = lint(source, &unit);
    assert_eq!(diagnostics.len(), 1);

    let fixed = apply_fixits(source, &diagnostics).expect("edits apply");
    assert!(fixed.contains("auto m = qvariant_cast<QMap<QString, int>>(v);"));
}

#[test]
fn test_complex_receiver_is_wrapped_not_rebuilt() {
    let source =
        "void extract(const QVariantMap &map)\n{\n    auto n = map.value(key).value<int>();\n}\n";
    let outer_text = "map.value(key).value<int>()";
    let outer_span = span_of(source, outer_text);
    let inner_text = "map.value(key)";
    let inner_span = Span::new(outer_span.start, outer_span.start + inner_text.len());
    let key_span = span_of(source, "key");
    let inner = Expr::MethodCall(MethodCallExpr {
        method: MethodRef {
            name: "value".into(),
            class_name: "QMap".into(),
            template_args: Vec::new(),
        },
        receiver: Some(Box::new(Expr::DeclRef(DeclRefExpr {
            decl: RefDecl::Var { name: "map".into() },
            ty: "QVariantMap".into(),
            span: Span::new(outer_span.start, outer_span.start + "map".len()),
        }))),
        callee: Some(MemberCallee {
            member_span: Span::new(
                outer_span.start + "map.".len(),
                outer_span.start + "map.value".len(),
            ),
            template_args_span: None,
        }),
        args: vec![Expr::DeclRef(DeclRefExpr {
            decl: RefDecl::Var { name: "key".into() },
            ty: "QString".into(),
            span: key_span,
        })],
        span: inner_span,
    });
    let member_start = inner_span.end + 1;
    let args_start = member_start + "value<".len();
    let outer = Expr::MethodCall(MethodCallExpr {
        method: MethodRef {
            name: "value".into(),
            class_name: "QVariant".into(),
            template_args: vec![TypeRef { name: "int".into() }],
        },
        receiver: Some(Box::new(inner)),
        callee: Some(MemberCallee {
            member_span: Span::new(member_start, member_start + "value".len()),
            template_args_span: Some(Span::new(args_start, args_start + "int".len())),
        }),
        args: Vec::new(),
        span: outer_span,
    });
    let unit = unit_with_local(source, "auto n = map.value(key).value<int>();", "n", outer);

    let diagnostics = lint(source, &unit);
    assert_eq!(diagnostics.len(), 1, "the QMap::value call must not match");

    let fixed = apply_fixits(source, &diagnostics).expect("edits apply");
    assert!(fixed.contains("auto n = qvariant_cast<int>(map.value(key));"));
}

#[test]
fn test_nested_extractor_calls_nest_the_casts() {
    let source =
        "void extract(const QVariant &v)\n{\n    auto n = v.value<QVariant>().value<int>();\n}\n";
    let inner = extractor_call(source, "v.value<QVariant>()", 1, "QVariant");
    let inner_span = span_of(source, "v.value<QVariant>()");
    let outer_span = span_of(source, "v.value<QVariant>().value<int>()");
    let member_start = inner_span.end + 1;
    let args_start = member_start + "value<".len();
    let outer = Expr::MethodCall(MethodCallExpr {
        method: MethodRef {
            name: "value".into(),
            class_name: "QVariant".into(),
            template_args: vec![TypeRef { name: "int".into() }],
        },
        receiver: Some(Box::new(inner)),
        callee: Some(MemberCallee {
            member_span: Span::new(member_start, member_start + "value".len()),
            template_args_span: Some(Span::new(args_start, args_start + "int".len())),
        }),
        args: Vec::new(),
        span: outer_span,
    });
    let unit = unit_with_local(source, "auto n = v.value<QVariant>().value<int>();", "n", outer);

    let diagnostics = lint(source, &unit);
    assert_eq!(diagnostics.len(), 2, "both extractor calls match");

    let fixed = apply_fixits(source, &diagnostics).expect("edits apply");
    assert!(fixed.contains("auto n = qvariant_cast<int>(qvariant_cast<QVariant>(v));"));
}

#[test]
fn test_no_template_arguments_is_no_match() {
    let source = "void extract(const QVariant &v)\n{\n    auto s = v.value();\n}\n";
    let call_span = span_of(source, "v.value()");
    let call = Expr::MethodCall(MethodCallExpr {
        method: MethodRef {
            name: "value".into(),
            class_name: "QVariant".into(),
            template_args: Vec::new(),
        },
        receiver: Some(Box::new(Expr::DeclRef(DeclRefExpr {
            decl: RefDecl::Var { name: "v".into() },
            ty: "QVariant".into(),
            span: Span::new(call_span.start, call_span.start + 1),
        }))),
        callee: Some(MemberCallee {
            member_span: Span::new(call_span.start + 2, call_span.start + 2 + "value".len()),
            template_args_span: None,
        }),
        args: Vec::new(),
        span: call_span,
    });
    let unit = unit_with_local(source, "auto s = v.value();", "s", call);

    assert!(lint(source, &unit).is_empty());
}

#[test]
fn test_synthesized_call_reports_message_only() {
    let source = "void extract(const QVariant &v)\n{\n    auto s = v.value<QString>();\n}\n";
    let call_span = span_of(source, "v.value<QString>()");
    let call = Expr::MethodCall(MethodCallExpr {
        method: MethodRef {
            name: "value".into(),
            class_name: "QVariant".into(),
            template_args: vec![TypeRef {
                name: "QString".into(),
            }],
        },
        receiver: None,
        callee: None,
        args: Vec::new(),
        span: call_span,
    });
    let unit = unit_with_local(source, "auto s = v.value<QString>();", "s", call);

    let diagnostics = lint(source, &unit);
    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics[0].has_fixits());
    assert_eq!(diagnostics[0].offset, call_span.start);
}

#[test]
fn test_missing_written_argument_list_reports_message_only() {
    let source = "void extract(const QVariant &v)\n{\n    auto s = v.value<QString>();\n}\n";
    let call_span = span_of(source, "v.value<QString>()");
    let call = Expr::MethodCall(MethodCallExpr {
        method: MethodRef {
            name: "value".into(),
            class_name: "QVariant".into(),
            template_args: vec![TypeRef {
                name: "QString".into(),
            }],
        },
        receiver: Some(Box::new(Expr::DeclRef(DeclRefExpr {
            decl: RefDecl::Var { name: "v".into() },
            ty: "QVariant".into(),
            span: Span::new(call_span.start, call_span.start + 1),
        }))),
        callee: Some(MemberCallee {
            member_span: Span::new(call_span.start + 2, call_span.start + 2 + "value".len()),
            template_args_span: None,
        }),
        args: Vec::new(),
        span: call_span,
    });
    let unit = unit_with_local(source, "auto s = v.value<QString>();", "s", call);

    let diagnostics = lint(source, &unit);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].fixits.is_empty());
}

#[test]
fn test_value_method_on_another_class_is_ignored() {
    let source =
        "void extract(const QSettings &settings)\n{\n    auto s = settings.value<QString>();\n}\n";
    let unit = unit_with_local(
        source,
        "auto s = settings.value<QString>();",
        "s",
        {
            let call_span = span_of(source, "settings.value<QString>()");
            let member_start = call_span.start + "settings.".len();
            let args_start = member_start + "value<".len();
            Expr::MethodCall(MethodCallExpr {
                method: MethodRef {
                    name: "value".into(),
                    class_name: "QSettings".into(),
                    template_args: vec![TypeRef {
                        name: "QString".into(),
                    }],
                },
                receiver: Some(Box::new(Expr::DeclRef(DeclRefExpr {
                    decl: RefDecl::Var {
                        name: "settings".into(),
                    },
                    ty: "QSettings".into(),
                    span: Span::new(call_span.start, call_span.start + "settings".len()),
                }))),
                callee: Some(MemberCallee {
                    member_span: Span::new(member_start, member_start + "value".len()),
                    template_args_span: Some(Span::new(args_start, args_start + "QString".len())),
                }),
                args: Vec::new(),
                span: call_span,
            })
        },
    );

    assert!(lint(source, &unit).is_empty());
}
