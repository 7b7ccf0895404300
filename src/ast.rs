//! Host-independent model of a resolved C++ syntax tree.
//!
//! The host front-end owns parsing and type checking; before running the
//! checks it maps the nodes the checks care about into this model. Every
//! semantic fact (static type names, referenced declarations, declaring
//! classes, resolved template arguments) arrives pre-resolved, and every
//! syntactic fact is an exact half-open [`Span`] into the original text.
//! Anything the host cannot recover syntactically (macro-expanded
//! callees, synthesized receivers) is simply absent, and the checks
//! degrade to message-only diagnostics.

use crate::span::Span;
use compact_str::CompactString;
use smallvec::SmallVec;

/// The kind of a lexical declaration scope.
/// Uses `CompactString` names in [`ScopeFrame`] - stores up to 24 bytes
/// inline without heap allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// A namespace scope.
    Namespace,
    /// A class, struct, or union scope.
    Class,
    /// A function or method scope.
    Function,
}

/// One frame of the lexical scope chain.
#[derive(Debug, Clone)]
pub struct ScopeFrame {
    /// Kind of the declaration that opened this scope.
    pub kind: ScopeKind,
    /// Name of that declaration.
    pub name: CompactString,
}

/// Stack of enclosing declaration scopes, outermost first.
///
/// The traversal pushes a frame when it enters a namespace, class, or
/// function declaration and pops it on the way out. Rules query it to
/// answer "which declaration of kind D encloses the current node?",
/// walking from the innermost frame outward.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    /// Uses SmallVec - most code has < 4 nested scopes.
    frames: SmallVec<[ScopeFrame; 4]>,
}

impl ScopeStack {
    /// Creates an empty scope stack (file scope).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters a scope of the given kind and name.
    pub fn push(&mut self, kind: ScopeKind, name: &str) {
        self.frames.push(ScopeFrame {
            kind,
            name: CompactString::from(name),
        });
    }

    /// Leaves the innermost scope. Leaving file scope is a no-op.
    pub fn pop(&mut self) {
        self.frames.pop();
    }

    /// Returns the first enclosing scope of `kind`, innermost outward,
    /// or `None` when no such scope exists up to file scope.
    #[must_use]
    pub fn first_enclosing(&self, kind: ScopeKind) -> Option<&ScopeFrame> {
        self.frames.iter().rev().find(|frame| frame.kind == kind)
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

/// A whole resolved translation unit handed over by the host.
#[derive(Debug, Clone, Default)]
pub struct TranslationUnit {
    /// Top-level declarations, in source order.
    pub decls: Vec<Decl>,
}

/// A declaration node.
#[derive(Debug, Clone)]
pub enum Decl {
    /// A namespace with its member declarations.
    Namespace(NamespaceDecl),
    /// A class (or struct) with its member declarations.
    Class(ClassDecl),
    /// A function or method with its body statements.
    Function(FunctionDecl),
    /// A variable with an optional initializer expression.
    Var(VarDecl),
}

/// A namespace declaration.
#[derive(Debug, Clone)]
pub struct NamespaceDecl {
    /// Namespace name.
    pub name: CompactString,
    /// Declarations nested inside the namespace.
    pub members: Vec<Decl>,
    /// Source span of the whole declaration.
    pub span: Span,
}

/// A class declaration. Methods appear as [`Decl::Function`] members.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    /// Class name, unqualified.
    pub name: CompactString,
    /// Member declarations (nested classes, methods, fields).
    pub members: Vec<Decl>,
    /// Source span of the whole declaration.
    pub span: Span,
}

/// A function or method declaration with a body.
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    /// Function name, unqualified.
    pub name: CompactString,
    /// Body statements, in source order.
    pub body: Vec<Stmt>,
    /// Source span of the whole declaration.
    pub span: Span,
}

/// A variable declaration, at any scope.
#[derive(Debug, Clone)]
pub struct VarDecl {
    /// Variable name.
    pub name: CompactString,
    /// Initializer expression, when present.
    pub init: Option<Expr>,
    /// Source span of the whole declaration.
    pub span: Span,
}

/// A statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// An expression in statement position.
    Expr(ExprStmt),
    /// A local variable declaration.
    Local(VarDecl),
    /// An `if` statement.
    If(IfStmt),
    /// A `switch` statement.
    Switch(SwitchStmt),
    /// A `return` statement.
    Return(ReturnStmt),
    /// A braced block.
    Block(BlockStmt),
}

/// An expression statement.
#[derive(Debug, Clone)]
pub struct ExprStmt {
    /// The expression.
    pub expr: Expr,
    /// Source span including the trailing semicolon.
    pub span: Span,
}

/// An `if` statement with optional `else` branch.
#[derive(Debug, Clone)]
pub struct IfStmt {
    /// Condition expression.
    pub cond: Expr,
    /// Then-branch statements.
    pub then_body: Vec<Stmt>,
    /// Else-branch statements, empty when absent.
    pub else_body: Vec<Stmt>,
    /// Source span of the whole statement.
    pub span: Span,
}

/// A `switch` statement.
#[derive(Debug, Clone)]
pub struct SwitchStmt {
    /// The switched-over expression.
    pub cond: Expr,
    /// The cases, in source order.
    pub cases: Vec<SwitchCase>,
    /// Source span of the whole statement.
    pub span: Span,
}

/// One `case` (or `default`) arm of a switch.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    /// The case label value; `None` for `default:`.
    pub label: Option<Expr>,
    /// Statements of the arm.
    pub body: Vec<Stmt>,
    /// Source span of the arm.
    pub span: Span,
}

/// A `return` statement.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    /// Returned expression, when present.
    pub value: Option<Expr>,
    /// Source span of the whole statement.
    pub span: Span,
}

/// A braced statement block.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    /// Statements of the block.
    pub body: Vec<Stmt>,
    /// Source span including the braces.
    pub span: Span,
}

/// An expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A reference to a declared name, e.g. `QVariant::Map` or `v`.
    DeclRef(DeclRefExpr),
    /// A member function call, e.g. `v.type()` or `v.value<Foo>()`.
    MethodCall(MethodCallExpr),
    /// A call to a free function.
    Call(CallExpr),
    /// A binary operation, e.g. `a == b`.
    Binary(BinaryExpr),
    /// A parenthesized sub-expression.
    Paren(ParenExpr),
    /// A literal token; opaque to the checks.
    Literal(LiteralExpr),
}

impl Expr {
    /// Source span of the expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::DeclRef(e) => e.span,
            Self::MethodCall(e) => e.span,
            Self::Call(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Paren(e) => e.span,
            Self::Literal(e) => e.span,
        }
    }
}

/// What a [`DeclRefExpr`] resolves to.
#[derive(Debug, Clone)]
pub enum RefDecl {
    /// An enumeration constant with its bare name, e.g. `Map`.
    EnumConstant {
        /// Bare enumerator name without qualification.
        name: CompactString,
    },
    /// A variable.
    Var {
        /// Variable name.
        name: CompactString,
    },
}

/// A resolved reference to a declared name.
#[derive(Debug, Clone)]
pub struct DeclRefExpr {
    /// The declaration this reference resolves to.
    pub decl: RefDecl,
    /// Printable name of the reference's static type, e.g.
    /// `QVariant::Type`.
    pub ty: CompactString,
    /// Source span of the full (possibly qualified) reference.
    pub span: Span,
}

/// The resolved method a [`MethodCallExpr`] invokes.
#[derive(Debug, Clone)]
pub struct MethodRef {
    /// Method name, unqualified.
    pub name: CompactString,
    /// Name of the class that declares the method.
    pub class_name: CompactString,
    /// Resolved template arguments of the invoked specialization, empty
    /// for non-template methods.
    pub template_args: Vec<TypeRef>,
}

/// A resolved type name, e.g. a template argument.
#[derive(Debug, Clone)]
pub struct TypeRef {
    /// Printable type name.
    pub name: CompactString,
}

/// Syntactic facts about the callee of a member call, present only when
/// the call is spelled out in the source rather than synthesized.
#[derive(Debug, Clone)]
pub struct MemberCallee {
    /// Span of just the member-name token, e.g. `type` in `v.type()`.
    pub member_span: Span,
    /// Span of the explicit template-argument text as written, e.g.
    /// `Foo` in `v.value<Foo>()`; `None` when no argument list is
    /// spelled out at the call site.
    pub template_args_span: Option<Span>,
}

/// A member function call.
#[derive(Debug, Clone)]
pub struct MethodCallExpr {
    /// The resolved method being invoked.
    pub method: MethodRef,
    /// The receiver (implicit object argument); `None` when the host
    /// cannot recover it syntactically.
    pub receiver: Option<Box<Expr>>,
    /// Syntactic callee facts; `None` when the call is synthesized.
    pub callee: Option<MemberCallee>,
    /// Call arguments.
    pub args: Vec<Expr>,
    /// Source span of the whole call expression.
    pub span: Span,
}

/// A call to a free function.
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// Name of the called function.
    pub callee: CompactString,
    /// Call arguments.
    pub args: Vec<Expr>,
    /// Source span of the whole call expression.
    pub span: Span,
}

/// A binary operation.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    /// Operator spelling, e.g. `==`.
    pub op: CompactString,
    /// Left operand.
    pub lhs: Box<Expr>,
    /// Right operand.
    pub rhs: Box<Expr>,
    /// Source span of the whole operation.
    pub span: Span,
}

/// A parenthesized sub-expression.
#[derive(Debug, Clone)]
pub struct ParenExpr {
    /// The inner expression.
    pub inner: Box<Expr>,
    /// Source span including the parentheses.
    pub span: Span,
}

/// A literal token.
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    /// Source span of the literal.
    pub span: Span,
}
