//! Syntax tree model consumed by the analysis passes.
//!
//! straycheck never parses source text. An external frontend parses a
//! program, runs its own scope resolution, and hands the core a forest of
//! [`SourceUnit`]s built from the closed node kinds below. Node kinds are
//! exhaustive enums so the traversal engine matches on them at compile
//! time; adding a kind is a compile-checked change everywhere it matters.
//!
//! All node types derive serde traits, so a frontend in another process
//! (or another language) can ship forests as JSON documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier a frontend assigns to one syntax node, unique within a
/// forest. Used as the lookup key into the resolution oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Identity of one declared entity (variable, constant, field owner,
/// local binding) for the lifetime of an analysis run. Two references to
/// the same declaration carry equal ids; distinct declarations carry
/// distinct ids even when they share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// Source position used for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub file: String,
    /// 1-indexed line; 0 when the frontend has no position information.
    pub line: u32,
    /// 1-indexed column; 0 when the frontend has no position information.
    pub column: u32,
}

impl Span {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// One parsed compilation unit (a source file) within a scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Path the frontend parsed this unit from, for reporting only.
    pub path: String,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

/// Top-level declaration kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Decl {
    /// Package-level variable or constant declaration.
    Value(ValueDecl),
    /// Structure type declaration with its field list.
    Struct(StructDecl),
    /// Function declaration with a body.
    Func(FuncDecl),
}

/// Whether a value declaration binds variables or constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Var,
    Const,
}

/// A variable or constant declaration: one or more bindings plus their
/// initializer expressions. Appears both at unit top level and, via
/// [`StmtKind::Local`], inside function bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueDecl {
    pub span: Span,
    pub kind: ValueKind,
    pub bindings: Vec<Binding>,
    /// Right-hand-side initializers. May be empty, shorter, or as long as
    /// `bindings`, matching the source.
    pub values: Vec<Expr>,
}

/// One declared name inside a value declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binding {
    pub id: NodeId,
    pub name: String,
    pub span: Span,
    /// Lexical binding identity from the frontend's scope resolution,
    /// when it produced one.
    pub symbol: Option<SymbolId>,
}

/// A structure type declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: String,
    pub span: Span,
    pub fields: Vec<FieldDef>,
}

/// One named field inside a structure declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub span: Span,
}

/// A function declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    pub span: Span,
    pub body: Vec<Stmt>,
}

/// An expression node: stable id, position, and kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expr {
    pub id: NodeId,
    pub span: Span,
    pub kind: ExprKind,
}

/// Expression kinds the analyses observe. Frontends lower anything else
/// (slices, conversions, closures without declarations, ...) into the
/// nearest kind or a `Literal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExprKind {
    /// A name reference. `binding` is the lexical identity from the
    /// frontend's scope resolution, absent when unresolved.
    Name {
        name: String,
        binding: Option<SymbolId>,
    },
    /// Member access `recv.member`.
    Member { recv: Box<Expr>, member: String },
    /// Index access `recv[index]`.
    Index { recv: Box<Expr>, index: Box<Expr> },
    /// Call `callee(args)`.
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// Composite (struct-literal) construction `T{...}`. The literal's
    /// type is recovered through the oracle via this expression's id.
    Composite { elems: Vec<CompositeElem> },
    /// Binary operation. The operator is carried as printed text; the
    /// analyses only walk the operands.
    Binary {
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Unary operation.
    Unary { op: String, expr: Box<Expr> },
    /// Opaque literal (number, string, bool, ...), carried as printed text.
    Literal(String),
}

/// One element of a composite literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CompositeElem {
    /// Keyed element `field: value`, attributable to a field.
    Keyed { key: String, value: Expr },
    /// Positional element, never attributed to a field.
    Positional(Expr),
}

/// A statement node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stmt {
    pub span: Span,
    pub kind: StmtKind,
}

/// Statement kinds the analyses observe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StmtKind {
    /// Expression statement.
    Expr(Expr),
    /// Assignment `targets = values`.
    Assign { targets: Vec<Expr>, values: Vec<Expr> },
    /// Deferred call. The expression is expected to be a `Call`.
    Defer(Expr),
    /// Local variable or constant declaration inside a function body.
    Local(ValueDecl),
    /// Nested block.
    Block(Vec<Stmt>),
    /// Conditional with optional else branch.
    If {
        cond: Expr,
        then: Vec<Stmt>,
        otherwise: Vec<Stmt>,
    },
    /// Loop with optional condition.
    For { cond: Option<Expr>, body: Vec<Stmt> },
    /// Return with zero or more values.
    Return(Vec<Expr>),
}
