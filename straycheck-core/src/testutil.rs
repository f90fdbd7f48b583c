//! Hand-construction helpers for syntax trees used across the test
//! modules. Node ids are assigned by each test; symbol ids mimic what a
//! frontend's scope resolution would record.

use crate::syntax::{
    Binding, CompositeElem, Decl, Expr, ExprKind, FieldDef, FuncDecl, NodeId, SourceUnit, Span,
    Stmt, StmtKind, StructDecl, SymbolId, ValueDecl, ValueKind,
};

pub fn span(line: u32) -> Span {
    Span::new("test.src", line, 1)
}

pub fn span_in(file: &str, line: u32) -> Span {
    Span::new(file, line, 1)
}

pub fn name(id: u32, text: &str, binding: Option<u32>) -> Expr {
    Expr {
        id: NodeId(id),
        span: span(0),
        kind: ExprKind::Name {
            name: text.to_string(),
            binding: binding.map(SymbolId),
        },
    }
}

pub fn member(id: u32, recv: Expr, field: &str) -> Expr {
    Expr {
        id: NodeId(id),
        span: span(0),
        kind: ExprKind::Member {
            recv: Box::new(recv),
            member: field.to_string(),
        },
    }
}

pub fn index(id: u32, recv: Expr, idx: Expr) -> Expr {
    Expr {
        id: NodeId(id),
        span: span(0),
        kind: ExprKind::Index {
            recv: Box::new(recv),
            index: Box::new(idx),
        },
    }
}

pub fn call(id: u32, callee: Expr) -> Expr {
    Expr {
        id: NodeId(id),
        span: span(0),
        kind: ExprKind::Call {
            callee: Box::new(callee),
            args: Vec::new(),
        },
    }
}

pub fn lit(id: u32, text: &str) -> Expr {
    Expr {
        id: NodeId(id),
        span: span(0),
        kind: ExprKind::Literal(text.to_string()),
    }
}

pub fn binary(id: u32, op: &str, lhs: Expr, rhs: Expr) -> Expr {
    Expr {
        id: NodeId(id),
        span: span(0),
        kind: ExprKind::Binary {
            op: op.to_string(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
    }
}

pub fn composite(id: u32, elems: Vec<CompositeElem>) -> Expr {
    Expr {
        id: NodeId(id),
        span: span(0),
        kind: ExprKind::Composite { elems },
    }
}

pub fn keyed(key: &str, value: Expr) -> CompositeElem {
    CompositeElem::Keyed {
        key: key.to_string(),
        value,
    }
}

pub fn positional(value: Expr) -> CompositeElem {
    CompositeElem::Positional(value)
}

pub fn binding(id: u32, text: &str, symbol: Option<u32>, line: u32) -> Binding {
    Binding {
        id: NodeId(id),
        name: text.to_string(),
        span: span(line),
        symbol: symbol.map(SymbolId),
    }
}

pub fn binding_in(file: &str, id: u32, text: &str, symbol: Option<u32>, line: u32) -> Binding {
    Binding {
        id: NodeId(id),
        name: text.to_string(),
        span: span_in(file, line),
        symbol: symbol.map(SymbolId),
    }
}

pub fn value_decl(bindings: Vec<Binding>, values: Vec<Expr>, line: u32) -> Decl {
    Decl::Value(raw_value_decl(bindings, values, line))
}

pub fn raw_value_decl(bindings: Vec<Binding>, values: Vec<Expr>, line: u32) -> ValueDecl {
    ValueDecl {
        span: span(line),
        kind: ValueKind::Var,
        bindings,
        values,
    }
}

pub fn strukt(type_name: &str, fields: &[(&str, u32)], line: u32) -> Decl {
    Decl::Struct(StructDecl {
        name: type_name.to_string(),
        span: span(line),
        fields: fields
            .iter()
            .map(|(field, field_line)| FieldDef {
                name: field.to_string(),
                span: span(*field_line),
            })
            .collect(),
    })
}

pub fn func(fn_name: &str, body: Vec<Stmt>) -> Decl {
    Decl::Func(FuncDecl {
        name: fn_name.to_string(),
        span: span(0),
        body,
    })
}

pub fn stmt_expr(expr: Expr) -> Stmt {
    Stmt {
        span: span(0),
        kind: StmtKind::Expr(expr),
    }
}

pub fn assign(targets: Vec<Expr>, values: Vec<Expr>) -> Stmt {
    Stmt {
        span: span(0),
        kind: StmtKind::Assign { targets, values },
    }
}

pub fn defer_at(line: u32, call: Expr) -> Stmt {
    Stmt {
        span: span(line),
        kind: StmtKind::Defer(call),
    }
}

pub fn local(decl: ValueDecl) -> Stmt {
    let span = decl.span.clone();
    Stmt {
        span,
        kind: StmtKind::Local(decl),
    }
}

pub fn unit(decls: Vec<Decl>) -> SourceUnit {
    SourceUnit {
        path: "test.src".to_string(),
        decls,
    }
}

pub fn unit_in(file: &str, decls: Vec<Decl>) -> SourceUnit {
    SourceUnit {
        path: file.to_string(),
        decls,
    }
}
