//! Depth-first traversal engine shared by all analysis passes.
//!
//! A pass implements [`Visitor`] and receives callbacks for the node
//! kinds it cares about while the engine handles recursion order and the
//! scoping rules:
//!
//! - Value declarations do not recurse generically; their initializer
//!   expressions are re-entered explicitly, and the declared bindings are
//!   never visited as name references.
//! - [`Visitor::value_decl`] carries a top-level flag so package-scope
//!   declarations can be told apart from locals inside function bodies.
//! - Function boundaries fire enter/exit callbacks so per-function state
//!   can be reset.

use crate::syntax::{
    CompositeElem, Decl, Expr, ExprKind, FuncDecl, SourceUnit, Stmt, StmtKind, StructDecl,
    SymbolId, ValueDecl,
};

/// Callbacks invoked by the traversal engine. All methods default to
/// no-ops; passes override the ones they observe.
pub trait Visitor {
    /// A variable/constant declaration. `top_level` is true outside any
    /// function body.
    fn value_decl(&mut self, _decl: &ValueDecl, _top_level: bool) {}
    /// A structure type declaration.
    fn struct_decl(&mut self, _decl: &StructDecl) {}
    /// Entering a function body.
    fn enter_function(&mut self, _func: &FuncDecl) {}
    /// Leaving a function body.
    fn exit_function(&mut self, _func: &FuncDecl) {}
    /// A name reference in expression position.
    fn name_ref(&mut self, _expr: &Expr, _name: &str, _binding: Option<SymbolId>) {}
    /// A member access `recv.member`; `expr` is the access itself.
    fn member_access(&mut self, _expr: &Expr, _recv: &Expr, _member: &str) {}
    /// A composite literal; `expr` is the literal itself.
    fn composite(&mut self, _expr: &Expr, _elems: &[CompositeElem]) {}
    /// An assignment statement.
    fn assign(&mut self, _stmt: &Stmt, _targets: &[Expr], _values: &[Expr]) {}
    /// A deferred call statement.
    fn defer_stmt(&mut self, _stmt: &Stmt, _call: &Expr) {}
}

/// Walks every unit in order.
pub fn walk_units<V: Visitor>(units: &[SourceUnit], visitor: &mut V) {
    for unit in units {
        walk_unit(unit, visitor);
    }
}

/// Walks one compilation unit depth-first.
pub fn walk_unit<V: Visitor>(unit: &SourceUnit, visitor: &mut V) {
    for decl in &unit.decls {
        walk_decl(decl, visitor);
    }
}

fn walk_decl<V: Visitor>(decl: &Decl, visitor: &mut V) {
    match decl {
        Decl::Value(value) => {
            visitor.value_decl(value, true);
            // Explicit re-entry: initializers are walked, bindings are not.
            for expr in &value.values {
                walk_expr(expr, visitor);
            }
        }
        Decl::Struct(strukt) => visitor.struct_decl(strukt),
        Decl::Func(func) => {
            visitor.enter_function(func);
            for stmt in &func.body {
                walk_stmt(stmt, visitor);
            }
            visitor.exit_function(func);
        }
    }
}

/// Walks one statement and its children.
pub fn walk_stmt<V: Visitor>(stmt: &Stmt, visitor: &mut V) {
    match &stmt.kind {
        StmtKind::Expr(expr) => walk_expr(expr, visitor),
        StmtKind::Assign { targets, values } => {
            visitor.assign(stmt, targets, values);
            for expr in targets {
                walk_expr(expr, visitor);
            }
            for expr in values {
                walk_expr(expr, visitor);
            }
        }
        StmtKind::Defer(call) => {
            visitor.defer_stmt(stmt, call);
            walk_expr(call, visitor);
        }
        StmtKind::Local(decl) => {
            visitor.value_decl(decl, false);
            for expr in &decl.values {
                walk_expr(expr, visitor);
            }
        }
        StmtKind::Block(stmts) => {
            for stmt in stmts {
                walk_stmt(stmt, visitor);
            }
        }
        StmtKind::If {
            cond,
            then,
            otherwise,
        } => {
            walk_expr(cond, visitor);
            for stmt in then {
                walk_stmt(stmt, visitor);
            }
            for stmt in otherwise {
                walk_stmt(stmt, visitor);
            }
        }
        StmtKind::For { cond, body } => {
            if let Some(cond) = cond {
                walk_expr(cond, visitor);
            }
            for stmt in body {
                walk_stmt(stmt, visitor);
            }
        }
        StmtKind::Return(values) => {
            for expr in values {
                walk_expr(expr, visitor);
            }
        }
    }
}

/// Walks one expression and its children.
pub fn walk_expr<V: Visitor>(expr: &Expr, visitor: &mut V) {
    match &expr.kind {
        ExprKind::Name { name, binding } => visitor.name_ref(expr, name, *binding),
        ExprKind::Member { recv, member } => {
            visitor.member_access(expr, recv, member);
            walk_expr(recv, visitor);
        }
        ExprKind::Index { recv, index } => {
            walk_expr(recv, visitor);
            walk_expr(index, visitor);
        }
        ExprKind::Call { callee, args } => {
            walk_expr(callee, visitor);
            for arg in args {
                walk_expr(arg, visitor);
            }
        }
        ExprKind::Composite { elems } => {
            visitor.composite(expr, elems);
            for elem in elems {
                match elem {
                    CompositeElem::Keyed { value, .. } => walk_expr(value, visitor),
                    CompositeElem::Positional(value) => walk_expr(value, visitor),
                }
            }
        }
        ExprKind::Binary { lhs, rhs, .. } => {
            walk_expr(lhs, visitor);
            walk_expr(rhs, visitor);
        }
        ExprKind::Unary { expr: inner, .. } => walk_expr(inner, visitor),
        ExprKind::Literal(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{
        binding, call, defer_at, func, local, member, name, raw_value_decl, stmt_expr, unit,
        value_decl,
    };

    /// Records callback order for traversal assertions.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn value_decl(&mut self, decl: &ValueDecl, top_level: bool) {
            let names: Vec<&str> = decl.bindings.iter().map(|b| b.name.as_str()).collect();
            self.events
                .push(format!("decl({},{})", names.join(","), top_level));
        }

        fn enter_function(&mut self, func: &FuncDecl) {
            self.events.push(format!("enter({})", func.name));
        }

        fn exit_function(&mut self, func: &FuncDecl) {
            self.events.push(format!("exit({})", func.name));
        }

        fn name_ref(&mut self, _expr: &Expr, name: &str, _binding: Option<SymbolId>) {
            self.events.push(format!("name({})", name));
        }

        fn member_access(&mut self, _expr: &Expr, _recv: &Expr, member: &str) {
            self.events.push(format!("member({})", member));
        }

        fn defer_stmt(&mut self, _stmt: &Stmt, _call: &Expr) {
            self.events.push("defer".to_string());
        }
    }

    #[test]
    fn test_bindings_are_not_name_refs() {
        // var a = b; `a` must not fire name_ref, `b` must.
        let unit = unit(vec![value_decl(
            vec![binding(1, "a", Some(1), 1)],
            vec![name(2, "b", Some(2))],
            1,
        )]);

        let mut recorder = Recorder::default();
        walk_unit(&unit, &mut recorder);
        assert_eq!(recorder.events, vec!["decl(a,true)", "name(b)"]);
    }

    #[test]
    fn test_local_decl_is_not_top_level() {
        let unit = unit(vec![func(
            "f",
            vec![local(raw_value_decl(
                vec![binding(1, "x", Some(1), 2)],
                vec![name(2, "y", Some(2))],
                2,
            ))],
        )]);

        let mut recorder = Recorder::default();
        walk_unit(&unit, &mut recorder);
        assert_eq!(
            recorder.events,
            vec!["enter(f)", "decl(x,false)", "name(y)", "exit(f)"]
        );
    }

    #[test]
    fn test_member_chain_fires_inner_and_outer() {
        // a.b.c produces two member accesses and one name ref on the root.
        let chain = member(3, member(2, name(1, "a", Some(1)), "b"), "c");
        let unit = unit(vec![func("f", vec![stmt_expr(chain)])]);

        let mut recorder = Recorder::default();
        walk_unit(&unit, &mut recorder);
        assert_eq!(
            recorder.events,
            vec![
                "enter(f)",
                "member(c)",
                "member(b)",
                "name(a)",
                "exit(f)"
            ]
        );
    }

    #[test]
    fn test_defer_fires_before_call_children() {
        let deferred = call(2, member(3, name(1, "a", Some(1)), "Close"));
        let unit = unit(vec![func("f", vec![defer_at(4, deferred)])]);

        let mut recorder = Recorder::default();
        walk_unit(&unit, &mut recorder);
        assert_eq!(
            recorder.events,
            vec![
                "enter(f)",
                "defer",
                "member(Close)",
                "name(a)",
                "exit(f)"
            ]
        );
    }
}
