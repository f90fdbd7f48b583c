//! Repeated-defer detection.
//!
//! Within one function body, a second deferred call on the same receiver
//! and member is almost always a bug (the classic double `defer
//! f.Close()`). The pass keeps a per-function history keyed by the
//! receiver's lexical identity and emits a finding the moment a
//! duplicate is seen, pointing at the duplicate statement.
//!
//! Only member calls on a plain identifier receiver are tracked;
//! receivers without a recorded lexical binding are skipped. The history
//! is deliberately lexical, never type-resolved: a local variable
//! shadowing is function-scoped by construction.

use tracing::{debug, info};

use crate::finding::{sort_findings, Finding, FindingKind};
use crate::ledger::DeferLedger;
use crate::syntax::{Expr, ExprKind, FuncDecl, SourceUnit, Stmt};
use crate::walk::{walk_units, Visitor};

/// Counters for one run of the pass.
#[derive(Debug, Clone, Default)]
pub struct DeferStats {
    /// Function bodies scanned.
    pub functions: usize,
    /// Findings produced.
    pub reported: usize,
}

/// Result of the repeated-defer pass.
#[derive(Debug, Clone)]
pub struct DeferAnalysisResult {
    pub findings: Vec<Finding>,
    pub stats: DeferStats,
}

#[derive(Default)]
struct DeferVisitor {
    ledger: DeferLedger,
    current_func: String,
    functions: usize,
    findings: Vec<Finding>,
}

impl Visitor for DeferVisitor {
    fn enter_function(&mut self, func: &FuncDecl) {
        self.current_func = func.name.clone();
        self.functions += 1;
        self.ledger.clear();
    }

    fn exit_function(&mut self, _func: &FuncDecl) {
        self.ledger.clear();
    }

    fn defer_stmt(&mut self, stmt: &Stmt, call: &Expr) {
        let ExprKind::Call { callee, .. } = &call.kind else {
            return;
        };
        let ExprKind::Member { recv, member } = &callee.kind else {
            return;
        };
        let ExprKind::Name { name, binding } = &recv.kind else {
            return;
        };
        let Some(receiver) = *binding else {
            debug!(receiver = %name, "skipping defer on unresolved receiver");
            return;
        };
        if self.ledger.observe(receiver, member) {
            self.findings.push(Finding::new(
                stmt.span.clone(),
                format!("{name}.{member}"),
                FindingKind::RepeatedDefer,
                format!(
                    "repeating defer {name}.{member}() inside function {}",
                    self.current_func
                ),
            ));
        }
    }
}

/// Runs the pass over all units of one scope. Purely lexical; no oracle
/// involved.
pub fn find_repeated_defers(units: &[SourceUnit]) -> DeferAnalysisResult {
    let mut visitor = DeferVisitor::default();
    walk_units(units, &mut visitor);

    let mut findings = visitor.findings;
    sort_findings(&mut findings);

    let stats = DeferStats {
        functions: visitor.functions,
        reported: findings.len(),
    };
    info!(
        functions = stats.functions,
        reported = stats.reported,
        "repeated defer pass complete"
    );
    DeferAnalysisResult { findings, stats }
}
