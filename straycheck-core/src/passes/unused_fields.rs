//! Under-used structure field detection.
//!
//! Pre-registers every field named in a structure declaration, then
//! counts member accesses attributable to a (type, field) pair:
//!
//! - plain access `x.field`, resolving the receiver's static type
//!   through the oracle with one level of pointer dereference;
//! - keyed composite elements `T{field: value}`;
//! - in assignments-only mode, assignment targets `x.field = v` and
//!   `x.field[i] = v` instead of plain accesses.
//!
//! Positional composite elements are never attributed to a field, and
//! any access the oracle cannot resolve is skipped.

use tracing::{debug, info};

use crate::finding::{sort_findings, Finding, FindingKind};
use crate::ledger::{DeclInfo, UsageLedger};
use crate::oracle::{resolve_member, MemberKey, ResolutionOracle};
use crate::syntax::{CompositeElem, Expr, ExprKind, SourceUnit, Stmt, StructDecl};
use crate::walk::{walk_units, Visitor};

/// Counters for one run of the pass.
#[derive(Debug, Clone, Default)]
pub struct FieldStats {
    /// Fields registered from structure declarations.
    pub declared: usize,
    /// Findings produced.
    pub reported: usize,
}

/// Result of the under-used field pass.
#[derive(Debug, Clone)]
pub struct FieldAnalysisResult {
    pub findings: Vec<Finding>,
    pub stats: FieldStats,
}

struct FieldUsageVisitor<'a> {
    oracle: &'a dyn ResolutionOracle,
    assignments_only: bool,
    ledger: UsageLedger<MemberKey>,
}

impl FieldUsageVisitor<'_> {
    fn record_member(&mut self, recv: &Expr, member: &str) {
        match resolve_member(self.oracle, recv, member) {
            Some(key) => self.ledger.record_use(key),
            None => debug!(member, "skipping unresolvable member access"),
        }
    }
}

impl Visitor for FieldUsageVisitor<'_> {
    fn struct_decl(&mut self, decl: &StructDecl) {
        for field in &decl.fields {
            self.ledger.declare(
                MemberKey::new(&decl.name, &field.name),
                DeclInfo::new(
                    format!("{}.{}", decl.name, field.name),
                    field.span.clone(),
                ),
            );
        }
    }

    fn member_access(&mut self, _expr: &Expr, recv: &Expr, member: &str) {
        if self.assignments_only {
            return;
        }
        self.record_member(recv, member);
    }

    fn assign(&mut self, _stmt: &Stmt, targets: &[Expr], _values: &[Expr]) {
        if !self.assignments_only {
            return;
        }
        for target in targets {
            let (recv, member) = match &target.kind {
                ExprKind::Member { recv, member } => (recv.as_ref(), member.as_str()),
                // `x.field[i] = v` assigns through the field.
                ExprKind::Index { recv, .. } => match &recv.kind {
                    ExprKind::Member { recv, member } => (recv.as_ref(), member.as_str()),
                    _ => continue,
                },
                _ => continue,
            };
            self.record_member(recv, member);
        }
    }

    fn composite(&mut self, expr: &Expr, elems: &[CompositeElem]) {
        let Some(ty) = self.oracle.type_of(expr.id) else {
            debug!("skipping composite literal with unknown type");
            return;
        };
        let Some(owner) = ty.owner_name() else {
            return;
        };
        let owner = owner.to_string();
        for elem in elems {
            if let CompositeElem::Keyed { key, .. } = elem {
                self.ledger.record_use(MemberKey::new(&owner, key));
            }
        }
    }
}

/// Runs the pass over all units of one scope. Requires typed mode: the
/// oracle must carry the scope's type-resolution results.
pub fn find_underused_fields(
    units: &[SourceUnit],
    oracle: &dyn ResolutionOracle,
    minimum_use_count: u32,
    assignments_only: bool,
) -> FieldAnalysisResult {
    let mut visitor = FieldUsageVisitor {
        oracle,
        assignments_only,
        ledger: UsageLedger::new(),
    };
    walk_units(units, &mut visitor);

    let mut findings = Vec::new();
    for (_, field, count) in visitor.ledger.entries() {
        if count >= minimum_use_count {
            continue;
        }
        let message = if count == 0 {
            format!("field {} is never used", field.name)
        } else {
            format!(
                "field {} is used {} time(s), minimum is {}",
                field.name, count, minimum_use_count
            )
        };
        findings.push(Finding::new(
            field.span.clone(),
            &field.name,
            FindingKind::UnderusedField,
            message,
        ));
    }
    sort_findings(&mut findings);

    let stats = FieldStats {
        declared: visitor.ledger.declared_len(),
        reported: findings.len(),
    };
    info!(
        declared = stats.declared,
        reported = stats.reported,
        "under-used field pass complete"
    );
    FieldAnalysisResult { findings, stats }
}
