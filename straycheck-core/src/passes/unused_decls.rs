//! Unused package-level declaration detection.
//!
//! Registers every package-scope variable and constant binding as a
//! candidate, counts name references to it anywhere in the scope
//! (including inside function bodies and inside other declarations'
//! initializers), and reports candidates whose final count is zero.
//!
//! Exported names are only reported when the run asks for them; the
//! export rule is the injected [`ExportConvention`].

use tracing::{debug, info};

use crate::finding::{sort_findings, Finding, FindingKind};
use crate::ledger::{DeclInfo, UsageLedger};
use crate::oracle::IdentityResolver;
use crate::syntax::{Expr, SourceUnit, SymbolId, ValueDecl};
use crate::visibility::ExportConvention;
use crate::walk::{walk_units, Visitor};

/// Counters for one run of the pass.
#[derive(Debug, Clone, Default)]
pub struct DeclStats {
    /// Package-level bindings registered as candidates.
    pub declared: usize,
    /// Candidates with at least one use.
    pub used: usize,
    /// Findings produced after the export filter.
    pub reported: usize,
}

/// Result of the unused-declaration pass.
#[derive(Debug, Clone)]
pub struct DeclAnalysisResult {
    pub findings: Vec<Finding>,
    pub stats: DeclStats,
}

struct DeclUsageVisitor<'a> {
    resolver: &'a dyn IdentityResolver,
    ledger: UsageLedger<SymbolId>,
}

impl Visitor for DeclUsageVisitor<'_> {
    fn value_decl(&mut self, decl: &ValueDecl, top_level: bool) {
        if !top_level {
            return;
        }
        for binding in &decl.bindings {
            // Blank bindings are discard markers, never candidates.
            if binding.name == "_" {
                continue;
            }
            match self.resolver.declared(binding) {
                Some(id) => self
                    .ledger
                    .declare(id, DeclInfo::new(&binding.name, binding.span.clone())),
                None => debug!(name = %binding.name, "skipping unresolved binding"),
            }
        }
    }

    fn name_ref(&mut self, expr: &Expr, _name: &str, _binding: Option<SymbolId>) {
        if let Some(id) = self.resolver.referenced(expr) {
            self.ledger.record_use(id);
        }
    }
}

/// Runs the pass over all units of one scope.
pub fn find_unused_decls(
    units: &[SourceUnit],
    resolver: &dyn IdentityResolver,
    report_exported: bool,
    convention: &dyn ExportConvention,
) -> DeclAnalysisResult {
    let mut visitor = DeclUsageVisitor {
        resolver,
        ledger: UsageLedger::new(),
    };
    walk_units(units, &mut visitor);

    let mut findings = Vec::new();
    let mut used = 0usize;
    for (_, decl, count) in visitor.ledger.entries() {
        if count > 0 {
            used += 1;
            continue;
        }
        if !report_exported && convention.is_exported(&decl.name) {
            continue;
        }
        findings.push(Finding::new(
            decl.span.clone(),
            &decl.name,
            FindingKind::UnusedDeclaration,
            format!("unused declaration {}", decl.name),
        ));
    }
    sort_findings(&mut findings);

    let stats = DeclStats {
        declared: visitor.ledger.declared_len(),
        used,
        reported: findings.len(),
    };
    info!(
        declared = stats.declared,
        used = stats.used,
        reported = stats.reported,
        "unused declaration pass complete"
    );
    DeclAnalysisResult { findings, stats }
}
