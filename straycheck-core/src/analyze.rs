//! Analyzer façade: options, strategy selection, pass orchestration.

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{StraycheckError, StraycheckResult};
use crate::finding::{sort_findings, Finding};
use crate::oracle::{IdentityResolver, LexicalResolver, ResolutionOracle, TypedResolver};
use crate::passes::{find_repeated_defers, find_underused_fields, find_unused_decls};
use crate::syntax::SourceUnit;
use crate::visibility::{CapitalizedExports, ExportConvention};

/// Options shared by all passes of one run.
///
/// Deserializable so a config file section can provide defaults; every
/// field falls back to its default when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Run the unused package-level declaration pass.
    pub check_decls: bool,
    /// Run the under-used structure field pass.
    pub check_fields: bool,
    /// Run the repeated-defer pass.
    pub check_defers: bool,
    /// Minimum use count a structure field must reach.
    pub minimum_use_count: u32,
    /// Also report unused declarations with exported names.
    pub report_exported: bool,
    /// Count only assignments to structure fields, not reads.
    pub assignments_only: bool,
    /// Subject-name patterns (regular expressions) to suppress.
    pub ignore: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            check_decls: true,
            check_fields: true,
            check_defers: true,
            minimum_use_count: 1,
            report_exported: false,
            assignments_only: false,
            ignore: Vec::new(),
        }
    }
}

/// Configured analysis run over the units of one scope.
///
/// Borrows the oracle: the analyzer performs no writes through it, so
/// one oracle can serve analyzers running on other scopes concurrently.
pub struct Analyzer<'a> {
    options: AnalysisOptions,
    oracle: Option<&'a dyn ResolutionOracle>,
    convention: Box<dyn ExportConvention + 'a>,
}

impl<'a> Analyzer<'a> {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options,
            oracle: None,
            convention: Box::new(CapitalizedExports),
        }
    }

    /// Attach a type-resolution oracle. Required for the field pass;
    /// upgrades the declaration pass from lexical to typed identities.
    pub fn with_oracle(mut self, oracle: &'a dyn ResolutionOracle) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Substitute the visibility convention used by the exported filter.
    pub fn with_convention(mut self, convention: Box<dyn ExportConvention + 'a>) -> Self {
        self.convention = convention;
        self
    }

    /// Runs the enabled passes over one scope's units and returns the
    /// merged findings in stable order.
    pub fn run(&self, units: &[SourceUnit]) -> StraycheckResult<Vec<Finding>> {
        let ignore = RegexSet::new(&self.options.ignore)
            .map_err(|e| StraycheckError::pattern(e.to_string()))?;

        let mut findings = Vec::new();

        if self.options.check_decls {
            let lexical = LexicalResolver;
            let typed;
            let resolver: &dyn IdentityResolver = match self.oracle {
                Some(oracle) => {
                    typed = TypedResolver::new(oracle);
                    &typed
                }
                None => &lexical,
            };
            findings.extend(
                find_unused_decls(
                    units,
                    resolver,
                    self.options.report_exported,
                    self.convention.as_ref(),
                )
                .findings,
            );
        }

        if self.options.check_fields {
            match self.oracle {
                Some(oracle) => findings.extend(
                    find_underused_fields(
                        units,
                        oracle,
                        self.options.minimum_use_count,
                        self.options.assignments_only,
                    )
                    .findings,
                ),
                None => warn!("field analysis requires a resolution oracle; pass skipped"),
            }
        }

        if self.options.check_defers {
            findings.extend(find_repeated_defers(units).findings);
        }

        findings.retain(|f| !ignore.is_match(&f.subject));
        sort_findings(&mut findings);
        Ok(findings)
    }
}
