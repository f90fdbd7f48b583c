//! straycheck-core: suspicious-construct analysis over parsed syntax forests.
//!
//! This library consumes a parsed program (a forest of compilation
//! units plus, optionally, resolution results from a type checker) and
//! reports dead or suspicious code:
//!
//! - **Unused declarations**: package-level variables and constants
//!   never referenced in their scope
//! - **Under-used structure fields**: fields read or written fewer times
//!   than a configured minimum
//! - **Repeated defers**: a second deferred cleanup call on the same
//!   receiver and member within one function body
//!
//! The three analyses share one engine: a depth-first [`walk`] over the
//! closed [`syntax`] node model, a [`ledger`] mapping declaration
//! identities to use counts, and identity resolution strategies in
//! [`oracle`] (lexical binding ids or an injected type-resolution
//! oracle). Each pass is a thin policy over that engine.
//!
//! straycheck never parses source text, resolves imports, or
//! type-checks. Frontends do that and ship the results as data; any
//! reference the resolver cannot settle is skipped, never guessed.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use straycheck_core::prelude::*;
//!
//! let forest = load_forest(Path::new("pkg.forest.json"))?;
//! for scope in &forest.scopes {
//!     let oracle = scope.resolved_oracle();
//!     let mut analyzer = Analyzer::new(AnalysisOptions::default());
//!     if let Some(oracle) = &oracle {
//!         analyzer = analyzer.with_oracle(oracle);
//!     }
//!     for finding in analyzer.run(&scope.units)? {
//!         println!("{}: {}", finding.span, finding.message);
//!     }
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`syntax`]: the closed syntax node model frontends serialize into
//! - [`oracle`]: resolution oracle and identity resolver strategies
//! - [`walk`]: the shared traversal engine
//! - [`ledger`]: usage and defer-history ledgers
//! - [`passes`]: the three analysis passes
//! - [`analyze`]: options and the analyzer façade
//! - [`finding`]: the finding model handed to reporting
//! - [`loader`]: forest document loading and discovery
//! - [`config`]: straycheck.toml loading
//! - [`report`]: plain/JSON printing and exit-status derivation
//! - [`error`]: typed error handling
//! - [`logging`]: structured tracing setup

pub mod analyze;
pub mod config;
pub mod error;
pub mod finding;
pub mod ledger;
pub mod loader;
pub mod logging;
pub mod oracle;
pub mod passes;
pub mod prelude;
pub mod report;
pub mod syntax;
pub mod visibility;
pub mod walk;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, StraycheckError, StraycheckResult};

// Analyzer API
pub use analyze::{AnalysisOptions, Analyzer};

// Findings
pub use finding::{sort_findings, Finding, FindingKind, Severity};

// Syntax model
pub use syntax::{
    Binding, CompositeElem, Decl, Expr, ExprKind, FieldDef, FuncDecl, NodeId, SourceUnit, Span,
    Stmt, StmtKind, StructDecl, SymbolId, ValueDecl, ValueKind,
};

// Resolution
pub use oracle::{
    resolve_member, IdentityResolver, LexicalResolver, MemberKey, ResolutionOracle,
    ResolutionTable, ResolvedOracle, TypeDescriptor, TypedResolver,
};

// Visibility conventions
pub use visibility::{CapitalizedExports, ExportConvention};

// Ledgers
pub use ledger::{DeclInfo, DeferLedger, UsageLedger};

// Traversal
pub use walk::{walk_expr, walk_stmt, walk_unit, walk_units, Visitor};

// Passes
pub use passes::{
    find_repeated_defers, find_underused_fields, find_unused_decls, DeclAnalysisResult,
    DeclStats, DeferAnalysisResult, DeferStats, FieldAnalysisResult, FieldStats,
};

// Forest loading
pub use loader::{gather_forest_files, load_forest, load_forest_dir, ScopeForest, SyntaxForest};

// Configuration
pub use config::{load_config, OutputConfig, StraycheckConfig};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{exit_status, print_json, print_plain};

#[cfg(test)]
pub(crate) mod testutil;
