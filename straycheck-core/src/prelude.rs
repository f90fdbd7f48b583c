//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use straycheck_core::prelude::*;
//! ```

// Analyzer API
pub use crate::analyze::{AnalysisOptions, Analyzer};

// Error types
pub use crate::error::{StraycheckError, StraycheckResult};

// Findings
pub use crate::finding::{Finding, FindingKind};

// Syntax model
pub use crate::syntax::{Decl, Expr, SourceUnit, Span, Stmt};

// Resolution
pub use crate::oracle::{ResolutionOracle, ResolvedOracle};

// Forest loading
pub use crate::loader::{load_forest, load_forest_dir, ScopeForest, SyntaxForest};

// Configuration
pub use crate::config::{load_config, StraycheckConfig};

// Reporting
pub use crate::report::{exit_status, print_json, print_plain};
