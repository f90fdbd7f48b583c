//! The three analysis passes built on the shared engine.
//!
//! Each pass is a thin policy over the same pieces: a [`Visitor`] that
//! feeds a ledger during one traversal, and an end-of-pass (or, for
//! defers, scan-time) predicate turning ledger entries into findings.
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │ unused_decls.rs  │   │ unused_fields.rs │   │ repeated_defers  │
//! │ ──────────────── │   │ ──────────────── │   │ ──────────────── │
//! │ package-level    │   │ struct fields    │   │ duplicate defers │
//! │ decls, zero uses │   │ below threshold  │   │ per function     │
//! └────────┬─────────┘   └────────┬─────────┘   └────────┬─────────┘
//!          └──────────────────────┼──────────────────────┘
//!                                 ▼
//!              walk.rs + ledger.rs + oracle.rs + finding.rs
//! ```
//!
//! [`Visitor`]: crate::walk::Visitor

pub mod repeated_defers;
pub mod unused_decls;
pub mod unused_fields;

pub use repeated_defers::{find_repeated_defers, DeferAnalysisResult, DeferStats};
pub use unused_decls::{find_unused_decls, DeclAnalysisResult, DeclStats};
pub use unused_fields::{find_underused_fields, FieldAnalysisResult, FieldStats};
