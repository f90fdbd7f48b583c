//! The finding model: plain data handed to the reporting collaborator.

use serde::{Deserialize, Serialize};

use crate::syntax::Span;

/// Classification of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    /// A package-level declaration with zero uses.
    UnusedDeclaration,
    /// A structure field used fewer times than the configured minimum.
    UnderusedField,
    /// A second deferred call on the same receiver and member within one
    /// function body.
    RepeatedDefer,
}

/// Severity of a finding. All current analyses report errors; the enum
/// keeps the wire format open for softer levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
}

/// One reported issue. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Where the finding is keyed: the declaration position for usage
    /// analyses, the duplicate statement position for defer analysis.
    pub span: Span,
    /// Name of the entity the finding is about.
    pub subject: String,
    pub kind: FindingKind,
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Finding {
    pub fn new(span: Span, subject: impl Into<String>, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            span,
            subject: subject.into(),
            kind,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Deterministic ordering key: position first, then subject.
    pub fn sort_key(&self) -> (&str, u32, u32, &str) {
        (
            &self.span.file,
            self.span.line,
            self.span.column,
            &self.subject,
        )
    }
}

/// Sorts findings into their stable reporting order.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
