//! Usage ledgers: the mutable state one traversal accumulates.
//!
//! A ledger is owned exclusively by a single analysis pass over a single
//! scope. It is threaded through the traversal as an explicit context
//! object, never shared across scopes or passes, so independent scopes
//! can be analyzed in parallel without synchronization.

use std::collections::HashMap;
use std::hash::Hash;

use crate::syntax::{Span, SymbolId};

/// Reporting data captured when a declaration is first registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclInfo {
    /// Display name of the declared entity.
    pub name: String,
    /// Position of the declaration, where findings are keyed.
    pub span: Span,
}

impl DeclInfo {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Mapping from declaration identity to use count.
///
/// `record_use` tolerates keys that were never declared: traversal order
/// does not guarantee declarations precede uses (a function body earlier
/// in file order may reference a declaration further down), and
/// references can resolve to entities outside the analyzed scope.
/// Auto-registered keys accumulate counts but never appear in
/// [`entries`](Self::entries), so external entities are never reported.
#[derive(Debug)]
pub struct UsageLedger<K> {
    declared: HashMap<K, DeclInfo>,
    counts: HashMap<K, u32>,
}

impl<K> Default for UsageLedger<K> {
    fn default() -> Self {
        Self {
            declared: HashMap::new(),
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> UsageLedger<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration with zero uses. A no-op when the key is
    /// already declared; a prior count from uses seen earlier in the
    /// traversal is preserved.
    pub fn declare(&mut self, key: K, info: DeclInfo) {
        self.counts.entry(key.clone()).or_insert(0);
        self.declared.entry(key).or_insert(info);
    }

    /// Counts one use, auto-registering unseen keys with count 1.
    pub fn record_use(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Final use count for a key; 0 when never seen.
    pub fn count(&self, key: &K) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of declared entries.
    pub fn declared_len(&self) -> usize {
        self.declared.len()
    }

    /// Declared entries with their final counts. Keys that were only
    /// ever used, never declared, are excluded.
    pub fn entries(&self) -> impl Iterator<Item = (&K, &DeclInfo, u32)> + '_ {
        self.declared
            .iter()
            .map(move |(key, info)| (key, info, self.count(key)))
    }
}

/// Per-function history of deferred member calls, keyed by the
/// receiver's lexical identity. Created fresh at function entry and
/// discarded at exit; nothing leaks across functions.
#[derive(Debug, Default)]
pub struct DeferLedger {
    seen: HashMap<SymbolId, Vec<String>>,
}

impl DeferLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a deferred call on `receiver`. Returns `true` when the
    /// same receiver+member pair was already recorded in this function.
    /// A duplicate is not re-recorded, so a third occurrence still
    /// answers `true`.
    pub fn observe(&mut self, receiver: SymbolId, member: &str) -> bool {
        let members = self.seen.entry(receiver).or_default();
        if members.iter().any(|m| m == member) {
            true
        } else {
            members.push(member.to_string());
            false
        }
    }

    /// Discards all recorded history.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
