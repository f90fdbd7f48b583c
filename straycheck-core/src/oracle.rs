//! Resolution oracle and declaration identity strategies.
//!
//! The core never resolves names or types itself. Frontends either record
//! lexical binding ids directly on the nodes (cheap, no type information)
//! or ship a [`ResolutionTable`] with full type-resolution results. The
//! [`IdentityResolver`] strategies make the two modes interchangeable so
//! each analysis picks the one it needs without duplicating the traversal.
//!
//! Every lookup is best-effort: an unresolved node yields `None` and the
//! caller skips the reference. Guessing is never attempted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::syntax::{Binding, Expr, ExprKind, NodeId, SymbolId};

/// Static type of an expression as the frontend's type checker saw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// A named type, carrying its canonical printed name.
    Named { name: String },
    /// A pointer to another type.
    Pointer { elem: Box<TypeDescriptor> },
}

impl TypeDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named { name: name.into() }
    }

    pub fn pointer_to(elem: TypeDescriptor) -> Self {
        Self::Pointer {
            elem: Box::new(elem),
        }
    }

    /// Canonical owner name for member resolution: the type's own name,
    /// or the pointee's name through exactly one level of indirection.
    /// Deeper indirection is unresolvable.
    pub fn owner_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Named { name } => Some(name),
            TypeDescriptor::Pointer { elem } => match elem.as_ref() {
                TypeDescriptor::Named { name } => Some(name),
                TypeDescriptor::Pointer { .. } => None,
            },
        }
    }
}

/// Identifies a structure field independent of any specific instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberKey {
    /// Canonical name of the owning type.
    pub owner: String,
    /// Field name.
    pub member: String,
}

impl MemberKey {
    pub fn new(owner: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            member: member.into(),
        }
    }
}

/// Read-only type-resolution service injected by the host.
///
/// Implementations must be safe for concurrent reads when the host
/// analyzes units of the same scope in parallel; the engine never writes
/// through this trait.
pub trait ResolutionOracle {
    /// Static type of the expression node, when known.
    fn type_of(&self, node: NodeId) -> Option<TypeDescriptor>;
    /// Declaration the reference node resolves to, when known.
    fn declaration_of(&self, node: NodeId) -> Option<SymbolId>;
}

/// Resolve a member access `recv.member` to its owning type and member
/// name, dereferencing at most one level of pointer indirection.
pub fn resolve_member(
    oracle: &dyn ResolutionOracle,
    recv: &Expr,
    member: &str,
) -> Option<MemberKey> {
    let ty = oracle.type_of(recv.id)?;
    let owner = ty.owner_name()?;
    Some(MemberKey::new(owner, member))
}

/// Serializable resolution results, shipped alongside the units of a
/// scope by frontends that ran full type resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionTable {
    /// (expression node, static type) pairs.
    #[serde(default)]
    pub types: Vec<(NodeId, TypeDescriptor)>,
    /// (reference node, declared symbol) pairs.
    #[serde(default)]
    pub declarations: Vec<(NodeId, SymbolId)>,
}

/// Hash-map backed oracle built from a [`ResolutionTable`].
#[derive(Debug, Default)]
pub struct ResolvedOracle {
    types: HashMap<NodeId, TypeDescriptor>,
    declarations: HashMap<NodeId, SymbolId>,
}

impl ResolvedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(table: ResolutionTable) -> Self {
        Self {
            types: table.types.into_iter().collect(),
            declarations: table.declarations.into_iter().collect(),
        }
    }

    pub fn insert_type(&mut self, node: NodeId, ty: TypeDescriptor) {
        self.types.insert(node, ty);
    }

    pub fn insert_declaration(&mut self, node: NodeId, symbol: SymbolId) {
        self.declarations.insert(node, symbol);
    }
}

impl From<ResolutionTable> for ResolvedOracle {
    fn from(table: ResolutionTable) -> Self {
        Self::from_table(table)
    }
}

impl ResolutionOracle for ResolvedOracle {
    fn type_of(&self, node: NodeId) -> Option<TypeDescriptor> {
        self.types.get(&node).cloned()
    }

    fn declaration_of(&self, node: NodeId) -> Option<SymbolId> {
        self.declarations.get(&node).copied()
    }
}

/// Strategy for mapping syntax nodes to declaration identities.
pub trait IdentityResolver {
    /// Identity of a defining binding.
    fn declared(&self, binding: &Binding) -> Option<SymbolId>;
    /// Identity of the declaration a name reference points at. Non-name
    /// expressions are never resolved.
    fn referenced(&self, expr: &Expr) -> Option<SymbolId>;
}

/// Lexical mode: identities come from the binding ids the frontend's
/// scope resolution recorded on the nodes. No type information involved.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalResolver;

impl IdentityResolver for LexicalResolver {
    fn declared(&self, binding: &Binding) -> Option<SymbolId> {
        binding.symbol
    }

    fn referenced(&self, expr: &Expr) -> Option<SymbolId> {
        match &expr.kind {
            ExprKind::Name { binding, .. } => *binding,
            _ => None,
        }
    }
}

/// Typed mode: identities come from the resolution oracle.
#[derive(Clone, Copy)]
pub struct TypedResolver<'a> {
    oracle: &'a dyn ResolutionOracle,
}

impl std::fmt::Debug for TypedResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedResolver").finish_non_exhaustive()
    }
}

impl<'a> TypedResolver<'a> {
    pub fn new(oracle: &'a dyn ResolutionOracle) -> Self {
        Self { oracle }
    }
}

impl IdentityResolver for TypedResolver<'_> {
    fn declared(&self, binding: &Binding) -> Option<SymbolId> {
        self.oracle.declaration_of(binding.id)
    }

    fn referenced(&self, expr: &Expr) -> Option<SymbolId> {
        match &expr.kind {
            ExprKind::Name { .. } => self.oracle.declaration_of(expr.id),
            _ => None,
        }
    }
}
