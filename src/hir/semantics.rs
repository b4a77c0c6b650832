//! The semantic analysis capability consumed by IDE features.
//!
//! IDE features do not infer anything themselves. They ask an implementation
//! of [`Semantics`] for resolved declarations and types, and render whatever
//! comes back. Every query is synchronous and answers `None` on a miss.

use std::sync::Arc;

use smol_str::SmolStr;
use text_size::TextSize;

use super::signature::FunctionSignature;
use crate::syntax::ast;

/// What a resolved name refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclarationKind {
    /// A function prototype with a known signature.
    Function(Arc<FunctionSignature>),
    /// A `const` or `var`; may alias another declaration.
    Variable,
    /// A struct or other container type.
    Container,
    /// A container field.
    Field,
}

/// A declaration produced by the analyser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: SmolStr,
    pub kind: DeclarationKind,
}

impl Declaration {
    pub fn new(name: impl Into<SmolStr>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn function(name: impl Into<SmolStr>, signature: FunctionSignature) -> Self {
        Self::new(name, DeclarationKind::Function(Arc::new(signature)))
    }

    /// The signature, if this declaration is a function prototype.
    pub fn signature(&self) -> Option<&Arc<FunctionSignature>> {
        match &self.kind {
            DeclarationKind::Function(signature) => Some(signature),
            _ => None,
        }
    }
}

/// A type inferred for a declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InferredType {
    display: SmolStr,
    referenced: Vec<SmolStr>,
}

impl InferredType {
    pub fn new(display: impl Into<SmolStr>) -> Self {
        Self {
            display: display.into(),
            referenced: Vec::new(),
        }
    }

    /// Attach the names of types mentioned by the display text.
    pub fn with_referenced(mut self, referenced: impl IntoIterator<Item = SmolStr>) -> Self {
        self.referenced.extend(referenced);
        self
    }

    /// Minimal display text, e.g. `[]const u8`.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn referenced_types(&self) -> &[SmolStr] {
        &self.referenced
    }
}

/// Synchronous semantic queries.
pub trait Semantics {
    /// Opaque handle to a resolved receiver type.
    type Receiver;

    /// Resolve `name` as seen from `origin`.
    fn lookup_global_symbol(&self, name: &str, origin: TextSize) -> Option<Declaration>;

    /// If `decl` re-exports another declaration, the declaration it names.
    fn resolve_alias(&self, decl: &Declaration) -> Option<Declaration>;

    /// Type of an already-parsed receiver expression, with pointers and
    /// optionals unwrapped as member access would.
    fn resolve_receiver_type(&self, receiver: &ast::Expr, origin: TextSize)
    -> Option<Self::Receiver>;

    /// Member `name` of a resolved receiver type.
    fn lookup_member(&self, receiver: &Self::Receiver, name: &str) -> Option<Declaration>;

    /// Whether `call` passes its receiver as the first parameter of `decl`.
    fn is_instance_style_call(&self, call: &ast::CallExpr, decl: &Declaration) -> bool;

    /// Type of the value a declaration binds.
    fn resolve_declared_type(&self, decl: &ast::VarDecl) -> Option<InferredType>;
}
