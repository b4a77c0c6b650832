//! Semantic model consumed by IDE features.
//!
//! - [`Semantics`] - the analyser capability (symbol lookup, aliases,
//!   receiver types, type inference)
//! - [`FunctionSignature`] - parameter lists, extracted from `fn` declarations
//! - [`BuiltinTable`] - static metadata for compiler builtins

pub mod builtins;
mod semantics;
mod signature;

pub use builtins::{BuiltinArgument, BuiltinDescriptor, BuiltinTable};
pub use semantics::{Declaration, DeclarationKind, InferredType, Semantics};
pub use signature::{FunctionSignature, Parameter};
