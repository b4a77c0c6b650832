//! # ziggurat-ide
//!
//! Syntax tree, builtin metadata, and inlay hint engine for Zig-style
//! language tooling.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide     → IDE features (inlay hints)
//!   ↓
//! hir     → Semantics capability, signatures, builtin table
//!   ↓
//! syntax  → Lexer + lossless rowan tree + typed AST
//!   ↓
//! base    → Primitives (TextSize, LineCol, PositionEncoding)
//! ```
//!
//! Semantic analysis itself lives outside this crate: hosts implement
//! [`hir::Semantics`] and hand it to the IDE functions.

/// Foundation types: offsets, positions, encodings
pub mod base;

/// Semantic model consumed by IDE features
pub mod hir;

/// IDE features: inlay hints
pub mod ide;

/// Lexer, parser, and typed syntax tree
pub mod syntax;

// Re-export new foundation types
pub use base::{LineCol, PositionCursor, PositionEncoding, TextRange, TextSize};
