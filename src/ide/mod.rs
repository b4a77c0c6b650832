//! IDE features: high-level APIs for LSP handlers.
//!
//! This module provides the interface between the semantic model (HIR)
//! and the LSP server. Each function corresponds to an LSP request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at LSP boundary
//! 3. **Composable**: Built on top of the [`Semantics`](crate::hir::Semantics) capability
//!
//! ## Usage
//!
//! ```ignore
//! use ziggurat::ide::{inlay_hints, HintOptions};
//! use ziggurat::syntax::SourceFile;
//!
//! let file = SourceFile::parse("const x = foo(1, 2);");
//! let hints = inlay_hints(&analysis, &file, range, &HintOptions::default())?;
//! ```

mod inlay_hints;

pub use inlay_hints::{
    HintError, HintOptions, InlayHint, InlayHintKind, InlayHintTooltip, InlayHintsConfig,
    MarkupKind, inlay_hints,
};
