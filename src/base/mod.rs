//! Foundation types for the ziggurat toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions
//! - [`LineCol`], [`PositionEncoding`], [`PositionCursor`] - Offset to
//!   line/column conversion in the client's encoding
//!
//! This module has NO dependencies on other ziggurat modules.

mod span;

pub use span::{LineCol, PositionCursor, PositionEncoding, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
