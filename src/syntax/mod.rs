//! Lossless syntax tree for the Zig-style surface language.
//!
//! Source text is tokenized with logos ([`lexer`]), parsed into a rowan green
//! tree ([`parser`]), and exposed through typed wrappers ([`ast`]).
//! IDE features only read the tree through [`ast`].

pub mod ast;
mod kind;
pub mod lexer;
mod parser;

use std::sync::Arc;

use rowan::{GreenNode, GreenNodeBuilder};
use smol_str::format_smolstr;
use text_size::TextSize;
use tracing::warn;

pub use kind::SyntaxKind;
pub use parser::SyntaxError;

/// Marker type tying rowan trees to [`SyntaxKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZigLanguage {}

impl rowan::Language for ZigLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SyntaxKind::from_raw(raw.0)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<ZigLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ZigLanguage>;

/// Result of parsing: an immutable green tree plus recoverable errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    green: GreenNode,
    errors: Vec<SyntaxError>,
}

impl Parse {
    /// Parse `text`. Never fails; problems land in [`Parse::errors`].
    ///
    /// Text longer than [`lexer::MAX_TEXT_LEN`] bytes cannot be addressed by
    /// [`TextSize`] offsets. It is rejected whole: the tree is an empty source
    /// file and the only error says why.
    pub fn new(text: &str) -> Self {
        if text.len() > lexer::MAX_TEXT_LEN {
            warn!(len = text.len(), "source text too large to parse");
            return Self::rejected(text.len());
        }
        let (green, errors) = parser::parse_text(text);
        Self { green, errors }
    }

    fn rejected(len: usize) -> Self {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::SourceFile.into());
        builder.finish_node();
        Self {
            green: builder.finish(),
            errors: vec![SyntaxError {
                message: format_smolstr!(
                    "source text is {len} bytes, limit is {}",
                    lexer::MAX_TEXT_LEN
                ),
                offset: TextSize::from(0),
            }],
        }
    }

    /// A fresh red tree rooted at the source file.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }
}

/// A parsed document: raw text together with its syntax tree.
///
/// This is the document handle hint requests operate on.
#[derive(Debug, Clone)]
pub struct SourceFile {
    text: Arc<str>,
    parse: Parse,
}

impl SourceFile {
    /// Parse `text` into a new source file.
    ///
    /// Text over [`lexer::MAX_TEXT_LEN`] bytes yields an empty tree and one
    /// error; see [`Parse::new`].
    pub fn parse(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let parse = Parse::new(&text);
        Self { text, parse }
    }

    /// The raw source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The root syntax node.
    pub fn syntax(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    /// Recoverable parse errors.
    pub fn errors(&self) -> &[SyntaxError] {
        self.parse.errors()
    }
}
