//! Node and token kinds of the lossless syntax tree.

/// Every node and token kind that can appear in a [`SyntaxNode`](super::SyntaxNode).
///
/// Tokens come first, nodes after [`SyntaxKind::SourceFile`]. The enum is
/// `repr(u16)` and contiguous so it round-trips through `rowan::SyntaxKind`.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    // Trivia
    Whitespace = 0,
    Comment,

    // Literals and names
    Ident,
    BuiltinIdent,
    IntNumber,
    StringLit,

    // Keywords
    ConstKw,
    VarKw,
    FnKw,
    PubKw,
    ReturnKw,
    StructKw,
    NoaliasKw,
    ComptimeKw,
    AnytypeKw,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Eq,
    Star,
    Question,
    Bang,
    Plus,
    Minus,
    Slash,
    Amp,

    /// A character sequence the lexer could not classify.
    ErrorToken,
    Eof,

    // Nodes
    SourceFile,
    FnDecl,
    ParamList,
    Param,
    VarDecl,
    TypeAnnotation,
    ContainerDecl,
    ContainerField,
    Block,
    ReturnStmt,
    ExprStmt,
    CallExpr,
    BuiltinCall,
    ArgList,
    FieldExpr,
    NameRef,
    Literal,
    ParenExpr,
    PrefixExpr,
    SliceType,
    BinExpr,
    /// Wraps tokens the parser skipped during recovery.
    Error,
}

impl SyntaxKind {
    const LAST: SyntaxKind = SyntaxKind::Error;

    /// Convert from the raw rowan representation.
    ///
    /// Raw values outside the enum map to [`SyntaxKind::Error`].
    pub fn from_raw(raw: u16) -> Self {
        use SyntaxKind::*;
        const ALL: [SyntaxKind; SyntaxKind::LAST as usize + 1] = [
            Whitespace, Comment, Ident, BuiltinIdent, IntNumber, StringLit, ConstKw, VarKw,
            FnKw, PubKw, ReturnKw, StructKw, NoaliasKw, ComptimeKw, AnytypeKw, LParen, RParen,
            LBrace, RBrace, LBracket, RBracket, Comma, Semicolon, Colon, Dot, Eq, Star,
            Question, Bang, Plus, Minus, Slash, Amp, ErrorToken, Eof, SourceFile, FnDecl,
            ParamList, Param, VarDecl, TypeAnnotation, ContainerDecl, ContainerField, Block,
            ReturnStmt, ExprStmt, CallExpr, BuiltinCall, ArgList, FieldExpr, NameRef, Literal,
            ParenExpr, PrefixExpr, SliceType, BinExpr, Error,
        ];
        ALL.get(raw as usize).copied().unwrap_or(Error)
    }

    /// Whitespace and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Comment)
    }

    /// `noalias` or `comptime`.
    #[inline]
    pub const fn is_param_qualifier(self) -> bool {
        matches!(self, SyntaxKind::NoaliasKw | SyntaxKind::ComptimeKw)
    }

    /// Node kinds that [`Expr`](super::ast::Expr) accepts.
    pub const fn is_expr(self) -> bool {
        matches!(
            self,
            SyntaxKind::CallExpr
                | SyntaxKind::BuiltinCall
                | SyntaxKind::FieldExpr
                | SyntaxKind::NameRef
                | SyntaxKind::Literal
                | SyntaxKind::ParenExpr
                | SyntaxKind::PrefixExpr
                | SyntaxKind::SliceType
                | SyntaxKind::BinExpr
                | SyntaxKind::ContainerDecl
                | SyntaxKind::Error
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}
