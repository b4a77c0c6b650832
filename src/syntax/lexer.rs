//! Tokenization using logos.
//!
//! Trivia is kept (not skipped) so the tree built on top stays lossless.

use logos::Logos;
use text_size::{TextRange, TextSize};

use super::SyntaxKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"//[^\n]*")]
    Comment,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    BuiltinIdent,
    #[regex(r"[0-9][0-9_]*")]
    IntNumber,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLit,

    #[token("const")]
    Const,
    #[token("var")]
    Var,
    #[token("fn")]
    Fn,
    #[token("pub")]
    Pub,
    #[token("return")]
    Return,
    #[token("struct")]
    Struct,
    #[token("noalias")]
    Noalias,
    #[token("comptime")]
    Comptime,
    #[token("anytype")]
    Anytype,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("*")]
    Star,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("&")]
    Amp,
}

impl Token {
    fn kind(self) -> SyntaxKind {
        match self {
            Token::Whitespace => SyntaxKind::Whitespace,
            Token::Comment => SyntaxKind::Comment,
            Token::Ident => SyntaxKind::Ident,
            Token::BuiltinIdent => SyntaxKind::BuiltinIdent,
            Token::IntNumber => SyntaxKind::IntNumber,
            Token::StringLit => SyntaxKind::StringLit,
            Token::Const => SyntaxKind::ConstKw,
            Token::Var => SyntaxKind::VarKw,
            Token::Fn => SyntaxKind::FnKw,
            Token::Pub => SyntaxKind::PubKw,
            Token::Return => SyntaxKind::ReturnKw,
            Token::Struct => SyntaxKind::StructKw,
            Token::Noalias => SyntaxKind::NoaliasKw,
            Token::Comptime => SyntaxKind::ComptimeKw,
            Token::Anytype => SyntaxKind::AnytypeKw,
            Token::LParen => SyntaxKind::LParen,
            Token::RParen => SyntaxKind::RParen,
            Token::LBrace => SyntaxKind::LBrace,
            Token::RBrace => SyntaxKind::RBrace,
            Token::LBracket => SyntaxKind::LBracket,
            Token::RBracket => SyntaxKind::RBracket,
            Token::Comma => SyntaxKind::Comma,
            Token::Semicolon => SyntaxKind::Semicolon,
            Token::Colon => SyntaxKind::Colon,
            Token::Dot => SyntaxKind::Dot,
            Token::Eq => SyntaxKind::Eq,
            Token::Star => SyntaxKind::Star,
            Token::Question => SyntaxKind::Question,
            Token::Bang => SyntaxKind::Bang,
            Token::Plus => SyntaxKind::Plus,
            Token::Minus => SyntaxKind::Minus,
            Token::Slash => SyntaxKind::Slash,
            Token::Amp => SyntaxKind::Amp,
        }
    }
}

/// A single lexed token: its kind and the source range it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexedToken {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

/// Longest text whose offsets fit in a [`TextSize`].
pub const MAX_TEXT_LEN: usize = u32::MAX as usize;

/// Split `text` into tokens, trivia included.
///
/// Unrecognized input becomes [`SyntaxKind::ErrorToken`], so the ranges
/// tile the whole text. Text past [`MAX_TEXT_LEN`] bytes is not tokenized.
pub fn tokenize(text: &str) -> Vec<LexedToken> {
    let mut lexer = Token::lexer(text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let (Ok(start), Ok(end)) = (
            TextSize::try_from(span.start),
            TextSize::try_from(span.end),
        ) else {
            break;
        };
        let kind = match result {
            Ok(token) => token.kind(),
            Err(()) => SyntaxKind::ErrorToken,
        };
        tokens.push(LexedToken {
            kind,
            range: TextRange::new(start, end),
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<SyntaxKind> {
        tokenize(text).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords_win_over_identifiers() {
        assert_eq!(
            kinds("const constant"),
            vec![SyntaxKind::ConstKw, SyntaxKind::Whitespace, SyntaxKind::Ident]
        );
    }

    #[test]
    fn test_builtin_identifier() {
        assert_eq!(
            kinds("@import(\"std\")"),
            vec![
                SyntaxKind::BuiltinIdent,
                SyntaxKind::LParen,
                SyntaxKind::StringLit,
                SyntaxKind::RParen,
            ]
        );
    }

    #[test]
    fn test_tokens_tile_the_input() {
        let text = "var x = foo(1, \"é\"); // trailing\n$";
        let tokens = tokenize(text);

        let mut expected_start = TextSize::from(0);
        for token in &tokens {
            assert_eq!(token.range.start(), expected_start);
            expected_start = token.range.end();
        }
        assert_eq!(usize::from(expected_start), text.len());
        assert_eq!(tokens.last().map(|t| t.kind), Some(SyntaxKind::ErrorToken));
    }
}
