//! Recursive-descent parser producing a rowan green tree.
//!
//! The parser never fails: unexpected input is wrapped in
//! [`SyntaxKind::Error`] nodes and reported as a [`SyntaxError`]. Every loop
//! consumes at least one token per iteration, so parsing always terminates.
//! Nesting deeper than [`MAX_DEPTH`] is not descended into: the rest of that
//! nesting level becomes a single error node, which keeps recursion bounded.
//!
//! Trivia is attached to whichever node is open when the next significant
//! token is consumed. Nodes are only started after pending trivia is flushed,
//! so every node begins and ends on a significant token.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder};
use smol_str::SmolStr;
use text_size::TextSize;

use super::SyntaxKind::{self, *};
use super::lexer::{LexedToken, tokenize};

/// A recoverable error found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: SmolStr,
    pub offset: TextSize,
}

/// Deepest expression or block nesting the parser recurses into.
pub(super) const MAX_DEPTH: u32 = 512;

pub(super) fn parse_text(text: &str) -> (GreenNode, Vec<SyntaxError>) {
    let mut parser = Parser {
        text,
        tokens: tokenize(text),
        pos: 0,
        depth: 0,
        builder: GreenNodeBuilder::new(),
        errors: Vec::new(),
    };
    parser.source_file();
    (parser.builder.finish(), parser.errors)
}

struct Parser<'t> {
    text: &'t str,
    tokens: Vec<LexedToken>,
    pos: usize,
    depth: u32,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl Parser<'_> {
    // ------------------------------------------------------------------
    // Token cursor
    // ------------------------------------------------------------------

    /// Kind of the `n`-th significant token ahead.
    fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map_or(Eof, |t| t.kind)
    }

    fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    fn at_end(&self) -> bool {
        self.at(Eof)
    }

    fn flush_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.push_token(*token);
            self.pos += 1;
        }
    }

    fn push_token(&mut self, token: LexedToken) {
        let text = &self.text[token.range];
        self.builder.token(token.kind.into(), text);
    }

    /// Consume the next significant token, with any trivia before it.
    fn bump(&mut self) {
        self.flush_trivia();
        if let Some(token) = self.tokens.get(self.pos).copied() {
            self.push_token(token);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) {
        if !self.eat(kind) {
            self.error(format!("expected {kind:?}, found {:?}", self.current()));
        }
    }

    fn error(&mut self, message: String) {
        let offset = self
            .tokens
            .get(self.pos..)
            .and_then(|rest| rest.iter().find(|t| !t.kind.is_trivia()))
            .map_or_else(|| TextSize::of(self.text), |t| t.range.start());
        self.errors.push(SyntaxError {
            message: message.into(),
            offset,
        });
    }

    /// Wrap the next token in an error node.
    fn bump_error(&mut self, message: &str) {
        self.error(message.to_owned());
        if self.at_end() {
            return;
        }
        self.start(Error);
        self.bump();
        self.finish();
    }

    /// Track one more level of nesting. At the limit, the remainder of the
    /// current level is skipped into an error node and `false` is returned.
    fn enter(&mut self) -> bool {
        if self.depth >= MAX_DEPTH {
            self.error("nesting too deep".to_owned());
            self.skip_nested();
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Consume tokens up to the closing delimiter, `;`, or `,` that ends the
    /// current nesting level, balancing brackets iteratively.
    fn skip_nested(&mut self) {
        let mut balance = 0usize;
        let mut started = false;
        while !self.at_end() {
            match self.current() {
                LParen | LBracket | LBrace => balance += 1,
                RParen | RBracket | RBrace if balance == 0 => break,
                RParen | RBracket | RBrace => balance -= 1,
                Semicolon | Comma if balance == 0 => break,
                _ => {}
            }
            if !started {
                self.start(Error);
                started = true;
            }
            self.bump();
        }
        if started {
            self.finish();
        }
    }

    // ------------------------------------------------------------------
    // Node construction
    // ------------------------------------------------------------------

    fn start(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    fn start_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    // ------------------------------------------------------------------
    // Declarations and statements
    // ------------------------------------------------------------------

    fn source_file(&mut self) {
        self.builder.start_node(SourceFile.into());
        while !self.at_end() {
            let before = self.pos;
            self.item();
            if self.pos == before {
                self.bump_error("unexpected token at top level");
            }
        }
        // Trailing trivia belongs to the file.
        self.flush_trivia();
        self.finish();
    }

    fn item(&mut self) {
        let keyword = if self.at(PubKw) { self.nth(1) } else { self.current() };
        match keyword {
            FnKw => self.fn_decl(),
            ConstKw | VarKw => self.var_decl(),
            _ => self.expr_stmt(),
        }
    }

    fn fn_decl(&mut self) {
        self.start(FnDecl);
        self.eat(PubKw);
        self.expect(FnKw);
        self.expect(Ident);
        self.param_list();
        if !self.at(LBrace) && !self.at(Semicolon) {
            self.expr();
        }
        if self.at(LBrace) {
            self.block();
        } else {
            self.expect(Semicolon);
        }
        self.finish();
    }

    fn param_list(&mut self) {
        self.start(ParamList);
        self.expect(LParen);
        while !self.at(RParen) && !self.at_end() {
            let before = self.pos;
            self.param();
            if self.pos == before {
                self.bump_error("expected parameter");
            }
            if !self.eat(Comma) {
                break;
            }
        }
        self.expect(RParen);
        self.finish();
    }

    fn param(&mut self) {
        self.start(Param);
        while self.current().is_param_qualifier() {
            self.bump();
        }
        if self.at(Ident) && self.nth(1) == Colon {
            self.bump();
            self.bump();
        }
        if !self.eat(AnytypeKw) {
            self.expr();
        }
        self.finish();
    }

    fn var_decl(&mut self) {
        self.start(VarDecl);
        self.eat(PubKw);
        if !self.eat(ConstKw) {
            self.expect(VarKw);
        }
        self.expect(Ident);
        if self.at(Colon) {
            self.start(TypeAnnotation);
            self.bump();
            self.expr();
            self.finish();
        }
        if self.eat(Eq) {
            self.expr();
        }
        self.expect(Semicolon);
        self.finish();
    }

    fn block(&mut self) {
        if !self.enter() {
            return;
        }
        self.start(Block);
        self.expect(LBrace);
        while !self.at(RBrace) && !self.at_end() {
            let before = self.pos;
            self.stmt();
            if self.pos == before {
                self.bump_error("unexpected token in block");
            }
        }
        self.expect(RBrace);
        self.finish();
        self.leave();
    }

    fn stmt(&mut self) {
        match self.current() {
            ConstKw | VarKw => self.var_decl(),
            LBrace => self.block(),
            ReturnKw => {
                self.start(ReturnStmt);
                self.bump();
                if !self.at(Semicolon) {
                    self.expr();
                }
                self.expect(Semicolon);
                self.finish();
            }
            _ => self.expr_stmt(),
        }
    }

    fn expr_stmt(&mut self) {
        if !starts_expr(self.current()) {
            return;
        }
        self.start(ExprStmt);
        self.expr();
        self.expect(Semicolon);
        self.finish();
    }

    fn container_decl(&mut self) {
        self.start(ContainerDecl);
        self.expect(StructKw);
        self.expect(LBrace);
        while !self.at(RBrace) && !self.at_end() {
            let before = self.pos;
            let keyword = if self.at(PubKw) { self.nth(1) } else { self.current() };
            match keyword {
                FnKw => self.fn_decl(),
                ConstKw | VarKw => self.var_decl(),
                Ident => self.container_field(),
                _ => {}
            }
            if self.pos == before {
                self.bump_error("unexpected token in container");
            }
        }
        self.expect(RBrace);
        self.finish();
    }

    fn container_field(&mut self) {
        self.start(ContainerField);
        self.bump();
        if self.eat(Colon) {
            self.expr();
        }
        if self.eat(Eq) {
            self.expr();
        }
        if !self.at(RBrace) {
            self.expect(Comma);
        }
        self.finish();
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn expr(&mut self) {
        self.expr_bp(0);
    }

    fn expr_bp(&mut self, min_bp: u8) {
        if !self.enter() {
            return;
        }
        let checkpoint = self.checkpoint();
        self.unary();
        loop {
            let bp = match self.current() {
                Plus | Minus => 1,
                Star | Slash => 2,
                _ => break,
            };
            if bp <= min_bp {
                break;
            }
            self.start_at(checkpoint, BinExpr);
            self.bump();
            self.expr_bp(bp);
            self.finish();
        }
        self.leave();
    }

    fn unary(&mut self) {
        if !self.enter() {
            return;
        }
        match self.current() {
            Star | Question | Bang | Minus | Amp => {
                self.start(PrefixExpr);
                self.bump();
                self.eat(ConstKw);
                self.unary();
                self.finish();
            }
            LBracket => {
                self.start(SliceType);
                self.bump();
                self.expect(RBracket);
                self.eat(ConstKw);
                self.unary();
                self.finish();
            }
            _ => self.postfix(),
        }
        self.leave();
    }

    fn postfix(&mut self) {
        let checkpoint = self.checkpoint();
        if !self.primary() {
            return;
        }
        loop {
            match self.current() {
                LParen => {
                    self.start_at(checkpoint, CallExpr);
                    self.arg_list();
                    self.finish();
                }
                Dot if self.nth(1) == Ident => {
                    self.start_at(checkpoint, FieldExpr);
                    self.bump();
                    self.bump();
                    self.finish();
                }
                _ => break,
            }
        }
    }

    /// Returns `false` when nothing was produced.
    fn primary(&mut self) -> bool {
        match self.current() {
            Ident => {
                self.start(NameRef);
                self.bump();
                self.finish();
            }
            IntNumber | StringLit => {
                self.start(Literal);
                self.bump();
                self.finish();
            }
            BuiltinIdent => {
                self.start(BuiltinCall);
                self.bump();
                if self.at(LParen) {
                    self.arg_list();
                } else {
                    self.error("expected argument list after builtin".to_owned());
                }
                self.finish();
            }
            LParen => {
                self.start(ParenExpr);
                self.bump();
                self.expr();
                self.expect(RParen);
                self.finish();
            }
            StructKw => self.container_decl(),
            RParen | RBrace | RBracket | Semicolon | Comma | Eof => {
                self.error(format!("expected expression, found {:?}", self.current()));
                return false;
            }
            _ => {
                self.bump_error("expected expression");
            }
        }
        true
    }

    fn arg_list(&mut self) {
        self.start(ArgList);
        self.expect(LParen);
        while !self.at(RParen) && !self.at_end() {
            let before = self.pos;
            self.expr();
            if self.pos == before {
                self.bump_error("expected argument");
            }
            if !self.eat(Comma) {
                break;
            }
        }
        self.expect(RParen);
        self.finish();
    }
}

fn starts_expr(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        Ident
            | IntNumber
            | StringLit
            | BuiltinIdent
            | LParen
            | StructKw
            | Star
            | Question
            | Bang
            | Minus
            | Amp
            | LBracket
    )
}
